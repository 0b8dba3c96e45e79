#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub public_host: String,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        // Prefix baked into every short URL handed back to clients
        let public_host =
            std::env::var("PUBLIC_HOST")
                .unwrap_or_else(|_| "localhost:8080".to_string());
        Self { listen_addr, public_host }
    }
}
