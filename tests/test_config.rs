use tinylink::config::Config;

#[test]
fn test_config_listen_address() {
    // When LISTEN env var is not set, should use the default
    unsafe {
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");

    // When LISTEN env var is set, should use it
    unsafe {
        std::env::set_var("LISTEN", "127.0.0.1:3000");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_public_host() {
    unsafe {
        std::env::remove_var("PUBLIC_HOST");
    }
    let cfg = Config::load();
    assert_eq!(cfg.public_host, "localhost:8080");

    unsafe {
        std::env::set_var("PUBLIC_HOST", "short.example.com");
    }
    let cfg = Config::load();
    assert_eq!(cfg.public_host, "short.example.com");
    unsafe {
        std::env::remove_var("PUBLIC_HOST");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.public_host, cfg2.public_host);
}
