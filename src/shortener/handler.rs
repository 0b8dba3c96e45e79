//! Request handling
//!
//! Maps one parsed HTTP request to one response, consulting the mapping
//! store for POST requests. Malformed POST bodies are contained here as 400
//! responses; no error crosses back into the session.

use serde::Serialize;

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::shortener::store::MappingStore;

#[derive(Serialize)]
struct ShortenReply {
    #[serde(rename = "shortened url")]
    shortened_url: String,
}

/// Handles requests against the shortening service.
#[derive(Clone)]
pub struct ShortenerHandler {
    store: MappingStore,
}

impl ShortenerHandler {
    pub fn new(store: MappingStore) -> Self {
        Self { store }
    }

    /// Produces the response for `req`.
    ///
    /// - GET (any path): 200 text/plain "Hello, World!"
    /// - POST: body must be a JSON string literal; a known short URL resolves
    ///   to its original, anything else is shortened
    /// - other methods: 400 with an empty body
    pub async fn handle(&self, req: &Request) -> Response {
        match req.method {
            Method::GET => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "text/plain")
                .header("Connection", connection_value(req))
                .body(b"Hello, World!".to_vec())
                .build(),

            Method::POST => self.handle_post(req).await,

            _ => ResponseBuilder::new(StatusCode::BadRequest)
                .header("Connection", connection_value(req))
                .build(),
        }
    }

    async fn handle_post(&self, req: &Request) -> Response {
        // The body must be a bare JSON string literal, e.g. "http://example.com"
        let submitted: String = match serde_json::from_slice(&req.body) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting POST with malformed body");
                return ResponseBuilder::new(StatusCode::BadRequest)
                    .header("Connection", connection_value(req))
                    .build();
            }
        };

        tracing::info!(url = %submitted, "Received url");

        // A previously issued short URL resolves back to its original;
        // anything else gets a fresh code, even a repeated original
        let value = match self.store.lookup(&submitted).await {
            Some(original) => original,
            None => self.store.insert_new(&submitted).await,
        };

        let reply = ShortenReply { shortened_url: value };
        let body = serde_json::to_vec(&reply).unwrap_or_default();

        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/json")
            .header("Connection", connection_value(req))
            .body(body)
            .build()
    }
}

fn connection_value(req: &Request) -> &'static str {
    if req.keep_alive() { "keep-alive" } else { "close" }
}
