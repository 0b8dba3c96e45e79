//! URL shortening functionality
//!
//! This module implements the core shortening logic: sequential short-code
//! generation, the in-memory mapping store, and the request handler that
//! ties them to the HTTP layer.

pub mod codes;
pub mod store;
pub mod handler;

pub use codes::CodeGenerator;
pub use store::MappingStore;
pub use handler::ShortenerHandler;
