//! Tinylink - In-Memory URL Shortener
//!
//! Core library for the HTTP layer and the shortening service.

pub mod config;
pub mod http;
pub mod server;
pub mod shortener;
