//! Server entry point: socket ownership and the accept loop.

pub mod listener;
