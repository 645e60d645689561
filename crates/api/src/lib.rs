//! HTTP API: server bootstrap, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod server;

pub use config::ServerConfig;
