//! # HTTP Server Module
//!
//! Translates HTTP requests into food store calls and store outcomes into
//! status codes and encoded bodies.
//!
//! # Endpoints
//!
//! - `/foods`, `/foods/:id` - CRUD and search
//! - `/health` - Health check
//! - `/metrics` - Counters

pub mod config;
pub mod errors;
pub mod food_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use food_routes::FoodsState;
pub use server::{HttpServer, REQUEST_ID_HEADER};
