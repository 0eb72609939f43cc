//! foods - CRUD HTTP service over a concurrent in-memory food store
//!
//! - `store`: records, uniqueness invariant, id sequence
//! - `encoding`: JSON / XML / text response bodies
//! - `http_server`: axum routes and server
//! - `observability`: JSON logger, events, counters
//! - `cli`: `foods serve`

pub mod cli;
pub mod encoding;
pub mod http_server;
pub mod observability;
pub mod store;
