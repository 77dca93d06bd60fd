//! lecheleccion-server: read-only JSON API over the bias database
//!
//! Routes map straight onto fixed SELECT statements against the
//! `collections` schema. Nothing is written back; the external system of
//! record owns every row.

pub mod db;
pub mod http;

pub use db::{create_pool, BiasStore, DbConfig, DbError, MemoryStore, PgStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
