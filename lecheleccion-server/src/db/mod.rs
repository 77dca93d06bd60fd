//! Database layer - connection pool, repositories and the store seam
//!
//! - One `PgPool` built at startup and injected; no global handle
//! - Columns are named explicitly; no `SELECT *`
//! - Handlers only see [`BiasStore`], so tests can swap in [`MemoryStore`]

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, DbConfig};
pub use repos::DbError;
pub use store::{BiasStore, PgStore};
