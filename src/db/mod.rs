//! Database connection pool and embedded migrations.
//!
//! Provides async PostgreSQL connection pooling using diesel_async with bb8.

mod migrate;
mod pool;

pub use migrate::{apply_migrations, pending_migrations, revert_migrations};
pub use pool::{AsyncDbPool, MIGRATIONS, establish_async_connection_pool};
