//! Database layer for the LightBnB data-access service.
//!
//! Provides connection configuration, SQLite connection pooling (via `r2d2`),
//! WAL-mode initialization, the `casefold` SQL function, and the embedded migrations that create the
//! `users`, `properties`, `reservations`, and `property_reviews` tables.
//!
//! Migrations are compiled into the binary via `include_str!` so the schema
//! ships with the code that queries it.

mod config;
mod functions;
mod migrations;
mod pool;

pub use config::ConnectionConfig;
pub use functions::{register_functions, CASEFOLD_FUNCTION};
pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, PoolError};
