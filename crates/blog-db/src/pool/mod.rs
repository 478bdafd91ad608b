//! Database connection pool management

mod migrate;
mod postgres;

pub use migrate::{run_migrations, MIGRATIONS_DIR};
pub use postgres::{create_pool, create_pool_from_env, ping, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
