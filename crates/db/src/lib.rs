//! Persistence layer: pool lifecycle, migrations, row models, repositories.
//!
//! The pool is created once at startup and handed to whoever needs it; there
//! is no ambient global connection. Call [`close_pool`] on shutdown.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Close every connection in the pool, waiting for checked-out ones to return.
pub async fn close_pool(pool: DbPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
