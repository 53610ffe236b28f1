//! Database layer: connection pools, migrations, models and repositories.
//!
//! Two PostgreSQL databases are involved: the primary store (system of
//! record for projects and goods) and the analytical store (append-only
//! copy fed by the replication consumer). Each has its own pool and its
//! own embedded migration set.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply primary-store migrations (projects, goods).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Apply analytical-store migrations (the append-only goods table).
pub async fn run_archive_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/archive_migrations").run(pool).await
}
