//! PostgreSQL persistence for movies.
//!
//! The [`DbPool`] returned by [`create_pool`] is the connection provider:
//! every repository call acquires a connection (or transaction) from it and
//! releases it when the call returns.

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

/// Schema state as seen from the migration ledger and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    /// Highest successfully applied migration version, if any.
    pub migration_version: Option<i64>,
    /// Both `movies` and `genres` tables are present.
    pub tables_ready: bool,
}

/// Inspect which migrations have run and whether the movie tables exist.
///
/// A database that was never migrated has no `_sqlx_migrations` table; that
/// reports `migration_version: None` instead of an error.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let (ledger_present, tables_ready) = sqlx::query_as::<_, (bool, bool)>(
        "SELECT to_regclass('_sqlx_migrations') IS NOT NULL,
                to_regclass('movies') IS NOT NULL AND to_regclass('genres') IS NOT NULL",
    )
    .fetch_one(pool)
    .await?;

    let migration_version = if ledger_present {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT MAX(version) FROM _sqlx_migrations WHERE success",
        )
        .fetch_one(pool)
        .await?
    } else {
        None
    };

    Ok(SchemaStatus {
        migration_version,
        tables_ready,
    })
}

/// Apply the embedded schema migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Schema migrations up to date");
    Ok(())
}
