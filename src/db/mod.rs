//! SQLite persistence: pool setup, schema management and one repository
//! module per record kind.

pub mod event_repo;
pub mod match_repo;
pub mod models;
pub mod player_repo;
pub mod schema;

use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Settings;

/// Opens the pool described by `settings` and runs [`schema::update`].
///
/// In-memory databases live and die with a single connection, so they get a
/// one-connection pool that never recycles it.
pub async fn connect(settings: &Settings) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)
        .with_context(|| format!("parsing DATABASE_URL `{}`", settings.database_url))?
        .foreign_keys(true);

    let pool_options = if is_in_memory(&settings.database_url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(settings.db_max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .context("connecting to database")?;

    schema::update(&pool).await?;
    Ok(pool)
}

/// Round-trips a trivial query.
pub async fn ping(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("SELECT 1")
        .execute(db)
        .await
        .context("pinging database")?;
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let settings = Settings::from_lookup(|key| {
        (key == "DATABASE_URL").then(|| "sqlite::memory:".to_string())
    });
    connect(&settings).await.expect("in-memory database")
}
