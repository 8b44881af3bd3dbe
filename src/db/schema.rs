//! Table definitions plus the destructive and non-destructive migrations.

use anyhow::Context;
use sqlx::SqlitePool;

/// Every column is NOT NULL; a missing request field surfaces as a NOT NULL
/// violation. `TEXT PRIMARY KEY` needs the explicit NOT NULL in SQLite.
const CREATE_STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS players (
           username TEXT PRIMARY KEY NOT NULL,
           email    TEXT NOT NULL,
           password TEXT NOT NULL
       )"#,
    r#"CREATE TABLE IF NOT EXISTS events (
           name        TEXT PRIMARY KEY NOT NULL,
           description TEXT NOT NULL,
           value       INTEGER NOT NULL
       )"#,
    r#"CREATE TABLE IF NOT EXISTS matches (
           id       INTEGER PRIMARY KEY AUTOINCREMENT,
           duration INTEGER NOT NULL
       )"#,
    r#"CREATE TABLE IF NOT EXISTS event_histories (
           id              INTEGER PRIMARY KEY AUTOINCREMENT,
           match_id        INTEGER NOT NULL REFERENCES matches (id) ON DELETE CASCADE,
           player_username TEXT NOT NULL REFERENCES players (username) ON DELETE CASCADE,
           event_name      TEXT NOT NULL REFERENCES events (name) ON DELETE CASCADE
       )"#,
    "CREATE INDEX IF NOT EXISTS event_histories_match ON event_histories (match_id)",
    "CREATE INDEX IF NOT EXISTS event_histories_player ON event_histories (player_username)",
    "CREATE INDEX IF NOT EXISTS event_histories_event ON event_histories (event_name)",
];

/// Children first, so no drop trips a foreign key.
const DROP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS event_histories",
    "DROP TABLE IF EXISTS matches",
    "DROP TABLE IF EXISTS events",
    "DROP TABLE IF EXISTS players",
];

/// Drops every table and recreates the schema. All data is lost and match
/// ids start again at 1.
pub async fn reset(db: &SqlitePool) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("opening reset transaction")?;

    for stmt in DROP_STATEMENTS.iter().chain(CREATE_STATEMENTS) {
        sqlx::query(stmt)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("resetting schema: {}", first_line(stmt)))?;
    }

    tx.commit().await.context("committing schema reset")?;
    log::info!("database schema reset");
    Ok(())
}

/// Creates whatever tables and indexes are missing; existing rows are kept.
pub async fn update(db: &SqlitePool) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("opening update transaction")?;

    for stmt in CREATE_STATEMENTS {
        sqlx::query(stmt)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("updating schema: {}", first_line(stmt)))?;
    }

    tx.commit().await.context("committing schema update")?;
    log::info!("database schema up to date");
    Ok(())
}

fn first_line(stmt: &str) -> &str {
    stmt.lines().next().unwrap_or(stmt).trim()
}
