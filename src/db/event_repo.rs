use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::models::{Event, NewEvent};

pub async fn list(db: &SqlitePool) -> Result<Vec<Event>> {
    sqlx::query_as::<_, Event>("SELECT name, description, value FROM events ORDER BY rowid")
        .fetch_all(db)
        .await
        .context("listing events")
}

pub async fn insert(db: &SqlitePool, event: &NewEvent) -> Result<()> {
    sqlx::query("INSERT INTO events (name, description, value) VALUES (?, ?, ?)")
        .bind(event.name.as_deref())
        .bind(event.description.as_deref())
        .bind(event.value)
        .execute(db)
        .await
        .context("inserting event")?;
    Ok(())
}

/// Removes the event definition along with every recorded occurrence of it.
pub async fn delete(db: &SqlitePool, name: &str) -> Result<u64> {
    let rows = sqlx::query("DELETE FROM events WHERE name = ?")
        .bind(name)
        .execute(db)
        .await
        .context("deleting event")?
        .rows_affected();
    Ok(rows)
}
