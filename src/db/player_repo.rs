use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::models::{NewPlayer, Player, PlayerName, PlayerTimeline, TimelineEntry};

/// All usernames in registration order.
pub async fn list_usernames(db: &SqlitePool) -> Result<Vec<PlayerName>> {
    sqlx::query_as::<_, PlayerName>("SELECT username FROM players ORDER BY rowid")
        .fetch_all(db)
        .await
        .context("listing players")
}

/// A player plus every event they triggered, joined with the event
/// definition. `None` when the username is unknown.
pub async fn find_with_timeline(db: &SqlitePool, username: &str) -> Result<Option<PlayerTimeline>> {
    let player = sqlx::query_as::<_, (String, String)>(
        "SELECT username, email FROM players WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(db)
    .await
    .context("fetching player")?;

    let Some((username, email)) = player else {
        return Ok(None);
    };

    let events = sqlx::query_as::<_, TimelineEntry>(
        r#"
        SELECT h.match_id    AS match_id,
               e.name        AS event,
               e.description AS description,
               e.value       AS value
          FROM event_histories h
          JOIN events e ON e.name = h.event_name
         WHERE h.player_username = ?
         ORDER BY h.id
        "#,
    )
    .bind(&username)
    .fetch_all(db)
    .await
    .context("fetching player timeline")?;

    Ok(Some(PlayerTimeline {
        username,
        email,
        events,
    }))
}

/// Exact match on both columns; passwords are stored as submitted.
pub async fn find_by_credentials(
    db: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<Player>> {
    sqlx::query_as::<_, Player>(
        "SELECT username, email, password FROM players WHERE username = ? AND password = ?",
    )
    .bind(username)
    .bind(password)
    .fetch_optional(db)
    .await
    .context("looking up credentials")
}

pub async fn insert(db: &SqlitePool, player: &NewPlayer) -> Result<()> {
    sqlx::query("INSERT INTO players (username, email, password) VALUES (?, ?, ?)")
        .bind(player.username.as_deref())
        .bind(player.email.as_deref())
        .bind(player.password.as_deref())
        .execute(db)
        .await
        .context("inserting player")?;
    Ok(())
}

/// Deletes the player and, through the foreign keys, their event history.
/// Returns the number of player rows removed.
pub async fn delete(db: &SqlitePool, username: &str) -> Result<u64> {
    let rows = sqlx::query("DELETE FROM players WHERE username = ?")
        .bind(username)
        .execute(db)
        .await
        .context("deleting player")?
        .rows_affected();
    Ok(rows)
}
