use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::models::{Match, MatchEvent, MatchEvents, NewMatch};

pub async fn list(db: &SqlitePool) -> Result<Vec<Match>> {
    sqlx::query_as::<_, Match>("SELECT id, duration FROM matches ORDER BY id")
        .fetch_all(db)
        .await
        .context("listing matches")
}

/// A match plus its `{player, event}` pairs. `None` when the id is unknown.
pub async fn find_with_events(db: &SqlitePool, id: i64) -> Result<Option<MatchEvents>> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM matches WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
        .context("fetching match")?;

    let Some(match_id) = found else {
        return Ok(None);
    };

    let events = sqlx::query_as::<_, MatchEvent>(
        r#"
        SELECT player_username AS player,
               event_name      AS event
          FROM event_histories
         WHERE match_id = ?
         ORDER BY id
        "#,
    )
    .bind(match_id)
    .fetch_all(db)
    .await
    .context("fetching match events")?;

    Ok(Some(MatchEvents { match_id, events }))
}

/// Inserts the match and all of its event-history rows in one transaction
/// and returns the new match id. If any row fails (unknown player or event,
/// missing field) nothing is written.
pub async fn insert_with_events(db: &SqlitePool, new: &NewMatch) -> Result<i64> {
    let mut tx = db.begin().await.context("opening match transaction")?;

    let match_id = sqlx::query("INSERT INTO matches (duration) VALUES (?)")
        .bind(new.duration)
        .execute(&mut *tx)
        .await
        .context("inserting match")?
        .last_insert_rowid();

    for occurrence in &new.events {
        sqlx::query(
            "INSERT INTO event_histories (match_id, player_username, event_name)
             VALUES (?, ?, ?)",
        )
        .bind(match_id)
        .bind(occurrence.player.as_deref())
        .bind(occurrence.event.as_deref())
        .execute(&mut *tx)
        .await
        .with_context(|| {
            format!(
                "recording event {:?} for player {:?}",
                occurrence.event, occurrence.player
            )
        })?;
    }

    tx.commit().await.context("committing match")?;
    Ok(match_id)
}

/// Deletes the match; its event-history rows go with it.
pub async fn delete(db: &SqlitePool, id: i64) -> Result<u64> {
    let rows = sqlx::query("DELETE FROM matches WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("deleting match")?
        .rows_affected();
    Ok(rows)
}
