use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Player {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Username-only projection of [`Player`] used for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlayerName {
    pub username: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub value: i64,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Match {
    pub id: i64,
    pub duration: i64,
}

//////////////////////////////////////////////////
// Inserts
//////////////////////////////////////////////////

// Fields stay optional so an omitted value reaches the database as NULL and
// is rejected by the column constraint.

#[derive(Debug, Default, Deserialize)]
pub struct NewPlayer {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "integer_or_numeric_string")]
    pub value: Option<i64>,
}

/// One "player triggered event" entry of a new match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewOccurrence {
    pub player: Option<String>,
    pub event: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewMatch {
    #[serde(default, deserialize_with = "integer_or_numeric_string")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub events: Vec<NewOccurrence>,
}

/// Integer columns take `10` as well as `"10"`; form bodies only carry text.
fn integer_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("not an integer: {text:?}"))),
    }
}

//////////////////////////////////////////////////
// Aggregate views
//////////////////////////////////////////////////

/// A player together with every event they triggered, oldest first.
#[derive(Debug, Serialize)]
pub struct PlayerTimeline {
    pub username: String,
    pub email: String,
    pub events: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TimelineEntry {
    #[serde(rename = "match")]
    pub match_id: i64,
    pub event: String,
    pub description: String,
    pub value: i64,
}

/// A match with its `{player, event}` pairs in recorded order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvents {
    pub match_id: i64,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MatchEvent {
    pub player: String,
    pub event: String,
}
