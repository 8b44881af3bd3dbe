//! Process-wide state shared by every request handler.

use sqlx::SqlitePool;

use crate::{config::Settings, db};

/// Built once at startup and handed to the HTTP layer through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub db: SqlitePool,
}

impl AppContext {
    /// Connects to the configured database and brings its schema up to date.
    pub async fn init(settings: Settings) -> anyhow::Result<Self> {
        let db = db::connect(&settings).await?;
        Ok(Self::new(settings, db))
    }

    pub fn new(settings: Settings, db: SqlitePool) -> Self {
        Self { settings, db }
    }
}
