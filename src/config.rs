//! Runtime configuration for the match-log server.

use std::{env, fmt};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://matchlog.db?mode=rwc";
pub const DEFAULT_JWT_SECRET: &str = "secret";

#[derive(Clone)]
pub struct Settings {
    /// sqlx connection string.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// HS256 key used to sign session tokens.
    pub jwt_secret: String,
    /// Set when `JWT_SECRET` is missing and [`DEFAULT_JWT_SECRET`] is in use.
    pub jwt_secret_is_default: bool,
    pub db_max_connections: u32,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8088);

        let secret = lookup("JWT_SECRET");
        let jwt_secret_is_default = secret.is_none();
        let jwt_secret = secret.unwrap_or_else(|| DEFAULT_JWT_SECRET.into());

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5);

        Settings {
            database_url,
            host,
            port,
            jwt_secret,
            jwt_secret_is_default,
            db_max_connections,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_secret_is_default", &self.jwt_secret_is_default)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}
