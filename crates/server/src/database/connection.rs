use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Error as SqlxError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DbConfig {
    path: Option<String>,
    max_connections: Option<u32>,
}

impl DbConfig {
    const MAX_CONN_FALLBACK: u32 = 5;

    pub fn in_memory() -> Self {
        Self {
            path: None,
            max_connections: None,
        }
    }

    pub fn get_url(&self) -> String {
        match self.path.as_deref() {
            Some(path) => format!("sqlite://{path}?mode=rwc"),
            None => "sqlite::memory:".to_string(),
        }
    }

    pub fn max_connections(&self) -> u32 {
        if self.path.is_none() {
            // every connection to `:memory:` opens its own database
            return 1;
        }
        self.max_connections.unwrap_or(Self::MAX_CONN_FALLBACK)
    }
}

pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    pub async fn connect(config: &DbConfig) -> Result<Self, SqlxError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections())
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.get_url())
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
