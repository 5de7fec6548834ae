// Store handle management
use crate::error::{DatabaseError, DatabaseResult};
use crate::schema;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Configuration for the local record store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalStoreConfig {
    /// SQLite connection URL, e.g. `sqlite:hospital.db`
    pub url: String,
    /// Pool size. The store has a single writer, so this stays at 1
    /// unless read-only tooling shares the handle.
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Whether to enable WAL mode
    pub enable_wal: bool,
    /// Insert the default rooms when the rooms table is empty
    pub seed_rooms: bool,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:hospital.db".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 30,
            enable_wal: true,
            seed_rooms: true,
        }
    }
}

impl LocalStoreConfig {
    /// Config for a database file at `path`
    pub fn at_path(path: impl AsRef<std::path::Path>) -> Self {
        Self {
            url: format!("sqlite:{}", path.as_ref().display()),
            ..Self::default()
        }
    }
}

/// Process-wide store handle. Cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct LocalStore {
    pool: SqlitePool,
    url: String,
}

impl LocalStore {
    /// Open the store, create missing tables and seed default rooms
    pub async fn open(config: &LocalStoreConfig) -> DatabaseResult<Self> {
        let journal_mode = if config.enable_wal {
            SqliteJournalMode::Wal
        } else {
            SqliteJournalMode::Delete
        };

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(journal_mode)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        schema::initialize(&pool).await?;
        if config.seed_rooms {
            schema::seed_default_rooms(&pool).await?;
        }

        info!(url = %config.url, "Record store opened");

        Ok(Self {
            pool,
            url: config.url.clone(),
        })
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check if the store answers queries
    pub async fn is_healthy(&self) -> bool {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Record store health check failed: {}", e);
                false
            }
        }
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(self) {
        self.pool.close().await;
        info!(url = %self.url, "Record store closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_file_and_is_healthy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hospital.db");

        let store = LocalStore::open(&LocalStoreConfig::at_path(&path)).await.unwrap();
        assert!(store.is_healthy().await);
        assert!(path.exists());
        store.close().await;
    }

    #[tokio::test]
    async fn test_wal_mode_enabled() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(&LocalStoreConfig::at_path(dir.path().join("wal.db")))
            .await
            .unwrap();

        let row = sqlx::query("PRAGMA journal_mode")
            .fetch_one(store.pool())
            .await
            .unwrap();
        let mode: String = row.try_get(0).unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_unreachable_path_is_connection_failure() {
        let dir = TempDir::new().unwrap();
        let config = LocalStoreConfig::at_path(dir.path().join("missing").join("hospital.db"));
        let err = LocalStore::open(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
    }
}
