//! SQLite-backed state store

use async_trait::async_trait;
use muse_core::{MuseError, Result, StateStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;

/// Key-value store over a single SQLite table
///
/// Values are JSON strings; each consumer owns a disjoint key (see
/// [`crate::keys`]), so writers never collide. Cloning is cheap and
/// shares the underlying pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at the given URL
    ///
    /// # Errors
    /// Returns an error if the connection fails or migrations fail
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| MuseError::storage(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| MuseError::storage(e.to_string()))?;

        Self::run_migrations(&pool).await?;
        tracing::debug!("State store ready at {}", database_url);

        Ok(Self { pool })
    }

    /// Create an in-memory store (for testing)
    ///
    /// Limited to a single connection: every pooled connection to
    /// `sqlite::memory:` would otherwise get its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| MuseError::storage(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| MuseError::storage(e.to_string()))?;

        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Create a store from an existing pool (for testing)
    ///
    /// The caller is responsible for the schema being in place.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the embedded schema
    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        const MIGRATIONS: &[&str] = &[include_str!("../migrations/001_create_app_state.sql")];

        for migration in MIGRATIONS {
            sqlx::query(migration)
                .execute(pool)
                .await
                .map_err(|e| MuseError::storage(format!("migration failed: {e}")))?;
        }

        Ok(())
    }
}

#[async_trait]
impl StateStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM app_state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MuseError::storage(e.to_string()))?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| MuseError::storage(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM app_state WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| MuseError::storage(e.to_string()))?;

        Ok(())
    }
}
