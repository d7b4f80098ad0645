//! Persistence Store contract

use crate::error::Result;
use async_trait::async_trait;

/// Durable key-value storage for user state.
///
/// Values are opaque serialized strings; each consumer owns a disjoint key
/// namespace (`playlists`, `favorites`, `currentUser`, `users`), so writers
/// never conflict. The SQLite implementation lives in `muse-storage`.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`; succeeds even if the key is absent
    async fn remove(&self, key: &str) -> Result<()>;
}
