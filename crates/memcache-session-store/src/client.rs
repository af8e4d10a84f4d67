//! Cache client abstraction.
//!
//! The store delegates all storage to a [`CacheClient`]: a minimal
//! key-value capability set with per-write TTLs. Transport concerns
//! (connections, pooling, authentication, timeouts) live entirely behind
//! this trait; a client failure of any kind surfaces as
//! [`Error::Cache`](crate::Error::Cache).
//!
//! [`MemoryCacheClient`] is a self-contained implementation used as the
//! test double and usable as a single-process backend.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::StoreConfig;
use crate::error::Result;

/// Minimal capability set the store needs from a key-value cache.
///
/// All operations are asynchronous and single-shot; implementations must
/// tolerate concurrent and repeated invocation.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Fetch the raw bytes stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or expired — that is a
    /// valid outcome, not an error.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key` with the given TTL in seconds.
    async fn set(&self, key: &str, value: &[u8], ttl_secs: i64) -> Result<()>;

    /// Delete the entry under `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Number of live entries in the cache.
    async fn count(&self) -> Result<u64>;

    /// Remove every entry in the cache.
    async fn flush_all(&self) -> Result<()>;
}

/// A cache client that can be built from endpoint configuration.
///
/// Used by [`SessionCacheStore::connect`](crate::SessionCacheStore::connect)
/// when no pre-built client is injected. Transport implementations live
/// outside this crate.
#[async_trait]
pub trait ConnectCacheClient: CacheClient + Sized {
    /// Connect a client using the hosts, port, and credentials in `config`.
    async fn connect(config: &StoreConfig) -> Result<Self>;
}

#[derive(Debug)]
struct MemoryEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|deadline| now < deadline)
    }
}

/// In-memory [`CacheClient`] backed by a `HashMap`.
///
/// TTL semantics follow memcached: a positive TTL expires the entry after
/// that many seconds, zero means no expiry, and a negative TTL is treated
/// as already expired. Expired entries are pruned lazily on access.
#[derive(Debug, Default)]
pub struct MemoryCacheClient {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryCacheClient {
    /// Create an empty in-memory cache client.
    pub fn new() -> Self {
        Self::default()
    }

    fn deadline(ttl_secs: i64) -> Option<Instant> {
        match ttl_secs {
            0 => None,
            t if t > 0 => Some(Instant::now() + Duration::from_secs(t as u64)),
            _ => Some(Instant::now()),
        }
    }
}

#[async_trait]
impl CacheClient for MemoryCacheClient {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.is_live(Instant::now()) {
                return Ok(Some(entry.value.clone()));
            }
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl_secs: i64) -> Result<()> {
        let entry = MemoryEntry {
            value: value.to_vec(),
            expires_at: Self::deadline(ttl_secs),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries.values().filter(|e| e.is_live(now)).count() as u64)
    }

    async fn flush_all(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl ConnectCacheClient for MemoryCacheClient {
    /// The in-memory client has no transport; endpoint configuration is
    /// accepted and ignored.
    async fn connect(_config: &StoreConfig) -> Result<Self> {
        Ok(Self::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let client = MemoryCacheClient::new();
        client.set("k1", b"v1", 0).await.unwrap();

        assert_eq!(client.get("k1").await.unwrap(), Some(b"v1".to_vec()));
        assert_eq!(client.get("k2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete() {
        let client = MemoryCacheClient::new();
        client.set("k1", b"v1", 0).await.unwrap();
        client.delete("k1").await.unwrap();

        assert_eq!(client.get("k1").await.unwrap(), None);

        // Deleting an absent key is fine.
        client.delete("k1").await.unwrap();
    }

    #[tokio::test]
    async fn test_negative_ttl_is_already_expired() {
        let client = MemoryCacheClient::new();
        client.set("k1", b"v1", -2).await.unwrap();

        assert_eq!(client.get("k1").await.unwrap(), None);
        assert_eq!(client.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_positive_ttl_expires() {
        let client = MemoryCacheClient::new();
        client.set("k1", b"v1", 1).await.unwrap();

        assert_eq!(client.get("k1").await.unwrap(), Some(b"v1".to_vec()));

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(client.get("k1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_count_and_flush() {
        let client = MemoryCacheClient::new();
        client.set("k1", b"v1", 0).await.unwrap();
        client.set("k2", b"v2", 0).await.unwrap();

        assert_eq!(client.count().await.unwrap(), 2);

        client.flush_all().await.unwrap();
        assert_eq!(client.count().await.unwrap(), 0);
        assert_eq!(client.get("k1").await.unwrap(), None);
    }
}
