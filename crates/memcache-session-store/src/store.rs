//! Session store over an injected cache client.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::client::{CacheClient, ConnectCacheClient};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::key::derive_key;
use crate::record::SessionRecord;
use crate::ttl::session_ttl;

/// Capability set a session middleware needs from a store.
///
/// Every operation resolves exactly once with success, an absent result
/// (`get` only), or an error. Absent is never an error.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the session record for `sid`, or `None` if there isn't one.
    async fn get(&self, sid: &str) -> Result<Option<SessionRecord>>;

    /// Write the session record for `sid` with a TTL derived from the record.
    async fn set(&self, sid: &str, record: &SessionRecord) -> Result<()>;

    /// Delete the session record for `sid`.
    async fn destroy(&self, sid: &str) -> Result<()>;

    /// Number of sessions currently stored.
    async fn length(&self) -> Result<u64>;

    /// Delete all sessions.
    async fn clear(&self) -> Result<()>;
}

/// Session store backed by an external key-value cache.
///
/// Translates session ids into namespaced cache keys, serializes records as
/// JSON, and delegates storage to a shared [`CacheClient`]. The store itself
/// is stateless across calls — each operation is one request to the client —
/// so a single instance can be shared freely between concurrent callers.
/// Cross-call ordering is whatever the cache client provides; this layer
/// adds no retries and no timeouts.
pub struct SessionCacheStore {
    prefix: String,
    client: Arc<dyn CacheClient>,
}

impl SessionCacheStore {
    /// Build a store around an already-connected cache client.
    pub fn with_client(config: StoreConfig, client: Arc<dyn CacheClient>) -> Self {
        Self {
            prefix: config.prefix,
            client,
        }
    }

    /// Build a store by connecting a client of type `C` from the configured
    /// hosts and credentials.
    ///
    /// Fails fast with [`Error::Configuration`] when `config.hosts` is empty:
    /// with no injected client and no endpoints there is nothing to talk to.
    pub async fn connect<C>(config: StoreConfig) -> Result<Self>
    where
        C: ConnectCacheClient + 'static,
    {
        if config.hosts.is_empty() {
            return Err(Error::Configuration(
                "no cache client injected and no hosts configured".to_string(),
            ));
        }

        let client = C::connect(&config).await?;
        debug!(hosts = ?config.hosts, port = config.port, "cache client connected");

        Ok(Self {
            prefix: config.prefix,
            client: Arc::new(client),
        })
    }

    /// The key namespace prefix this store was configured with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn key(&self, sid: &str) -> String {
        derive_key(&self.prefix, sid)
    }
}

#[async_trait]
impl SessionStore for SessionCacheStore {
    async fn get(&self, sid: &str) -> Result<Option<SessionRecord>> {
        let key = self.key(sid);

        // A client error is surfaced as-is; no parse is attempted.
        let Some(raw) = self.client.get(&key).await? else {
            debug!(sid = %sid, "session absent");
            return Ok(None);
        };

        let record = serde_json::from_slice(&raw)?;
        trace!(sid = %sid, bytes = raw.len(), "session loaded");
        Ok(Some(record))
    }

    async fn set(&self, sid: &str, record: &SessionRecord) -> Result<()> {
        let ttl_secs = session_ttl(record);

        // Encode before touching the cache so an encoding failure never
        // turns into a partial write.
        let payload = serde_json::to_vec(record)?;

        let key = self.key(sid);
        self.client.set(&key, &payload, ttl_secs).await?;

        trace!(sid = %sid, ttl_secs, bytes = payload.len(), "session stored");
        Ok(())
    }

    async fn destroy(&self, sid: &str) -> Result<()> {
        let key = self.key(sid);
        self.client.delete(&key).await?;
        debug!(sid = %sid, "session destroyed");
        Ok(())
    }

    async fn length(&self) -> Result<u64> {
        self.client.count().await
    }

    async fn clear(&self) -> Result<()> {
        self.client.flush_all().await?;
        debug!("all sessions cleared");
        Ok(())
    }
}
