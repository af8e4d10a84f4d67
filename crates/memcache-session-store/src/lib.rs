//! Session persistence adapter backed by an external key-value cache.
//!
//! This crate implements a pluggable session store for HTTP session
//! middleware on top of any cache exposing get/set-with-ttl/delete:
//! - Deterministic key derivation (`prefix + sid`)
//! - JSON wire encoding of session records
//! - TTL computed from the record's `cookie.maxAge` (default one day)
//! - A strict absent / cache-error / serialization-error outcome split
//!
//! The cache transport is an external collaborator behind the
//! [`CacheClient`] trait; this crate never opens connections itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use memcache_session_store::{
//!     MemoryCacheClient, SessionCacheStore, SessionRecord, SessionStore, StoreConfig,
//! };
//!
//! let config = StoreConfig::new().with_prefix("sess:");
//! let store = SessionCacheStore::with_client(config, Arc::new(MemoryCacheClient::new()));
//!
//! store.set("abc123", &SessionRecord::new().with_value("user", "alice")).await?;
//! let record = store.get("abc123").await?;
//! ```

mod client;
mod config;
mod error;
mod key;
mod record;
mod store;
mod ttl;

pub use client::{CacheClient, ConnectCacheClient, MemoryCacheClient};
pub use config::{DEFAULT_PORT, StoreConfig};
pub use error::{Error, Result};
pub use key::derive_key;
pub use record::{SessionCookie, SessionRecord};
pub use store::{SessionCacheStore, SessionStore};
pub use ttl::{ONE_DAY_SECS, session_ttl};
