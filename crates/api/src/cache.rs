//! Process-wide TTL cache for upstream documents.
//!
//! Staleness is decided per read: the caller passes the TTL to [`TtlCache::get`].
//! Stale entries are never removed by reads; the next [`TtlCache::put`] under
//! the same key replaces them. Nothing sweeps in the background, so memory
//! grows with the number of distinct keys ever stored.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// Key prefix of the team list document.
pub const INIT_KEY: &str = "init";

/// Key prefix of the roster snapshot document.
pub const ROSTER_KEY: &str = "roster";

/// Cache key for a league-scoped resource: `{kind}:{league_id}:{year}`.
pub fn cache_key(kind: &str, league_id: i64, year: i32) -> String {
    format!("{kind}:{league_id}:{year}")
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    stored_at: Instant,
    value: V,
}

/// Concurrency-safe key/value store with read-time expiry.
///
/// Two callers that miss on the same key concurrently will both fetch and
/// both `put`; the last write wins.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key` if it was stored less than `ttl` ago.
    pub async fn get(&self, key: &str, ttl: Duration) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store `value` under `key` stamped with the current time.
    pub async fn put(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            stored_at: Instant::now(),
            value,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry stored `ttl` or longer ago. Returns how many went.
    ///
    /// The server never calls this on its own.
    pub async fn purge_older_than(&self, ttl: Duration) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        before - entries.len()
    }
}
