//! Fixed-interval response cache.
//!
//! Catalog data changes far less often than pages are viewed, so successful
//! `data` payloads are kept for a fixed TTL keyed by operation and variables.
//! There is no in-flight de-duplication: two concurrent misses both hit the
//! API and the later insert wins.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

const MAX_ENTRIES: usize = 1024;

#[derive(Debug)]
struct CachedValue {
    stored_at: Instant,
    value: serde_json::Value,
}

/// Shared TTL cache of raw GraphQL `data` payloads.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, CachedValue>>>,
}

impl ResponseCache {
    /// A zero `ttl` disables caching entirely.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Builds the cache key for an operation call.
    #[must_use]
    pub fn key(operation: &str, variables: &serde_json::Value) -> String {
        format!("{operation}:{variables}")
    }

    /// Returns a fresh entry, evicting it if it has expired.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        if self.ttl.is_zero() {
            return None;
        }
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(cached) if cached.stored_at.elapsed() < self.ttl => Some(cached.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub async fn insert(&self, key: String, value: serde_json::Value) {
        if self.ttl.is_zero() {
            return;
        }
        let mut entries = self.entries.lock().await;
        if entries.len() >= MAX_ENTRIES && !entries.contains_key(&key) {
            let ttl = self.ttl;
            entries.retain(|_, cached| cached.stored_at.elapsed() < ttl);
            if entries.len() >= MAX_ENTRIES {
                tracing::debug!(max = MAX_ENTRIES, "response cache full; skipping insert");
                return;
            }
        }
        entries.insert(
            key,
            CachedValue {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
