//! In-memory cache backend

use super::Cache;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Process-local cache with per-entry expiry
///
/// Expired entries are dropped lazily on the next lookup of their key. An
/// entry whose expiry lies beyond what `Instant` can represent never expires.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (Value, Option<Instant>)>>,
}

impl MemoryCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some((value, expires_at)) if expires_at.map_or(true, |at| Instant::now() < at) => {
                Some(value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&self, key: &str, value: &Value, timeout: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            let expires_at = Instant::now().checked_add(timeout);
            entries.insert(key.to_string(), (value.clone(), expires_at));
        }
    }
}
