//! File-backed cache for raw API responses
//!
//! Provides a `CacheManager` that stores JSON values in one file per key with
//! expiry timestamps. Expired or unreadable entries read as a miss.

use super::Cache;
use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
    /// When the cache entry expires; `None` for a TTL past the representable range
    expires_at: Option<DateTime<Utc>>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Manages reading and writing cached responses on disk
///
/// Files live in an XDG-compliant cache directory (`~/.cache/tripadvisor/` on
/// Linux) unless a directory is given explicitly.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "tripadvisor")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Directory holding the cache files
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Writes data to the cache, fresh for `ttl`
    ///
    /// Creates the cache directory on first use.
    pub fn write<T: Serialize>(
        &self,
        key: &str,
        data: &T,
        ttl: std::time::Duration,
    ) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;

        let now = Utc::now();
        let expires_at = Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl));
        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at,
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads data from the cache
    ///
    /// Returns `None` if the entry doesn't exist or cannot be parsed. Expired
    /// entries are returned with `is_expired = true`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let content = fs::read_to_string(self.cache_path(key)).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        Some(CachedData {
            data: entry.data,
            cached_at: entry.cached_at,
            is_expired: entry.expires_at.is_some_and(|at| Utc::now() >= at),
        })
    }
}

impl Cache for CacheManager {
    fn get(&self, key: &str) -> Option<Value> {
        self.read::<Value>(key)
            .filter(|cached| !cached.is_expired)
            .map(|cached| cached.data)
    }

    fn set(&self, key: &str, value: &Value, timeout: std::time::Duration) {
        if let Err(e) = self.write(key, value, timeout) {
            tracing::warn!(key, error = %e, "failed to write cache entry");
        }
    }
}
