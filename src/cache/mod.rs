//! Cache backends for raw API responses
//!
//! The service only needs two operations from a cache: look up a JSON value by
//! key, and store a JSON value under a key for a limited time. Any store that
//! provides them can be plugged in through the [`Cache`] trait. Two backends
//! ship with the crate: a process-local [`MemoryCache`] and a file-backed
//! [`CacheManager`] that persists entries to disk.

mod manager;
mod memory;

pub use manager::{CacheManager, CachedData};
pub use memory::MemoryCache;

use serde_json::Value;
use std::time::Duration;

/// Minimal key/value store used as a read-through cache
///
/// Implementations must be safe to share between callers (the service holds
/// them as `Arc<dyn Cache>`). Writes replace the whole value stored under a key.
pub trait Cache: Send + Sync {
    /// Returns the value stored under `key`, or `None` on a miss or expired entry
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key` for `timeout`
    fn set(&self, key: &str, value: &Value, timeout: Duration);
}
