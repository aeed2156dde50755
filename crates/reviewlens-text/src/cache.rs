//! In-memory normalization cache using moka.
//!
//! Keys are blake3 hashes of the raw input. Values are normalized text.

use std::time::Duration;

use moka::sync::Cache;

pub struct NormalizationCache {
    cache: Cache<String, String>,
}

impl NormalizationCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Content key for `raw`.
    pub fn key(raw: &str) -> String {
        blake3::hash(raw.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, normalized: String) {
        self.cache.insert(key, normalized);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
