//! Process-local configuration cache.
//!
//! The facade only ever calls [`ConfigCache::get`] and [`ConfigCache::set`].
//! The extension that owns the cache uses the inherent methods to drop stale
//! entries, typically when the editor reports a settings change.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::debug;

use crate::application::config::ConfigCache;
use crate::domain::setting_key::Section;

/// A [`ConfigCache`] backed by a `Mutex<HashMap<..>>`.
#[derive(Debug, Default)]
pub struct InMemoryConfigCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut entries = self.lock();
        debug!("clearing {} config cache entries", entries.len());
        entries.clear();
    }

    /// Removes every entry stored under `section`.
    pub fn invalidate_section(&self, section: Section) {
        let prefix = format!("{}.", section.as_str());
        let mut entries = self.lock();
        entries.retain(|key, _| !key.starts_with(&prefix));
        debug!("invalidated config cache section {section}");
    }

    /// Removes one entry.  Returns the value that was cached, if any.
    pub fn invalidate(&self, key: &str) -> Option<Value> {
        self.lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Poisoning is ignored: every mutation is a single map operation.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConfigCache for InMemoryConfigCache {
    fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.lock().insert(key.to_string(), value);
    }
}
