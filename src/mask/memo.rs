use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hit/miss counters of a [`MemoCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Get-or-compute cache for pure `&str -> String` transforms.
///
/// Entries are never evicted on their own; the key space is one path string per tour zone.
#[derive(Debug, Default)]
pub struct MemoCache {
    name: &'static str,
    map: Mutex<HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoCache {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Return the cached value for `key`, computing and storing it on first use.
    ///
    /// `compute` runs outside the lock, so it must be pure: two racing callers may both compute.
    pub fn get_or_compute(&self, key: &str, compute: impl FnOnce(&str) -> String) -> String {
        if let Some(v) = self.lock().get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return v.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(cache = self.name, key_len = key.len(), "memo miss");
        let value = compute(key);
        self.lock()
            .entry(key.to_string())
            .or_insert_with(|| value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all entries and reset counters.
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Entries are inserted whole, so a poisoned lock still holds a consistent map.
        self.map.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/memo.rs"]
mod tests;
