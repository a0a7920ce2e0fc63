// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Named statistics counters.
//!
//! A single [`StatCounters`] instance is owned by the server process and
//! shared behind `Arc`; its lifecycle is tied to process uptime. The API
//! layer uses it to count handled requests per endpoint.

use ahash::AHashMap;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Thread-safe container of named `i64` counters.
///
/// Keys that were never touched read as `0`.
#[derive(Debug, Default)]
pub struct StatCounters {
    counters: RwLock<AHashMap<String, i64>>,
}

impl StatCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to the counter under `key`.
    pub fn increment(&self, key: &str) {
        let mut counters = self.counters.write();
        *counters.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Subtract one from the counter under `key`.
    pub fn decrement(&self, key: &str) {
        let mut counters = self.counters.write();
        *counters.entry(key.to_string()).or_insert(0) -= 1;
    }

    /// Current value under `key`.
    pub fn get(&self, key: &str) -> i64 {
        self.counters.read().get(key).copied().unwrap_or(0)
    }

    /// Drop all counters.
    pub fn clear(&self) {
        self.counters.write().clear();
    }

    /// Stable-ordered view of all counters, for serialization.
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.counters
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn untouched_keys_read_as_zero() {
        let counters = StatCounters::new();
        assert_eq!(counters.get("requests.unknown"), 0);
    }

    #[test]
    fn increment_adds_and_decrement_subtracts() {
        let counters = StatCounters::new();
        counters.increment("hits");
        counters.increment("hits");
        counters.decrement("hits");
        assert_eq!(counters.get("hits"), 1);

        counters.decrement("misses");
        assert_eq!(counters.get("misses"), -1);
    }

    #[test]
    fn clear_resets_all_counters() {
        let counters = StatCounters::new();
        counters.increment("a");
        counters.increment("b");
        counters.clear();
        assert_eq!(counters.get("a"), 0);
        assert_eq!(counters.get("b"), 0);
        assert!(counters.snapshot().is_empty());
    }

    #[test]
    fn snapshot_is_stable_ordered() {
        let counters = StatCounters::new();
        counters.increment("zeta");
        counters.increment("alpha");
        counters.increment("alpha");

        let snapshot = counters.snapshot();
        let keys: Vec<&str> = snapshot.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
        assert_eq!(snapshot["alpha"], 2);
        assert_eq!(snapshot["zeta"], 1);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let counters = Arc::new(StatCounters::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let counters = Arc::clone(&counters);
            handles.push(std::thread::spawn(move || {
                for _ in 0..250 {
                    counters.increment("shared");
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.get("shared"), 1000);
    }
}
