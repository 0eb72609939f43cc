//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase, reset only on process start
//! - Lock-free: Relaxed atomics

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Request and store-write counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: AtomicU64,
    foods_created: AtomicU64,
    foods_updated: AtomicU64,
    foods_deleted: AtomicU64,
    write_conflicts: AtomicU64,
    not_found: AtomicU64,
    store_faults: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.foods_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.foods_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.foods_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_conflicts(&self) {
        self.write_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_faults(&self) {
        self.store_faults.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            foods_created: self.foods_created.load(Ordering::Relaxed),
            foods_updated: self.foods_updated.load(Ordering::Relaxed),
            foods_deleted: self.foods_deleted.load(Ordering::Relaxed),
            write_conflicts: self.write_conflicts.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            store_faults: self.store_faults.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub foods_created: u64,
    pub foods_updated: u64,
    pub foods_deleted: u64,
    pub write_conflicts: u64,
    pub not_found: u64,
    pub store_faults: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_zeroed() {
        assert_eq!(MetricsRegistry::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_increments() {
        let registry = MetricsRegistry::new();
        registry.increment_requests();
        registry.increment_requests();
        registry.increment_created();
        registry.increment_conflicts();
        registry.increment_store_faults();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.requests, 2);
        assert_eq!(snapshot.foods_created, 1);
        assert_eq!(snapshot.write_conflicts, 1);
        assert_eq!(snapshot.store_faults, 1);
        assert_eq!(snapshot.foods_deleted, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(MetricsRegistry::new().snapshot()).unwrap();
        assert_eq!(json["write_conflicts"], 0);
    }
}
