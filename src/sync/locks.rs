//! Per-record operation serialization

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Mutex as AsyncMutex;

/// Registry of per-id async locks.
///
/// Mutations keyed by the same record id take the same lock and therefore
/// serialize; operations on distinct ids proceed concurrently. Locks are
/// created on first use and kept for the session.
#[derive(Default)]
pub(crate) struct IdLocks {
    locks: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
}

impl IdLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock for a record id
    pub(crate) fn for_id(&self, id: i64) -> Arc<AsyncMutex<()>> {
        self.locks
            .lock()
            .entry(id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_id_yields_the_same_lock() {
        let locks = IdLocks::new();
        let a = locks.for_id(3);
        let b = locks.for_id(3);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn distinct_ids_yield_distinct_locks() {
        let locks = IdLocks::new();
        let a = locks.for_id(1);
        let b = locks.for_id(2);
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
