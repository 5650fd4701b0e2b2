//! Per-domain async locks

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// In-process per-domain mutual exclusion.
///
/// Same-domain callers queue up; different domains proceed in parallel.
/// Does not protect against other processes.
#[derive(Clone, Default)]
pub struct DomainLocks {
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl DomainLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the lock of `domain`. Released when the guard is dropped.
    pub async fn lock(&self, domain: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Entries nobody holds or waits on
            locks.retain(|key, lock| key == domain || Arc::strong_count(lock) > 1);
            locks
                .entry(domain.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of domains currently tracked.
    pub async fn len(&self) -> usize {
        self.locks.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.locks.lock().await.is_empty()
    }
}
