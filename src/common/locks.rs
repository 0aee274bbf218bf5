use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockTable = HashMap<u64, Arc<AsyncMutex<()>>>;

/// One async mutex per job id. Entries only live while someone holds or
/// waits on them.
#[derive(Clone, Default)]
pub struct JobLocks {
    inner: Arc<Mutex<LockTable>>,
}

/// Exclusive access to one job. Releasing the last guard for a job removes
/// its entry from the table.
pub struct JobGuard {
    job_id: u64,
    guard: Option<OwnedMutexGuard<()>>,
    locks: JobLocks,
}

impl JobLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, job_id: u64) -> JobGuard {
        let slot = self.table().entry(job_id).or_default().clone();
        let guard = slot.lock_owned().await;

        JobGuard {
            job_id,
            guard: Some(guard),
            locks: self.clone(),
        }
    }

    /// Number of jobs currently locked or waited on.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> MutexGuard<'_, LockTable> {
        // A poisoned table still holds valid entries.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for JobGuard {
    fn drop(&mut self) {
        // Release the job first so our own reference no longer counts.
        self.guard.take();

        let mut table = self.locks.table();
        let idle = table
            .get(&self.job_id)
            .is_some_and(|slot| Arc::strong_count(slot) == 1);
        if idle {
            table.remove(&self.job_id);
        }
    }
}
