//! Bounded-retry readers-writer lock guard
//!
//! Every store operation acquires the catalog lock through this wrapper:
//! a timed `try_read_for`/`try_write_for`, retried a fixed number of
//! times before surfacing a typed error. No acquisition blocks
//! indefinitely, so a stuck holder degrades callers to a retryable
//! conflict instead of deadlocking them.

use std::time::Duration;

use parking_lot::RwLock;
use tracing::{error, warn};

use crate::domain::{CatalogError, CatalogResult};

/// Lock acquisition policy.
#[derive(Debug, Clone)]
pub struct LockSettings {
    /// Maximum acquisition attempts before giving up.
    pub max_retries: u32,
    /// Wait per attempt.
    pub retry_delay: Duration,
}

impl Default for LockSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_millis(100),
        }
    }
}

/// A readers-writer lock with bounded, logged acquisition retries.
///
/// Exhausted retries map to `DataReadError` for shared access and
/// `DataSaveError` for exclusive access.
pub struct GuardedCatalog<T> {
    inner: RwLock<T>,
    settings: LockSettings,
}

impl<T> GuardedCatalog<T> {
    pub fn new(value: T, settings: LockSettings) -> Self {
        Self {
            inner: RwLock::new(value),
            settings,
        }
    }

    /// Run `op` under the shared lock.
    pub fn read<R>(&self, name: &'static str, op: impl FnOnce(&T) -> R) -> CatalogResult<R> {
        for attempt in 1..=self.settings.max_retries {
            if let Some(guard) = self.inner.try_read_for(self.settings.retry_delay) {
                return Ok(op(&guard));
            }
            warn!(operation = name, attempt, "retrying read lock acquisition");
        }
        error!(
            operation = name,
            retries = self.settings.max_retries,
            "failed to acquire read lock"
        );
        Err(CatalogError::DataReadError)
    }

    /// Run `op` under the exclusive lock.
    pub fn write<R>(&self, name: &'static str, op: impl FnOnce(&mut T) -> R) -> CatalogResult<R> {
        for attempt in 1..=self.settings.max_retries {
            if let Some(mut guard) = self.inner.try_write_for(self.settings.retry_delay) {
                return Ok(op(&mut guard));
            }
            warn!(operation = name, attempt, "retrying write lock acquisition");
        }
        error!(
            operation = name,
            retries = self.settings.max_retries,
            "failed to acquire write lock"
        );
        Err(CatalogError::DataSaveError)
    }
}
