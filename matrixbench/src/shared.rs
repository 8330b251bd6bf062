//! Workbench shared between callers

use std::sync::{Arc, Mutex, MutexGuard};
use crate::{BenchConfig, BenchError, Workbench};

/// A `Workbench` behind one lock
///
/// The lock guards the matrix mapping and the history together, so a
/// removal and its history entry are observed as one step.
#[derive(Clone)]
pub struct SharedWorkbench {
    inner: Arc<Mutex<Workbench>>,
}

impl SharedWorkbench {
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        Ok(Self::from(Workbench::new(config)?))
    }

    /// Run `f` with exclusive access to the workbench
    pub fn with<R>(&self, f: impl FnOnce(&mut Workbench) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Copy of the history at this instant
    pub fn history(&self) -> Vec<String> {
        self.lock().history().to_vec()
    }

    fn lock(&self) -> MutexGuard<'_, Workbench> {
        // Results are computed before anything is stored, so a poisoned
        // lock still holds a consistent workbench.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Workbench> for SharedWorkbench {
    fn from(workbench: Workbench) -> Self {
        Self { inner: Arc::new(Mutex::new(workbench)) }
    }
}
