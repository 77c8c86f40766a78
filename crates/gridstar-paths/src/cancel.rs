//! Cooperative cancellation for running searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cancellation flag shared between a running search and whoever may want
/// to stop it. Clones observe the same flag.
///
/// The search polls the flag once per loop iteration, before extracting the
/// next cell.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the token can be reused for the next run.
    #[inline]
    pub fn reset(&self) {
        self.done.store(false, Ordering::Relaxed);
    }
}
