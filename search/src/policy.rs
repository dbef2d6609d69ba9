//! Search policy: budgets and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SearchError;

/// Defensive budgets for a search run.
///
/// The default policy is fully unbounded, matching the baseline algorithm:
/// the only ways a run ends are goal acceptance and frontier exhaustion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on created nodes (root included). `None` means unbounded.
    pub max_nodes: Option<u64>,
    /// Depth cutoff: successors whose depth would exceed this are never
    /// created (nor visited nor tested). `None` means unbounded.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    /// Validate the budgets before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidBudget`] if `max_nodes` is zero: the
    /// root node is always created, so no run fits that budget.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_nodes == Some(0) {
            return Err(SearchError::InvalidBudget {
                detail: "max_nodes must admit at least the root node".into(),
            });
        }
        Ok(())
    }
}

/// Cloneable cancellation flag, checked once per dequeued node.
///
/// All clones share the flag, so one clone can be handed to another thread or
/// a signal handler while the search holds its own.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next dequeue.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
