//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. A search that runs and
//! finds no goal is not an error: it is a `SearchResult` with an absent path
//! and a termination reason in the trace.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any node is created. No trace is produced
/// because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A budget value that can never admit a run was configured.
    InvalidBudget { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBudget { detail } => {
                write!(f, "invalid search budget: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
