//! Error types for the search engines

use thiserror::Error;

/// Errors raised while running a search.
///
/// Running out of states is not an error: engines report it as `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A state was reached again while its own value was still being computed
    #[error("State re-entered at depth {depth} while still being expanded")]
    Cycle { depth: usize },
    /// The search space broke one of the engine's assumptions
    #[error("Invariant violated: {0}")]
    Invariant(String),
}
