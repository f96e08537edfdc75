//! Search drivers.
//!
//! Three engines share the [`SearchSpace`](crate::SearchSpace) adapter surface:
//!
//! - [`ShortestPath`]: breadth-first search with a visited set; the first
//!   terminal state dequeued is optimal because every transition costs the same.
//! - [`BranchAndBound`]: depth-first maximisation with admissible-bound pruning
//!   and per-key dominance.
//! - [`MemoizedSearch`]: maximisation of the best continuation from every
//!   canonical state, cached as relative deltas and driven by an explicit
//!   work stack.
//!
//! Every engine owns its frontier, visited/memo tables and incumbent; nothing
//! is shared between two `run` invocations of different engines.

mod bnb;
mod memoized;
mod shortest;

pub use bnb::BranchAndBound;
pub use memoized::{Continuation, MemoizedSearch};
pub use shortest::ShortestPath;

use std::fmt;

/// A state reached by a search together with its accumulated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<S, V> {
    pub state: S,
    pub value: V,
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated
    pub expanded: u64,
    /// States answered from the memo table
    pub memo_hits: u64,
    /// States skipped because an equivalent state was already handled
    pub duplicates: u64,
    /// States discarded by the bound
    pub pruned: u64,
    /// Largest number of pending states at once
    pub peak_frontier: usize,
}

impl SearchStats {
    fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expanded, {} memo hits, {} duplicates, {} pruned, peak frontier {}",
            self.expanded, self.memo_hits, self.duplicates, self.pruned, self.peak_frontier
        )
    }
}
