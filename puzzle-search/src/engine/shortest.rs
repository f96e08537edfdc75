//! Unit-cost shortest path.

use fxhash::FxHashSet;
use log::debug;

use super::{Found, SearchStats};
use crate::frontier::{FifoFrontier, Frontier};
use crate::problem::SearchSpace;

/// Breadth-first shortest path over a [`SearchSpace`].
///
/// States are expanded in FIFO order and a canonical key is expanded at most
/// once. The first terminal state removed from the frontier is returned: when
/// every transition has the same cost this is the cheapest one.
///
/// # Warning
///
/// With transitions of differing cost the result is merely *a* terminal state
/// with the fewest transitions, not the cheapest one.
pub struct ShortestPath<'p, P: SearchSpace> {
    problem: &'p P,
    visited: FxHashSet<P::Key>,
    stats: SearchStats,
}

impl<'p, P: SearchSpace> ShortestPath<'p, P> {
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            visited: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    /// Counters from the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches from `initial` to the nearest terminal state.
    ///
    /// Returns `None` when the frontier runs dry without reaching one.
    pub fn run(&mut self, initial: P::State) -> Option<Found<P::State, P::Value>> {
        self.visited.clear();
        self.stats = SearchStats::default();

        let mut frontier = FifoFrontier::new();
        frontier.push((initial, P::Value::default()));

        while let Some((state, value)) = frontier.pop() {
            if self.problem.is_terminal(&state) {
                debug!("shortest path found: {}", self.stats);
                return Some(Found { state, value });
            }
            if !self.visited.insert(self.problem.canonical_key(&state)) {
                self.stats.duplicates += 1;
                continue;
            }
            self.stats.expanded += 1;
            for (next, step) in self.problem.successors(&state) {
                frontier.push((next, value + step));
            }
            self.stats.observe_frontier(frontier.len());
        }

        debug!("shortest path exhausted: {}", self.stats);
        None
    }
}
