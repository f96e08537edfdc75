//! Depth-first branch and bound.

use std::collections::hash_map::Entry;

use fxhash::FxHashMap;
use log::debug;

use super::{Found, SearchStats};
use crate::frontier::{Frontier, StackFrontier};
use crate::problem::BoundedSpace;

/// Maximises the accumulated value over a [`BoundedSpace`].
///
/// Nodes are taken from an explicit stack. A node is dropped without
/// expansion when
///
/// - its accumulated value plus [`BoundedSpace::upper_bound`] cannot beat the
///   incumbent (pruning), or
/// - its canonical key was already reached with an equal or higher
///   accumulated value (dominance).
///
/// Both rules can be switched off; the optimum must not change, only the
/// number of expanded states.
pub struct BranchAndBound<'p, P: BoundedSpace> {
    problem: &'p P,
    prune: bool,
    dedup: bool,
    seen: FxHashMap<P::Key, P::Value>,
    stats: SearchStats,
}

impl<'p, P: BoundedSpace> BranchAndBound<'p, P> {
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            prune: true,
            dedup: true,
            seen: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Disables bound-based pruning.
    pub fn without_pruning(mut self) -> Self {
        self.prune = false;
        self
    }

    /// Disables the per-key dominance table.
    pub fn without_dedup(mut self) -> Self {
        self.dedup = false;
        self
    }

    /// Counters from the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Explores everything reachable from `initial` and returns the best
    /// accepted state.
    ///
    /// Returns `None` when no reachable state is accepted.
    pub fn run(&mut self, initial: P::State) -> Option<Found<P::State, P::Value>> {
        self.seen.clear();
        self.stats = SearchStats::default();

        let mut best: Option<Found<P::State, P::Value>> = None;
        let mut frontier = StackFrontier::new();
        frontier.push((initial, P::Value::default()));

        while let Some((state, value)) = frontier.pop() {
            if self.dedup && !self.record(&state, value) {
                self.stats.duplicates += 1;
                continue;
            }

            if self.problem.accepts(&state) && best.as_ref().is_none_or(|b| value > b.value) {
                best = Some(Found {
                    state: state.clone(),
                    value,
                });
            }
            if self.problem.is_terminal(&state) {
                continue;
            }
            if self.prune
                && let Some(incumbent) = &best
                && value + self.problem.upper_bound(&state) <= incumbent.value
            {
                self.stats.pruned += 1;
                continue;
            }

            self.stats.expanded += 1;
            for (next, gain) in self.problem.successors(&state) {
                frontier.push((next, value + gain));
            }
            self.stats.observe_frontier(frontier.len());
        }

        debug!("branch and bound done: {}", self.stats);
        best
    }

    /// Records `value` for the state's key; false if it is dominated.
    fn record(&mut self, state: &P::State, value: P::Value) -> bool {
        match self.seen.entry(self.problem.canonical_key(state)) {
            Entry::Occupied(entry) if *entry.get() >= value => false,
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }
}
