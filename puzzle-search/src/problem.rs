//! Trait-based search space definition.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Numeric value accumulated along a search path (ticks, geodes, released pressure).
///
/// Blanket-implemented for every type with the required arithmetic, so `u32`,
/// `u64`, `i64` and friends can be used directly.
pub trait Value: Copy + Ord + Default + Add<Output = Self> + Debug {}

impl<T> Value for T where T: Copy + Ord + Default + Add<Output = T> + Debug {}

/// A search space: how states expand and how they are canonicalized.
///
/// Implementations hold the static problem data (grid, recipes, distance
/// table) and must generate successors deterministically from a state alone.
///
/// # Type Parameters
///
/// - `State`: a self-contained snapshot of search progress
/// - `Key`: the canonical form of a state used by visited sets and memo tables
/// - `Value`: the value accumulated along a path
///
/// # Example
///
/// ```rust
/// use puzzle_search::{SearchSpace, ShortestPath};
///
/// /// Walk from 0 to 7 on a line, one step at a time.
/// struct Line;
///
/// impl SearchSpace for Line {
///     type State = i32;
///     type Key = i32;
///     type Value = u32;
///
///     fn canonical_key(&self, state: &i32) -> i32 {
///         *state
///     }
///
///     fn successors(&self, state: &i32) -> Vec<(i32, u32)> {
///         vec![(state - 1, 1), (state + 1, 1)]
///     }
///
///     fn is_terminal(&self, state: &i32) -> bool {
///         *state == 7
///     }
/// }
///
/// let found = ShortestPath::new(&Line).run(0).unwrap();
/// assert_eq!(found.value, 7);
/// ```
pub trait SearchSpace {
    /// Snapshot of search progress.
    type State: Clone;
    /// Canonical, hashable form of a state.
    type Key: Hash + Eq + Clone;
    /// Value accumulated along a path.
    type Value: Value;

    /// Reduces a state to its canonical key.
    ///
    /// Two states with equal keys must have identical sets of reachable
    /// continuations (relative to their own position in time).
    fn canonical_key(&self, state: &Self::State) -> Self::Key;

    /// Returns the successors of a state with the incremental value of each transition.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Value)>;

    /// Returns `true` when the state must not be expanded any further.
    fn is_terminal(&self, state: &Self::State) -> bool;
}

/// A search space that can be explored with branch and bound.
pub trait BoundedSpace: SearchSpace {
    /// Optimistic estimate of the additional value reachable from `state`.
    ///
    /// Must never underestimate: pruning discards every state whose
    /// accumulated value plus this bound cannot beat the incumbent.
    fn upper_bound(&self, state: &Self::State) -> Self::Value;

    /// Whether stopping at `state` is a valid solution.
    fn accepts(&self, _state: &Self::State) -> bool {
        true
    }
}
