//! Bounded state-space search
//!
//! A small engine for the searches puzzle solvers keep rewriting: shortest
//! path through a changing world, branch and bound over build orders, and
//! memoized maximisation over goal sets.
//!
//! # Overview
//!
//! A puzzle plugs in by implementing [`SearchSpace`] (and [`BoundedSpace`]
//! for branch and bound):
//! - `successors` lists the states reachable in one transition together with
//!   the value each transition adds
//! - `is_terminal` stops expansion (goal reached, time exhausted)
//! - `canonical_key` compresses a state to what matters for its future
//! - `upper_bound` is an optimistic estimate of the value still reachable
//!
//! The engines own every piece of mutable search state (frontier, visited set,
//! memo table, incumbent), so two searches never share caches.
//!
//! # Example: memoized maximisation
//!
//! ```rust
//! use puzzle_search::{MemoizedSearch, SearchSpace};
//!
//! /// Spend `budget` coins on items of (cost, reward); each item at most once.
//! struct Shop {
//!     items: Vec<(u32, u64)>,
//! }
//!
//! impl SearchSpace for Shop {
//!     // (next item to consider, coins left)
//!     type State = (usize, u32);
//!     type Key = (usize, u32);
//!     type Value = u64;
//!
//!     fn canonical_key(&self, state: &(usize, u32)) -> (usize, u32) {
//!         *state
//!     }
//!
//!     fn successors(&self, &(index, coins): &(usize, u32)) -> Vec<((usize, u32), u64)> {
//!         let (cost, reward) = self.items[index];
//!         let mut next = vec![((index + 1, coins), 0)];
//!         if cost <= coins {
//!             next.push(((index + 1, coins - cost), reward));
//!         }
//!         next
//!     }
//!
//!     fn is_terminal(&self, state: &(usize, u32)) -> bool {
//!         state.0 == self.items.len()
//!     }
//! }
//!
//! let shop = Shop { items: vec![(3, 4), (4, 5), (2, 3)] };
//! let best = MemoizedSearch::new(&shop).run((0, 7)).unwrap();
//! assert_eq!(best.value, 9);
//! ```
//!
//! # Choosing an engine
//!
//! | engine             | frontier | answers                            |
//! |--------------------|----------|------------------------------------|
//! | [`ShortestPath`]   | FIFO     | fewest unit-cost transitions       |
//! | [`BranchAndBound`] | stack    | maximum accumulated value, pruned  |
//! | [`MemoizedSearch`] | stack    | maximum accumulated value, cached  |

mod engine;
mod error;
mod frontier;
mod memo;
mod problem;

pub use engine::{BranchAndBound, Continuation, Found, MemoizedSearch, SearchStats, ShortestPath};
pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, StackFrontier};
pub use memo::{HashMapBackend, MemoBackend, NoCacheBackend};
pub use problem::{BoundedSpace, SearchSpace, Value};
