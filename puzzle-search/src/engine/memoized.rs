//! Memoized maximisation over a search DAG.

use fxhash::FxHashSet;
use log::{debug, trace};

use super::SearchStats;
use crate::error::SearchError;
use crate::memo::{HashMapBackend, MemoBackend};
use crate::problem::SearchSpace;

/// Best continuation from a state, relative to that state.
///
/// `value` and `steps` are deltas: the value gained and the number of
/// transitions taken after the state, not totals since the start. This is
/// what lets one cached entry serve every path that reaches the same
/// canonical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation<S, V> {
    /// Value gained from the state onward
    pub value: V,
    /// Number of transitions in the best continuation
    pub steps: u32,
    /// First state of the best continuation (`None` = stop here)
    pub next: Option<S>,
}

impl<S, V: Default> Continuation<S, V> {
    fn stop() -> Self {
        Self {
            value: V::default(),
            steps: 0,
            next: None,
        }
    }
}

type DefaultBackend<P> = HashMapBackend<
    <P as SearchSpace>::Key,
    Continuation<<P as SearchSpace>::State, <P as SearchSpace>::Value>,
>;

/// One pending expansion on the work stack.
struct Frame<S, K, V> {
    key: K,
    children: std::vec::IntoIter<(S, V)>,
    pending: Option<(S, V)>,
    best: Continuation<S, V>,
}

impl<S: Clone, K, V: crate::Value> Frame<S, K, V> {
    fn absorb(&mut self, child: S, gain: V, tail: &Continuation<S, V>) {
        let candidate = gain + tail.value;
        if candidate > self.best.value {
            self.best = Continuation {
                value: candidate,
                steps: tail.steps + 1,
                next: Some(child),
            };
        }
    }
}

/// Computes `best(s) = max(0, max over successors (gain + best(s')))`.
///
/// The recursion runs on an explicit work stack, so its depth is bounded
/// by the heap rather than the thread stack. Results are cached per
/// canonical key in a [`MemoBackend`]; the backend is a pure cache and may be
/// cleared at any time (see [`MemoizedSearch::with_memo_limit`]) without
/// changing the result.
///
/// The successor relation must be acyclic on canonical keys. A key that is
/// reached again while it is still being expanded yields
/// [`SearchError::Cycle`].
pub struct MemoizedSearch<'p, P: SearchSpace, B = DefaultBackend<P>> {
    problem: &'p P,
    memo: B,
    memo_limit: Option<usize>,
    stats: SearchStats,
}

impl<'p, P: SearchSpace> MemoizedSearch<'p, P> {
    pub fn new(problem: &'p P) -> Self {
        Self::with_backend(problem, HashMapBackend::new())
    }
}

impl<'p, P, B> MemoizedSearch<'p, P, B>
where
    P: SearchSpace,
    B: MemoBackend<P::Key, Continuation<P::State, P::Value>>,
{
    pub fn with_backend(problem: &'p P, memo: B) -> Self {
        Self {
            problem,
            memo,
            memo_limit: None,
            stats: SearchStats::default(),
        }
    }

    /// Clears the memo table whenever it holds more than `limit` entries.
    pub fn with_memo_limit(mut self, limit: usize) -> Self {
        self.memo_limit = Some(limit);
        self
    }

    /// Counters from the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of entries currently cached.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Computes the best continuation from `initial`.
    ///
    /// The memo table is cleared first: a run never reuses entries computed
    /// for another problem instance or budget.
    pub fn run(
        &mut self,
        initial: P::State,
    ) -> Result<Continuation<P::State, P::Value>, SearchError> {
        self.memo.clear();
        self.stats = SearchStats::default();

        let problem = self.problem;
        let memo = &mut self.memo;
        let stats = &mut self.stats;
        let limit = self.memo_limit;

        let root_key = problem.canonical_key(&initial);
        let mut in_progress = FxHashSet::default();
        in_progress.insert(root_key.clone());
        let mut stack = vec![open(problem, stats, root_key, &initial)];
        let mut returned: Option<Continuation<P::State, P::Value>> = None;

        loop {
            let top = stack
                .last_mut()
                .ok_or_else(|| SearchError::Invariant("work stack emptied early".into()))?;

            if let Some(tail) = returned.take() {
                let (child, gain) = top.pending.take().ok_or_else(|| {
                    SearchError::Invariant("result returned to a frame with no pending child".into())
                })?;
                top.absorb(child, gain, &tail);
            }

            let Some((child, gain)) = top.children.next() else {
                let Some(done) = stack.pop() else {
                    return Err(SearchError::Invariant("work stack emptied early".into()));
                };
                in_progress.remove(&done.key);
                memo.insert(done.key, done.best.clone());
                if let Some(limit) = limit
                    && memo.len() > limit
                {
                    trace!("memo table above {limit} entries, clearing");
                    memo.clear();
                }
                if stack.is_empty() {
                    debug!("memoized search done: {stats}");
                    return Ok(done.best);
                }
                returned = Some(done.best);
                continue;
            };

            let key = problem.canonical_key(&child);
            if let Some(tail) = memo.get(&key) {
                stats.memo_hits += 1;
                top.absorb(child, gain, tail);
                continue;
            }
            if !in_progress.insert(key.clone()) {
                return Err(SearchError::Cycle { depth: stack.len() });
            }
            let frame = open(problem, stats, key, &child);
            top.pending = Some((child, gain));
            stack.push(frame);
            stats.observe_frontier(stack.len());
        }
    }

    /// Follows the cached best moves from `initial`.
    ///
    /// Returns `None` if an entry along the way is no longer cached (memo
    /// limit, no-cache backend). States after the first are the canonical
    /// representatives that were cached, which may differ from `initial`'s
    /// own descendants in fields the key ignores.
    pub fn principal_path(&self, initial: &P::State) -> Option<Vec<P::State>> {
        let first = self.memo.get(&self.problem.canonical_key(initial))?;
        let mut path = vec![initial.clone()];
        let mut next = first.next.clone();
        for _ in 0..first.steps {
            let state = next?;
            next = self
                .memo
                .get(&self.problem.canonical_key(&state))?
                .next
                .clone();
            path.push(state);
        }
        Some(path)
    }
}

fn open<P: SearchSpace>(
    problem: &P,
    stats: &mut SearchStats,
    key: P::Key,
    state: &P::State,
) -> Frame<P::State, P::Key, P::Value> {
    let children = if problem.is_terminal(state) {
        Vec::new()
    } else {
        stats.expanded += 1;
        problem.successors(state)
    };
    Frame {
        key,
        children: children.into_iter(),
        pending: None,
        best: Continuation::stop(),
    }
}
