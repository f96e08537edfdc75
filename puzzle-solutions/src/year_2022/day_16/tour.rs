//! Valve-opening tours as search spaces
//!
//! Time only moves between openings: one transition walks to a closed reward
//! valve and opens it, which takes the distance plus one minute. The valve is
//! credited with everything it releases until the budget runs out.

use puzzle_search::{BoundedSpace, SearchSpace};

use super::distances::DistanceTable;

/// Where an agent stands and when it gets there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Agent {
    pub node: usize,
    pub elapsed: u32,
}

impl Agent {
    pub const fn at_start() -> Self {
        Self {
            node: 0,
            elapsed: 0,
        }
    }
}

/// Every valve `agent` can still open in time: the agent after opening it,
/// the bit it clears and the pressure it releases.
fn openings<'t>(
    table: &'t DistanceTable,
    budget: u32,
    agent: Agent,
    closed: u64,
) -> impl Iterator<Item = (Agent, u64, u64)> + 't {
    (0..table.reward_count())
        .filter(move |&bit| closed & (1 << bit) != 0)
        .filter_map(move |bit| {
            let node = bit + 1;
            let elapsed = agent.elapsed + table.distance(agent.node, node)? + 1;
            (elapsed < budget).then(|| {
                let released = u64::from(budget - elapsed) * u64::from(table.flow(node));
                (Agent { node, elapsed }, 1 << bit, released)
            })
        })
}

/// One agent opening valves within `budget` minutes
pub struct SoloTour<'t> {
    table: &'t DistanceTable,
    budget: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoloState {
    pub agent: Agent,
    pub closed: u64,
}

impl<'t> SoloTour<'t> {
    pub fn new(table: &'t DistanceTable, budget: u32) -> Self {
        Self { table, budget }
    }

    pub fn start(&self) -> SoloState {
        SoloState {
            agent: Agent::at_start(),
            closed: self.table.all_closed(),
        }
    }

    /// Same tour restricted to the valves in `closed`
    pub fn start_with(&self, closed: u64) -> SoloState {
        SoloState {
            agent: Agent::at_start(),
            closed: closed & self.table.all_closed(),
        }
    }
}

impl SearchSpace for SoloTour<'_> {
    type State = SoloState;
    type Key = SoloState;
    type Value = u64;

    fn canonical_key(&self, state: &SoloState) -> SoloState {
        *state
    }

    fn successors(&self, state: &SoloState) -> Vec<(SoloState, u64)> {
        openings(self.table, self.budget, state.agent, state.closed)
            .map(|(agent, bit, released)| {
                let next = SoloState {
                    agent,
                    closed: state.closed & !bit,
                };
                (next, released)
            })
            .collect()
    }

    fn is_terminal(&self, state: &SoloState) -> bool {
        state.closed == 0 || state.agent.elapsed >= self.budget
    }
}

impl BoundedSpace for SoloTour<'_> {
    /// Every closed valve opened as if it were the very next one
    fn upper_bound(&self, state: &SoloState) -> u64 {
        openings(self.table, self.budget, state.agent, state.closed)
            .map(|(_, _, released)| released)
            .sum()
    }
}

/// Two agents sharing one set of valves within `budget` minutes
///
/// Each agent keeps its own clock. A transition advances whichever agent is
/// behind: it either opens another valve or retires for good, which hands
/// every remaining valve to the other agent.
pub struct DuoTour<'t> {
    table: &'t DistanceTable,
    budget: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuoState {
    pub agents: [Agent; 2],
    pub closed: u64,
}

impl DuoState {
    /// Index of the agent that moves next
    fn behind(&self) -> usize {
        usize::from(self.agents[1].elapsed < self.agents[0].elapsed)
    }
}

impl<'t> DuoTour<'t> {
    pub fn new(table: &'t DistanceTable, budget: u32) -> Self {
        Self { table, budget }
    }

    pub fn start(&self) -> DuoState {
        DuoState {
            agents: [Agent::at_start(); 2],
            closed: self.table.all_closed(),
        }
    }
}

impl SearchSpace for DuoTour<'_> {
    type State = DuoState;
    type Key = DuoState;
    type Value = u64;

    /// The agents are interchangeable, so their order is normalised.
    fn canonical_key(&self, state: &DuoState) -> DuoState {
        let mut key = *state;
        key.agents.sort_unstable();
        key
    }

    fn successors(&self, state: &DuoState) -> Vec<(DuoState, u64)> {
        let mover = state.behind();
        let mut next: Vec<(DuoState, u64)> =
            openings(self.table, self.budget, state.agents[mover], state.closed)
                .map(|(agent, bit, released)| {
                    let mut moved = *state;
                    moved.agents[mover] = agent;
                    moved.closed &= !bit;
                    (moved, released)
                })
                .collect();

        let mut retired = *state;
        retired.agents[mover].elapsed = self.budget;
        next.push((retired, 0));
        next
    }

    fn is_terminal(&self, state: &DuoState) -> bool {
        state.closed == 0 || state.agents.iter().all(|agent| agent.elapsed >= self.budget)
    }
}
