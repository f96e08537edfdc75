//! Tunnel network and the all-pairs distances between valves worth visiting

use std::collections::VecDeque;

use puzzle_solver::ParseError;

/// Largest number of valves with a positive flow rate a `u64` bitmask can track
pub const MAX_REWARD_VALVES: usize = 63;

/// Valves as parsed, with tunnels resolved to indices
#[derive(Debug, Clone)]
pub struct Network {
    names: Vec<String>,
    flows: Vec<u32>,
    tunnels: Vec<Vec<usize>>,
    start: usize,
}

impl Network {
    pub fn new(names: Vec<String>, flows: Vec<u32>, tunnels: Vec<Vec<usize>>, start: usize) -> Self {
        Self {
            names,
            flows,
            tunnels,
            start,
        }
    }

    /// Tunnel steps from `origin` to every valve, `None` where unreachable
    fn bfs(&self, origin: usize) -> Vec<Option<u32>> {
        let mut steps = vec![None; self.names.len()];
        steps[origin] = Some(0);
        let mut queue = VecDeque::from([(origin, 0u32)]);
        while let Some((valve, depth)) = queue.pop_front() {
            for &next in &self.tunnels[valve] {
                if steps[next].is_none() {
                    steps[next] = Some(depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }
        steps
    }
}

/// Distances between the start valve (node 0) and every valve with a
/// positive flow rate (nodes `1..`). Reward valve `i` is node `i + 1`, which
/// is also bit `i` of a closed-valve mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    names: Vec<String>,
    flows: Vec<u32>,
    steps: Vec<Vec<Option<u32>>>,
}

impl DistanceTable {
    pub fn build(network: &Network) -> Result<Self, ParseError> {
        let nodes: Vec<usize> = std::iter::once(network.start)
            .chain((0..network.names.len()).filter(|&valve| network.flows[valve] > 0))
            .collect();
        let rewards = nodes.len() - 1;
        if rewards > MAX_REWARD_VALVES {
            return Err(ParseError::Unsupported(format!(
                "{rewards} valves with flow, at most {MAX_REWARD_VALVES} supported"
            )));
        }

        let steps = nodes
            .iter()
            .map(|&from| {
                let reach = network.bfs(from);
                nodes.iter().map(|&to| reach[to]).collect()
            })
            .collect();

        Ok(Self {
            names: nodes.iter().map(|&valve| network.names[valve].clone()).collect(),
            // the start only ever counts as a place, never as a reward
            flows: std::iter::once(0)
                .chain(nodes[1..].iter().map(|&valve| network.flows[valve]))
                .collect(),
            steps,
        })
    }

    /// Number of nodes, start included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn reward_count(&self) -> usize {
        self.len() - 1
    }

    /// Mask with one bit per reward valve
    pub fn all_closed(&self) -> u64 {
        (1u64 << self.reward_count()) - 1
    }

    pub fn name(&self, node: usize) -> &str {
        &self.names[node]
    }

    pub fn flow(&self, node: usize) -> u32 {
        self.flows[node]
    }

    pub fn distance(&self, from: usize, to: usize) -> Option<u32> {
        self.steps[from][to]
    }
}
