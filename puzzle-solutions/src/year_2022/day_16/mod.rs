//! Proboscidea Volcanium: release as much pressure as possible before the
//! volcano erupts, alone in 30 minutes or with an elephant in 26.

mod distances;
mod tour;


use anyhow::anyhow;
use fxhash::FxHashMap;
use log::{debug, info};
use puzzle_search::{MemoizedSearch, SearchError};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use regex::Regex;

pub use distances::{DistanceTable, MAX_REWARD_VALVES, Network};
pub use tour::{Agent, DuoState, DuoTour, SoloState, SoloTour};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2022, day = 16, tags = ["search", "memoized"])]
pub struct Solver;

pub const START_VALVE: &str = "AA";
pub const SOLO_MINUTES: u32 = 30;
pub const DUO_MINUTES: u32 = 26;

struct ValveLine<'a> {
    line: usize,
    name: &'a str,
    flow: u32,
    targets: Vec<&'a str>,
}

fn parse_line<'a>(pattern: &Regex, line: usize, text: &'a str) -> anyhow::Result<ValveLine<'a>> {
    let captures = pattern
        .captures(text)
        .ok_or_else(|| anyhow!("(line {line}) not a valve description: {text:?}"))?;
    let (_, [name, flow, targets]) = captures.extract();
    Ok(ValveLine {
        line,
        name,
        flow: flow
            .parse()
            .map_err(|e| anyhow!("(line {line}) flow rate {flow:?}: {e}"))?,
        targets: targets.split(',').map(str::trim).collect(),
    })
}

fn parse_network(input: &str) -> Result<Network, ParseError> {
    let pattern = Regex::new(
        r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (\w+(?:,\s*\w+)*)$",
    )
    .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    let valves = input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(line_idx, text)| parse_line(&pattern, line_idx + 1, text.trim()))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    for (position, valve) in valves.iter().enumerate() {
        if index.insert(valve.name, position).is_some() {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) valve {} is described twice",
                valve.line, valve.name
            )));
        }
    }

    let mut tunnels = Vec::with_capacity(valves.len());
    for valve in &valves {
        let mut exits = Vec::with_capacity(valve.targets.len());
        for &target in &valve.targets {
            let &next = index.get(target).ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "(line {}) valve {} leads to unknown valve {target}",
                    valve.line, valve.name
                ))
            })?;
            exits.push(next);
        }
        tunnels.push(exits);
    }

    let start = *index
        .get(START_VALVE)
        .ok_or_else(|| ParseError::MissingData(format!("no valve named {START_VALVE}")))?;

    Ok(Network::new(
        valves.iter().map(|valve| valve.name.to_string()).collect(),
        valves.iter().map(|valve| valve.flow).collect(),
        tunnels,
        start,
    ))
}

/// Pressure released by the best single-agent tour, plus the valves it opens in order
pub fn best_solo(table: &DistanceTable, budget: u32) -> Result<(u64, Vec<String>), SearchError> {
    let tour = SoloTour::new(table, budget);
    let mut search = MemoizedSearch::new(&tour);
    let best = search.run(tour.start())?;
    debug!("solo tour over {budget} minutes: {}", search.stats());

    let route = search
        .principal_path(&tour.start())
        .unwrap_or_default()
        .iter()
        .skip(1)
        .map(|state| table.name(state.agent.node).to_string())
        .collect();
    Ok((best.value, route))
}

/// Pressure released by the best two-agent tour
pub fn best_duo(table: &DistanceTable, budget: u32) -> Result<u64, SearchError> {
    let tour = DuoTour::new(table, budget);
    let mut search = MemoizedSearch::new(&tour);
    let best = search.run(tour.start())?;
    debug!(
        "duo tour over {budget} minutes: {} ({} memo entries)",
        search.stats(),
        search.memo_len()
    );
    Ok(best.value)
}

fn invariant(error: SearchError) -> SolveError {
    SolveError::Invariant(error.to_string())
}

impl PuzzleParser for Solver {
    type SharedData<'a> = DistanceTable;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let network = parse_network(input)?;
        let table = DistanceTable::build(&network)?;
        debug!(
            "{} valves, {} worth opening",
            input.lines().filter(|line| !line.trim().is_empty()).count(),
            table.reward_count()
        );
        Ok(table)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (released, route) = best_solo(shared, SOLO_MINUTES).map_err(invariant)?;
        info!("alone: {released} via {}", route.join(" -> "));
        Ok(released.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let released = best_duo(shared, DUO_MINUTES).map_err(invariant)?;
        info!("with the elephant: {released}");
        Ok(released.to_string())
    }
}
