//! Not Enough Minerals: best robot build order per blueprint.
//!
//! Each transition jumps straight to the next robot built, waiting as many
//! minutes as the slowest missing material needs. A geode robot is credited
//! with every geode it will crack before time runs out, so the value carried
//! by a state is final and the search never has to look at the geode stock.

use std::fmt;

use anyhow::{Context, anyhow, bail, ensure};
use log::{debug, info};
use puzzle_search::{BoundedSpace, BranchAndBound, SearchSpace};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};
use regex::Regex;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2022, day = 19, tags = ["search", "branch-and-bound"])]
pub struct Solver;

const PART_ONE_MINUTES: u32 = 24;
const PART_TWO_MINUTES: u32 = 32;
const PART_TWO_BLUEPRINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    Ore = 0,
    Clay = 1,
    Obsidian = 2,
    Geode = 3,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::Ore,
        Material::Clay,
        Material::Obsidian,
        Material::Geode,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl std::str::FromStr for Material {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ore" => Ok(Material::Ore),
            "clay" => Ok(Material::Clay),
            "obsidian" => Ok(Material::Obsidian),
            "geode" => Ok(Material::Geode),
            other => Err(anyhow!("unknown material {other:?}")),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Material::Ore => "ore",
            Material::Clay => "clay",
            Material::Obsidian => "obsidian",
            Material::Geode => "geode",
        };
        f.write_str(name)
    }
}

/// Only ore, clay and obsidian are ever spent; geodes are the score.
type Stock = [u32; 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub id: u32,
    /// `costs[robot][material]`
    costs: [Stock; 4],
    /// Spending limit per material: more producers than this are useless
    caps: Stock,
}

impl Blueprint {
    pub fn new(id: u32, costs: [Stock; 4]) -> Self {
        let mut caps = [0; 3];
        for cost in &costs {
            for (cap, &amount) in caps.iter_mut().zip(cost) {
                *cap = (*cap).max(amount);
            }
        }
        Self { id, costs, caps }
    }

    pub fn cost(&self, robot: Material, material: Material) -> u32 {
        match material {
            Material::Geode => 0,
            _ => self.costs[robot.index()][material.index()],
        }
    }

    /// Most geodes this blueprint can crack in `minutes`
    pub fn max_geodes(&self, minutes: u32) -> u32 {
        let factory = Factory::new(self);
        let mut search = BranchAndBound::new(&factory);
        let geodes = search
            .run(Factory::start(minutes))
            .map_or(0, |found| found.value);
        debug!(
            "blueprint {} over {minutes} minutes: {geodes} geodes ({})",
            self.id,
            search.stats()
        );
        geodes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactoryState {
    remaining: u32,
    /// Producers of ore, clay and obsidian; geode robots are already credited
    robots: Stock,
    stock: Stock,
}

/// Build-order search space for one blueprint
pub struct Factory<'b> {
    blueprint: &'b Blueprint,
    compress: bool,
}

impl<'b> Factory<'b> {
    pub fn new(blueprint: &'b Blueprint) -> Self {
        Self {
            blueprint,
            compress: true,
        }
    }

    /// Keys states by their exact stock instead of the capped stock.
    pub fn without_compression(mut self) -> Self {
        self.compress = false;
        self
    }

    pub fn start(minutes: u32) -> FactoryState {
        FactoryState {
            remaining: minutes,
            robots: [1, 0, 0],
            stock: [0; 3],
        }
    }

    /// Minutes until `robot` is built from `state`, counting the build minute
    fn build_time(&self, state: &FactoryState, robot: Material) -> Option<u32> {
        let cost = &self.blueprint.costs[robot.index()];
        let mut wait = 0;
        for ((&needed, &have), &rate) in cost.iter().zip(&state.stock).zip(&state.robots) {
            if needed <= have {
                continue;
            }
            if rate == 0 {
                return None;
            }
            wait = wait.max((needed - have).div_ceil(rate));
        }
        Some(wait + 1)
    }
}

impl SearchSpace for Factory<'_> {
    type State = FactoryState;
    type Key = FactoryState;
    type Value = u32;

    fn canonical_key(&self, state: &FactoryState) -> FactoryState {
        if !self.compress {
            return state.clone();
        }
        // stock beyond what the remaining minutes could ever spend is equivalent
        let mut key = state.clone();
        for (amount, &cap) in key.stock.iter_mut().zip(&self.blueprint.caps) {
            *amount = (*amount).min(cap.saturating_mul(state.remaining));
        }
        key
    }

    fn successors(&self, state: &FactoryState) -> Vec<(FactoryState, u32)> {
        let mut next_states = Vec::with_capacity(4);
        for robot in Material::ALL.iter().rev().copied() {
            let producer = robot.index();
            if robot != Material::Geode && state.robots[producer] >= self.blueprint.caps[producer] {
                continue;
            }
            let Some(minutes) = self.build_time(state, robot) else {
                continue;
            };
            // the new robot needs at least one minute left to produce anything
            if minutes >= state.remaining {
                continue;
            }
            let remaining = state.remaining - minutes;
            let cost = &self.blueprint.costs[producer];
            let mut next = FactoryState {
                remaining,
                robots: state.robots,
                stock: [0; 3],
            };
            for material in 0..3 {
                next.stock[material] =
                    state.stock[material] + state.robots[material] * minutes - cost[material];
            }
            let gain = if robot == Material::Geode {
                remaining
            } else {
                next.robots[producer] += 1;
                0
            };
            next_states.push((next, gain));
        }
        next_states
    }

    fn is_terminal(&self, state: &FactoryState) -> bool {
        state.remaining <= 1
    }
}

impl BoundedSpace for Factory<'_> {
    /// Relaxed plan: ore is free, a new obsidian robot appears every minute,
    /// and a geode robot is built whenever obsidian allows.
    fn upper_bound(&self, state: &FactoryState) -> u32 {
        let obsidian = Material::Obsidian.index();
        let geode_cost = self.blueprint.costs[Material::Geode.index()][obsidian];
        let mut stock = state.stock[obsidian];
        let mut rate = state.robots[obsidian];
        let mut bound = 0;
        for left in (1..state.remaining).rev() {
            let build = stock >= geode_cost;
            stock += rate;
            if build {
                stock -= geode_cost;
                bound += left;
            }
            rate += 1;
        }
        bound
    }
}

fn parse_blueprints(input: &str) -> anyhow::Result<Vec<Blueprint>> {
    let header = Regex::new(r"Blueprint\s+(\d+):")?;
    let recipe = Regex::new(r"^\s*Each\s+([a-z]+)\s+robot\s+costs\s+([^.]*)\.")?;
    let ingredient = Regex::new(r"^(\d+)\s+([a-z]+)$")?;

    let headers: Vec<_> = header.captures_iter(input).collect();
    let leading = headers.first().map_or(input, |first| &input[..first.get_match().start()]);
    ensure!(
        leading.trim().is_empty(),
        "unexpected text before the first blueprint: {:?}",
        leading.trim()
    );

    let mut blueprints = Vec::with_capacity(headers.len());
    for (index, captures) in headers.iter().enumerate() {
        let id: u32 = captures[1].parse()?;
        let body_start = captures.get_match().end();
        let body_end = headers
            .get(index + 1)
            .map_or(input.len(), |next| next.get_match().start());
        let mut body = &input[body_start..body_end];

        let mut costs: [Option<Stock>; 4] = [None; 4];
        while !body.trim().is_empty() {
            let clause = recipe
                .captures(body)
                .ok_or_else(|| anyhow!("malformed clause {:?}", body.trim()))
                .with_context(|| format!("blueprint {id}"))?;
            let robot: Material = clause[1].parse().with_context(|| format!("blueprint {id}"))?;
            let mut cost: Stock = [0; 3];
            for part in clause[2].split(" and ") {
                let part = part.trim();
                let amounts = ingredient
                    .captures(part)
                    .ok_or_else(|| anyhow!("malformed cost {part:?}"))
                    .with_context(|| format!("blueprint {id}, {robot} robot"))?;
                let material: Material = amounts[2]
                    .parse()
                    .with_context(|| format!("blueprint {id}, {robot} robot"))?;
                if material == Material::Geode {
                    bail!("blueprint {id}: geodes cannot be spent");
                }
                let amount: u32 = amounts[1].parse()?;
                let slot = &mut cost[material.index()];
                *slot = slot
                    .checked_add(amount)
                    .ok_or_else(|| anyhow!("blueprint {id}: {robot} robot costs too much {material}"))?;
            }
            if costs[robot.index()].replace(cost).is_some() {
                bail!("blueprint {id}: {robot} robot listed twice");
            }
            body = &body[clause.get_match().end()..];
        }

        let mut recipes = [[0; 3]; 4];
        for robot in Material::ALL {
            recipes[robot.index()] = costs[robot.index()]
                .ok_or_else(|| anyhow!("blueprint {id}: no recipe for the {robot} robot"))?;
        }
        blueprints.push(Blueprint::new(id, recipes));
    }
    Ok(blueprints)
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Blueprint>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let blueprints =
            parse_blueprints(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if blueprints.is_empty() {
            return Err(ParseError::MissingData("no blueprints".into()));
        }
        Ok(blueprints)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let quality: u64 = shared
            .iter()
            .map(|blueprint| {
                u64::from(blueprint.id) * u64::from(blueprint.max_geodes(PART_ONE_MINUTES))
            })
            .sum();
        info!("total quality level over {PART_ONE_MINUTES} minutes: {quality}");
        Ok(quality.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .iter()
            .take(PART_TWO_BLUEPRINTS)
            .map(|blueprint| u64::from(blueprint.max_geodes(PART_TWO_MINUTES)))
            .product();
        info!("geode product over {PART_TWO_MINUTES} minutes: {product}");
        Ok(product.to_string())
    }
}
