//! Blizzard Basin: shortest walk through a valley of wrapping blizzards.
//!
//! Blizzards move one cell per minute and wrap inside the walls, so the whole
//! configuration repeats every `lcm(inner_height, inner_width)` minutes. The
//! search key is therefore `(position, minute mod period)`, which keeps the
//! visited set finite even when the exit can never be reached.

use std::cell::RefCell;

use anyhow::{anyhow, bail};
use fxhash::{FxHashMap, FxHashSet};
use log::{info, trace};
use puzzle_search::{SearchSpace, ShortestPath};
use puzzle_solver::{AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError};

use super::grid::{Dir, Pos, lcm};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2022, day = 24, tags = ["search", "grid", "shortest-path"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Blizzard {
    origin: Pos,
    heading: Dir,
}

#[derive(Debug)]
pub struct Valley {
    height: i32,
    width: i32,
    entry: Pos,
    exit: Pos,
    /// Row-major, `true` for cells that are not wall
    open: Vec<bool>,
    blizzards: Vec<Blizzard>,
    period: u32,
    /// Occupied cells keyed by minute mod period, filled on demand
    occupied: RefCell<FxHashMap<u32, FxHashSet<Pos>>>,
}

impl Valley {
    pub fn entry(&self) -> Pos {
        self.entry
    }

    pub fn exit(&self) -> Pos {
        self.exit
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    fn blizzard_at(&self, blizzard: &Blizzard, minute: u32) -> Pos {
        let (dr, dc) = blizzard.heading.offset();
        let minute = i64::from(minute);
        let wrap = |start: i32, delta: i32, span: i32| -> i32 {
            let span = i64::from(span);
            let shifted = (i64::from(start) - 1 + i64::from(delta) * minute).rem_euclid(span);
            // shifted < span, and span came from an i32
            1 + shifted as i32
        };
        Pos::new(
            wrap(blizzard.origin.row, dr, self.height - 2),
            wrap(blizzard.origin.col, dc, self.width - 2),
        )
    }

    /// Whether any blizzard occupies `pos` at `minute`
    pub fn is_occupied(&self, pos: Pos, minute: u32) -> bool {
        let phase = minute % self.period;
        let mut cache = self.occupied.borrow_mut();
        cache
            .entry(phase)
            .or_insert_with(|| {
                self.blizzards
                    .iter()
                    .map(|blizzard| self.blizzard_at(blizzard, phase))
                    .collect()
            })
            .contains(&pos)
    }

    fn is_open(&self, pos: Pos) -> bool {
        if pos.row < 0 || pos.col < 0 || pos.row >= self.height || pos.col >= self.width {
            return false;
        }
        // both coordinates are non-negative and in bounds
        self.open[(pos.row * self.width + pos.col) as usize]
    }

    /// Earliest arrival at `to` when leaving `from` at minute `start`.
    pub fn travel(&self, from: Pos, to: Pos, start: u32) -> Option<u32> {
        let leg = Leg { valley: self, goal: to };
        let mut search = ShortestPath::new(&leg);
        let found = search.run((from, start));
        trace!(
            "leg {from:?} -> {to:?} from minute {start}: {:?} ({})",
            found.as_ref().map(|f| f.state.1),
            search.stats()
        );
        found.map(|found| found.state.1)
    }
}

/// One walk to a fixed goal, starting wherever the search is seeded
struct Leg<'v> {
    valley: &'v Valley,
    goal: Pos,
}

impl SearchSpace for Leg<'_> {
    type State = (Pos, u32);
    type Key = (Pos, u32);
    type Value = u32;

    fn canonical_key(&self, &(pos, minute): &Self::State) -> Self::Key {
        (pos, minute % self.valley.period)
    }

    fn successors(&self, &(pos, minute): &Self::State) -> Vec<(Self::State, u32)> {
        let next = minute + 1;
        Dir::ALL
            .iter()
            .map(|&dir| pos + dir)
            .chain(std::iter::once(pos))
            .filter(|&cell| self.valley.is_open(cell) && !self.valley.is_occupied(cell, next))
            .map(|cell| ((cell, next), 1))
            .collect()
    }

    fn is_terminal(&self, &(pos, _): &Self::State) -> bool {
        pos == self.goal
    }
}

fn parse_valley(input: &str) -> anyhow::Result<Valley> {
    let rows: Vec<&str> = input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() < 3 {
        bail!("need at least three rows, got {}", rows.len());
    }

    let width = rows[0].chars().count();
    if width < 3 {
        bail!("need at least three columns, got {width}");
    }
    let mut open = Vec::with_capacity(rows.len() * width);
    let mut blizzards = Vec::new();
    let last_row = rows.len() - 1;

    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            bail!("(line {}) expected {width} columns, found {found}", row + 1);
        }
        for (col, glyph) in line.chars().enumerate() {
            let pos = Pos::new(row as i32, col as i32);
            match glyph {
                '#' => open.push(false),
                '.' => open.push(true),
                _ => {
                    let heading = Dir::from_arrow(glyph).ok_or_else(|| {
                        anyhow!("(line {}) unknown symbol {glyph:?} at column {}", row + 1, col + 1)
                    })?;
                    if row == 0 || row == last_row || col == 0 || col == width - 1 {
                        bail!("(line {}) blizzard {glyph:?} on the outer wall", row + 1);
                    }
                    open.push(true);
                    blizzards.push(Blizzard {
                        origin: pos,
                        heading,
                    });
                }
            }
        }
    }

    let opening = |row: usize| -> anyhow::Result<Pos> {
        rows[row]
            .find('.')
            .map(|col| Pos::new(row as i32, col as i32))
            .ok_or_else(|| anyhow!("(line {}) has no opening", row + 1))
    };
    let entry = opening(0)?;
    let exit = opening(last_row)?;

    let height = rows.len() as i32;
    let width = width as i32;
    let period = lcm((height - 2) as u64, (width - 2) as u64);

    Ok(Valley {
        height,
        width,
        entry,
        exit,
        open,
        blizzards,
        period: u32::try_from(period).map_err(|_| anyhow!("blizzard period {period} is too long"))?,
        occupied: RefCell::new(FxHashMap::default()),
    })
}

#[derive(Debug)]
pub struct SharedData {
    valley: Valley,
    first_arrival: Option<u32>,
}

impl SharedData {
    fn first_arrival(&mut self) -> Result<u32, SolveError> {
        if let Some(arrival) = self.first_arrival {
            return Ok(arrival);
        }
        let valley = &self.valley;
        let arrival = valley
            .travel(valley.entry, valley.exit, 0)
            .ok_or_else(|| SolveError::NoSolution("exit is unreachable from the entry".into()))?;
        info!("reached the exit at minute {arrival}");
        self.first_arrival = Some(arrival);
        Ok(arrival)
    }
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let valley = parse_valley(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData {
            valley,
            first_arrival: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.first_arrival()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let there = shared.first_arrival()?;
        let valley = &shared.valley;
        let back = valley
            .travel(valley.exit, valley.entry, there)
            .ok_or_else(|| SolveError::NoSolution("entry is unreachable from the exit".into()))?;
        let again = valley
            .travel(valley.entry, valley.exit, back)
            .ok_or_else(|| SolveError::NoSolution("exit is unreachable on the second trip".into()))?;
        info!("round trip: {there} -> {back} -> {again}");
        Ok(again.to_string())
    }
}
