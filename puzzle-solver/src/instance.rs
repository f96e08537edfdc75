//! Parsed puzzle instances and their timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

/// Answer to one part, with the wall-clock span it took to compute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle ready to be solved part by part
///
/// Owns the shared data, so anything one part stores is visible to the next.
/// Answers are kept: asking for a part twice does not search twice.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
    answers: Vec<Option<SolveResult>>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parses `input` and records how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        debug!(
            "{year}/{day:02} parsed in {}µs",
            (parse_end - parse_start).num_microseconds().unwrap_or_default()
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
            answers: vec![None; usize::from(S::PARTS)],
        })
    }
}

/// Type-erased view of a [`SolverInstance`]
pub trait DynSolver {
    /// Solves `part`, or returns the answer computed earlier.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Answers computed so far, in part order.
    fn results(&self) -> Vec<&SolveResult>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let slot = usize::from(part).wrapping_sub(1);
        if let Some(Some(cached)) = self.answers.get(slot) {
            return Ok(cached.clone());
        }

        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.shared, part)?;
        let solve_end = Utc::now();

        let result = SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        };
        if let Some(entry) = self.answers.get_mut(slot) {
            *entry = Some(result.clone());
        }
        Ok(result)
    }

    fn results(&self) -> Vec<&SolveResult> {
        self.answers.iter().flatten().collect()
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
