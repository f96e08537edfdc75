//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into the data shared by every part.
///
/// Parsing is the only place input text is inspected: malformed input must
/// be rejected here, before any part runs.
pub trait PuzzleParser {
    /// The shared data structure holding the parsed input and any results
    /// one part wants to hand to the next.
    ///
    /// Use any ownership strategy:
    /// - owned structs for transformed data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving part `N` of a puzzle.
///
/// The const generic gives compile-time proof that a part exists; the
/// [`PuzzleSolver`](crate::PuzzleSolver) derive dispatches runtime part
/// numbers to these impls.
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - Solving failed or found no solution
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that every registered solver implements.
///
/// Usually derived with `#[derive(PuzzleSolver)]` rather than written by hand.
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects part 0 and parts above `PARTS`
    /// with [`SolveError::PartOutOfRange`].
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
