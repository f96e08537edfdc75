//! Puzzle Solver Library
//!
//! A small, type-safe framework for puzzle solutions: each puzzle parses its
//! text input once into shared data and then answers one or more parts.
//!
//! # Overview
//!
//! This library provides:
//! - [`PuzzleParser`] / [`PartSolver`] traits separating parsing from solving
//! - the [`PuzzleSolver`] derive, dispatching part numbers to `PartSolver<N>` impls
//! - an error taxonomy that keeps malformed input, missing solutions and
//!   modelling bugs apart
//! - a [`SolverRegistry`] filled from plugins submitted by
//!   `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistryBuilder, SolveError};
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(max_parts = 2)]
//! pub struct Sums;
//!
//! impl PuzzleParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         shared
//!             .iter()
//!             .max()
//!             .map(|max| max.to_string())
//!             .ok_or_else(|| SolveError::NoSolution("empty input".into()))
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Sums>(2022, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive `&mut SharedData`: a part that computes something the next
//! one needs can store it there (for instance in an `Option` field).

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
