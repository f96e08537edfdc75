//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Input is well-formed but uses a shape the solver does not handle
    #[error("Unsupported input: {0}")]
    Unsupported(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The search ran out of states without reaching a solution
    #[error("No solution: {0}")]
    NoSolution(String),
    /// The solver broke one of its own invariants (a modelling bug)
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every way a part can fail, with the text the CLI prints for it
    fn describe(error: &SolveError) -> &'static str {
        match error {
            SolveError::PartNotImplemented(_) => "not implemented",
            SolveError::PartOutOfRange(_) => "out of range",
            SolveError::NoSolution(_) => "No solution",
            SolveError::Invariant(_) => "Invariant violated",
        }
    }

    #[test]
    fn test_solve_error_messages() {
        let errors = [
            SolveError::PartNotImplemented(3),
            SolveError::PartOutOfRange(9),
            SolveError::NoSolution("walled in".into()),
            SolveError::Invariant("cycle".into()),
        ];
        for error in &errors {
            assert!(error.to_string().contains(describe(error)), "{error}");
        }
    }

    #[test]
    fn test_solver_error_wraps_sources() {
        let parse: SolverError = ParseError::MissingData("no valves".into()).into();
        assert_eq!(parse.to_string(), "Parse error: Missing data: no valves");
        let solve: SolverError = SolveError::NoSolution("exit unreachable".into()).into();
        assert_eq!(solve.to_string(), "Solve error: No solution: exit unreachable");
    }
}
