//! Tests for the solver registry and the type-erased instances it creates

use puzzle_solver::{
    AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistrationError,
    RegistryBuilder, SolveError, SolverError,
};
use std::cell::Cell;

thread_local! {
    static PART_ONE_CALLS: Cell<u32> = const { Cell::new(0) };
}

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 1999, day = 1, tags = ["test", "lines"])]
pub struct LineCount;

impl PuzzleParser for LineCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        PART_ONE_CALLS.with(|calls| calls.set(calls.get() + 1));
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for LineCount {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::NoSolution("nothing to find".into()))
    }
}

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 1)]
#[puzzle(year = 1999, day = 2)]
pub struct Echo;

impl PuzzleParser for Echo {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Echo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.trim().to_string())
    }
}

fn plugin_registry() -> puzzle_solver::SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 1999)
        .unwrap()
        .build()
}

#[test]
fn plugins_are_collected_with_metadata() {
    let registry = plugin_registry();
    assert_eq!(registry.len(), 2);

    let info = registry.info(1999, 1).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["test", "lines"]);

    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![1, 2]);
    assert!(registry.info(1999, 2).unwrap().tags.is_empty());
}

#[test]
fn tag_filter_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"lines"))
        .unwrap()
        .build();
    assert_eq!(registry.len(), 1);
    assert!(registry.info(1999, 2).is_none());
}

#[test]
fn duplicate_registration_is_rejected() {
    let result = RegistryBuilder::new()
        .register::<Echo>(2000, 5, &[])
        .unwrap()
        .register::<LineCount>(2000, 5, &[]);
    assert_eq!(result.err(), Some(RegistrationError::DuplicateSolver(2000, 5)));
}

#[test]
fn unknown_puzzle_is_not_found() {
    let registry = plugin_registry();
    let result = registry.create_solver(1999, 25, "x");
    assert!(matches!(result, Err(SolverError::NotFound(1999, 25))));
}

#[test]
fn parse_failure_surfaces_before_solving() {
    let registry = plugin_registry();
    let result = registry.create_solver(1999, 1, "");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn instance_solves_and_caches_answers() {
    let registry = plugin_registry();
    let mut solver = registry.create_solver(1999, 1, "a\nb\nc").unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (1999, 1, 2));
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let before = PART_ONE_CALLS.with(Cell::get);
    let first = solver.solve(1).unwrap();
    let second = solver.solve(1).unwrap();
    assert_eq!(first.answer, "3");
    assert_eq!(first, second);
    assert_eq!(PART_ONE_CALLS.with(Cell::get), before + 1);

    assert!(matches!(solver.solve(2), Err(SolveError::NoSolution(_))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    assert_eq!(solver.results().len(), 1);
}
