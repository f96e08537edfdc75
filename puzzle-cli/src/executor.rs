//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use crate::expected::Check;
use crate::inputs::{InputTree, LoadedInput};
use chrono::TimeDelta;
use log::{info, warn};
use puzzle_solver::{SolverError, SolverRegistry};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from a single solver execution on one input file
#[derive(Debug)]
pub struct RunResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Input file name, e.g. `test.txt`
    pub input: String,
    pub answer: Result<String, SolverError>,
    /// Set on the first part run against each input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
    pub check: Check,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver against every input found for it, in order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputTree,
    file: Option<PathBuf>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputTree::new(config.input_dir.clone()),
            file: config.file.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn registry(&self) -> &SolverRegistry {
        &self.registry
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    fn inputs_for(&self, work: &WorkItem) -> Result<Vec<LoadedInput>, CliError> {
        match &self.file {
            Some(path) => Ok(vec![LoadedInput::load(path)?]),
            None => self.inputs.load(work.year, work.day),
        }
    }

    /// Execute all work items, handing each result to `emit` as soon as it is known
    pub fn execute<F>(&self, mut emit: F) -> Result<(), CliError>
    where
        F: FnMut(RunResult),
    {
        for work in self.collect_work_items() {
            let inputs = self.inputs_for(&work)?;
            if inputs.is_empty() {
                warn!(
                    "no input for {}/{:02} in {}",
                    work.year,
                    work.day,
                    self.inputs.day_dir(work.year, work.day).display()
                );
            }
            for loaded in &inputs {
                info!("running {}/{:02} on {}", work.year, work.day, loaded.path.display());
                self.run_input(&work, loaded, &mut emit);
            }
        }
        Ok(())
    }

    fn run_input<F>(&self, work: &WorkItem, loaded: &LoadedInput, emit: &mut F)
    where
        F: FnMut(RunResult),
    {
        let label = loaded.label();
        let result = |part: u8,
                      answer: Result<String, SolverError>,
                      parse_duration: Option<TimeDelta>,
                      solve_duration: TimeDelta,
                      check: Check| RunResult {
            year: work.year,
            day: work.day,
            part,
            input: label.clone(),
            answer,
            parse_duration,
            solve_duration,
            check,
        };

        let mut solver = match self.registry.create_solver(work.year, work.day, &loaded.input.text) {
            Ok(solver) => solver,
            Err(SolverError::ParseError(error)) => {
                for part in work.parts.clone() {
                    let answer = Err(SolverError::ParseError(error.clone()));
                    emit(result(part, answer, None, TimeDelta::zero(), Check::Unchecked));
                }
                return;
            }
            Err(other) => {
                let part = *work.parts.start();
                emit(result(part, Err(other), None, TimeDelta::zero(), Check::Unchecked));
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let outcome = solver.solve(part);
            let emitted = match outcome {
                Ok(solved) => {
                    let check = Check::of(&solved.answer, loaded.input.expected(part));
                    let duration = solved.duration();
                    result(part, Ok(solved.answer), parse_duration.take(), duration, check)
                }
                Err(error) => result(
                    part,
                    Err(SolverError::SolveError(error)),
                    parse_duration.take(),
                    TimeDelta::zero(),
                    Check::Unchecked,
                ),
            };
            emit(emitted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use puzzle_solver::{
        ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistryBuilder, SolveError,
    };
    use std::fs;
    use tempfile::TempDir;

    #[derive(PuzzleSolver)]
    #[puzzle_solver(max_parts = 2)]
    struct Doubler;

    impl PuzzleParser for Doubler {
        type SharedData<'a> = u64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(input.trim().to_string()))
        }
    }

    impl PartSolver<1> for Doubler {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok((*shared * 2).to_string())
        }
    }

    impl PartSolver<2> for Doubler {
        fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Err(SolveError::NoSolution("never".into()))
        }
    }

    fn executor(root: &TempDir, argv: &[&str]) -> Executor {
        let mut full = vec!["puzzle", "--input-dir"];
        let dir = root.path().to_str().unwrap();
        full.push(dir);
        full.extend_from_slice(argv);
        let config = Config::from_args(Args::try_parse_from(full).unwrap()).unwrap();
        let registry = RegistryBuilder::new()
            .register::<Doubler>(2000, 1, &["test"])
            .unwrap()
            .register::<Doubler>(2000, 2, &["test"])
            .unwrap()
            .build();
        Executor::new(registry, &config)
    }

    fn run(executor: &Executor) -> Vec<RunResult> {
        let mut results = Vec::new();
        executor.execute(|result| results.push(result)).unwrap();
        results
    }

    #[test]
    fn test_work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let all = executor(&temp, &[]).collect_work_items();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].parts, 1..=2);

        let one = executor(&temp, &["--day", "2", "--part", "2"]).collect_work_items();
        assert_eq!(
            one,
            vec![WorkItem {
                year: 2000,
                day: 2,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_answers_are_checked_against_expected() {
        let temp = TempDir::new().unwrap();
        let day = temp.path().join("2000/day01");
        fs::create_dir_all(&day).unwrap();
        fs::write(day.join("test.txt"), "21\nresult part 1: 42\n").unwrap();
        fs::write(day.join("input.txt"), "5\nresult part 1: 11\n").unwrap();

        let results = run(&executor(&temp, &["--day", "1", "--part", "1"]));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].input, "test.txt");
        assert_eq!(results[0].check, Check::Matches);
        assert!(results[0].parse_duration.is_some());
        assert!(matches!(results[1].check, Check::Mismatch { .. }));
        assert_eq!(results[1].answer.as_deref().ok(), Some("10"));
    }

    #[test]
    fn test_parse_and_solve_failures_are_reported_per_part() {
        let temp = TempDir::new().unwrap();
        let day = temp.path().join("2000/day02");
        fs::create_dir_all(&day).unwrap();
        fs::write(day.join("input.txt"), "seven\n").unwrap();
        let day = temp.path().join("2000/day01");
        fs::create_dir_all(&day).unwrap();
        fs::write(day.join("input.txt"), "3\n").unwrap();

        let results = run(&executor(&temp, &[]));
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].answer.as_deref().ok(), Some("6"));
        assert!(matches!(
            results[1].answer,
            Err(SolverError::SolveError(SolveError::NoSolution(_)))
        ));
        assert!(results[2..].iter().all(|result| matches!(
            result.answer,
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        )));
    }

    #[test]
    fn test_explicit_file_replaces_lookup() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        fs::write(&file, "4\n").unwrap();

        let results = run(&executor(
            &temp,
            &["-y", "2000", "-d", "1", "-p", "1", "-f", file.to_str().unwrap()],
        ));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].input, "custom.txt");
        assert_eq!(results[0].check, Check::Unchecked);
    }
}
