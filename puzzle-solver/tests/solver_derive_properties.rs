//! Property-based tests for the PuzzleSolver derive macro

use puzzle_solver::{ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(PuzzleSolver)]
#[puzzle_solver(max_parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

/// **Feature: solver-derive, Property 1: Part dispatch correctness**
///
/// *For any* valid part number N in 1..=max_parts, calling `Solver::solve_part(shared, N)`
/// should produce the same result as calling `<Self as PartSolver<N>>::solve(shared)`.
mod property_1_part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_correct_part_solver(
            numbers in prop::collection::vec(1i32..10, 1..5),
            part in 1u8..=2
        ) {
            let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
            let mut shared1 = <TestSolver as PuzzleParser>::parse(&input).unwrap();
            let mut shared2 = <TestSolver as PuzzleParser>::parse(&input).unwrap();

            let solver_result = <TestSolver as Solver>::solve_part(&mut shared1, part);

            let direct_result = match part {
                1 => <TestSolver as PartSolver<1>>::solve(&mut shared2),
                2 => <TestSolver as PartSolver<2>>::solve(&mut shared2),
                _ => unreachable!(),
            };

            prop_assert_eq!(solver_result.unwrap(), direct_result.unwrap());
        }
    }
}

/// **Feature: solver-derive, Property 2: Invalid part rejection**
///
/// *For any* part number outside 1..=max_parts, `Solver::solve_part`
/// should return `SolveError::PartNotImplemented`.
mod property_2_invalid_part_rejection {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut shared = <TestSolver as PuzzleParser>::parse("1\n2\n3").unwrap();

            let result = <TestSolver as Solver>::solve_part(&mut shared, invalid_part);

            match result {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                _ => prop_assert!(false, "Expected PartNotImplemented error for part {}", invalid_part),
            }
        }
    }
}

/// **Feature: solver-derive, Property 3: Shared data carries results between parts**
///
/// *For any* solver where part 1 stores a value in the shared data,
/// part 2 should observe it.
mod property_3_mutation {
    use super::*;

    #[derive(Debug, Clone)]
    struct MutableData {
        numbers: Vec<i32>,
        cached_sum: Option<i32>,
    }

    #[derive(PuzzleSolver)]
    #[puzzle_solver(max_parts = 2)]
    struct MutatingSolver;

    impl PuzzleParser for MutatingSolver {
        type SharedData<'a> = MutableData;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let numbers: Vec<i32> = input
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat("bad int".into()))
                })
                .collect::<Result<_, _>>()?;
            Ok(MutableData {
                numbers,
                cached_sum: None,
            })
        }
    }

    impl PartSolver<1> for MutatingSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let sum: i32 = shared.numbers.iter().sum();
            shared.cached_sum = Some(sum);
            Ok(sum.to_string())
        }
    }

    impl PartSolver<2> for MutatingSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let sum = shared
                .cached_sum
                .ok_or_else(|| SolveError::Invariant("part 1 has not run".into()))?;
            Ok((sum * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn mutation_is_visible_to_later_parts(numbers in prop::collection::vec(1i32..100, 1..5)) {
            let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
            let expected_sum: i32 = numbers.iter().sum();

            let mut shared = <MutatingSolver as PuzzleParser>::parse(&input).unwrap();

            let result1 = <MutatingSolver as Solver>::solve_part(&mut shared, 1).unwrap();
            prop_assert_eq!(result1, expected_sum.to_string());
            prop_assert_eq!(shared.cached_sum, Some(expected_sum));

            let result2 = <MutatingSolver as Solver>::solve_part(&mut shared, 2).unwrap();
            prop_assert_eq!(result2, (expected_sum * 2).to_string());
        }
    }

    #[test]
    fn part_two_alone_reports_invariant() {
        let mut shared = <MutatingSolver as PuzzleParser>::parse("4").unwrap();
        let result = <MutatingSolver as Solver>::solve_part(&mut shared, 2);
        assert!(matches!(result, Err(SolveError::Invariant(_))));
    }
}

/// **Feature: solver-derive, Property 4: Borrowed shared data**
///
/// Shared data may borrow from the input text.
mod property_4_borrowed {
    use super::*;

    #[derive(PuzzleSolver)]
    #[puzzle_solver(max_parts = 1)]
    struct Longest;

    impl PuzzleParser for Longest {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.split_whitespace().collect())
        }
    }

    impl PartSolver<1> for Longest {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .iter()
                .max_by_key(|word| word.len())
                .map(|word| word.to_string())
                .ok_or_else(|| SolveError::NoSolution("no words".into()))
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn borrowed_words_survive_until_solve(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
            let input = words.join(" ");
            let mut shared = <Longest as PuzzleParser>::parse(&input).unwrap();
            let answer = <Longest as Solver>::solve_part(&mut shared, 1).unwrap();
            let longest = words.iter().map(String::len).max().unwrap();
            prop_assert_eq!(answer.len(), longest);
        }
    }

    #[test]
    fn empty_input_has_no_solution() {
        let mut shared = <Longest as PuzzleParser>::parse("").unwrap();
        let result = <Longest as Solver>::solve_part(&mut shared, 1);
        assert!(matches!(result, Err(SolveError::NoSolution(_))));
    }
}
