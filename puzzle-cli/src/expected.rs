//! Expected answers embedded in input files
//!
//! An input file may carry lines such as `result part 1: 18`. They are not
//! puzzle input: they are removed before parsing and the answers they name
//! are checked against what the solver produces.

use std::collections::BTreeMap;

const MARKER: &str = "result part ";

/// Puzzle text with the expected-answer lines taken out
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PuzzleInput {
    pub text: String,
    pub expected: BTreeMap<u8, String>,
}

impl PuzzleInput {
    pub fn from_raw(raw: &str) -> Self {
        let mut input = PuzzleInput::default();
        for line in raw.lines() {
            match expected_answer(line) {
                Some((part, answer)) => {
                    input.expected.insert(part, answer.to_string());
                }
                None => {
                    input.text.push_str(line);
                    input.text.push('\n');
                }
            }
        }
        input
    }

    pub fn expected(&self, part: u8) -> Option<&str> {
        self.expected.get(&part).map(String::as_str)
    }
}

fn expected_answer(line: &str) -> Option<(u8, &str)> {
    let rest = line.trim().strip_prefix(MARKER)?;
    let (part, answer) = rest.split_once(':')?;
    let part = part.trim().parse().ok()?;
    Some((part, answer.trim()))
}

/// Outcome of comparing an answer with the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    Matches,
    Mismatch { expected: String },
    Unchecked,
}

impl Check {
    pub fn of(answer: &str, expected: Option<&str>) -> Self {
        match expected {
            Some(expected) if expected == answer => Check::Matches,
            Some(expected) => Check::Mismatch {
                expected: expected.to_string(),
            },
            None => Check::Unchecked,
        }
    }
}
