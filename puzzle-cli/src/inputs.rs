//! Locating puzzle inputs on disk

use crate::error::CliError;
use crate::expected::PuzzleInput;
use std::fs;
use std::path::{Path, PathBuf};

/// File names tried, in order, inside a day directory
const INPUT_FILES: [&str; 2] = ["test.txt", "input.txt"];

/// Input tree for puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}/{test,input}.txt`
pub struct InputTree {
    base_dir: PathBuf,
}

/// One input file, loaded and split into text and expected answers
#[derive(Debug)]
pub struct LoadedInput {
    pub path: PathBuf,
    pub input: PuzzleInput,
}

impl LoadedInput {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            input: PuzzleInput::from_raw(&raw),
        })
    }

    /// File name used in output, e.g. `test.txt`
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl InputTree {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Directory holding the inputs of a specific year/day
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir.join(year.to_string()).join(format!("day{:02}", day))
    }

    /// Input files present for a year/day, test input first
    pub fn paths(&self, year: u16, day: u8) -> Vec<PathBuf> {
        let dir = self.day_dir(year, day);
        INPUT_FILES
            .iter()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect()
    }

    pub fn load(&self, year: u16, day: u8) -> Result<Vec<LoadedInput>, CliError> {
        self.paths(year, day)
            .iter()
            .map(|path| LoadedInput::load(path))
            .collect()
    }
}
