//! 2022 puzzles solved with the search engines

pub mod day_16;
pub mod day_19;
pub mod day_24;
pub mod grid;
