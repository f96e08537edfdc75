//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Search-based puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "puzzle", about = "Run puzzle solvers against local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day{DD}/test.txt` and `input.txt`
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Run a single input file instead (needs --year and --day)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
