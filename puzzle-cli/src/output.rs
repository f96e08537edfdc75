//! Output formatting for solver results

use crate::executor::RunResult;
use crate::expected::Check;
use chrono::TimeDelta;
use std::time::Instant;

/// Counts shown in the summary and used for the exit status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub solved: usize,
    pub failed: usize,
    pub matched: usize,
    pub mismatched: usize,
}

impl Tally {
    pub fn of(results: &[RunResult]) -> Self {
        let mut tally = Tally::default();
        for result in results {
            if result.answer.is_ok() {
                tally.solved += 1;
            } else {
                tally.failed += 1;
            }
            match result.check {
                Check::Matches => tally.matched += 1,
                Check::Mismatch { .. } => tally.mismatched += 1,
                Check::Unchecked => {}
            }
        }
        tally
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.mismatched == 0
    }
}

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &RunResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &RunResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn print_full(&self, result: &RunResult) {
        let prefix = format!(
            "{}/{:02} Part {} [{}]",
            result.year, result.day, result.part, result.input
        );

        match &result.answer {
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                println!(
                    "{}: {}{} ({}solve: {})",
                    prefix,
                    answer,
                    format_check(&result.check),
                    parse_timing,
                    format_duration(result.solve_duration)
                );
            }
            Err(e) => {
                eprintln!("{}: Error - {}", prefix, e);
            }
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[RunResult]) {
        if self.quiet {
            return;
        }

        let tally = Tally::of(results);
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", tally.solved, tally.failed);
        println!(
            "Answers: {} matched, {} mismatched, {} unchecked",
            tally.matched,
            tally.mismatched,
            results.len() - tally.matched - tally.mismatched
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn format_check(check: &Check) -> String {
    match check {
        Check::Matches => " ✓".to_string(),
        Check::Mismatch { expected } => format!(" ✗ expected {}", expected),
        Check::Unchecked => String::new(),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
