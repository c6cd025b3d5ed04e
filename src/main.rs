#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Parser};

mod checked_product;
mod disjoint_set;
mod solutions;

/// Advent of Code 2025 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day to solve (e.g. 3, 8).
    day: u8,

    /// Read puzzle input from this file instead of `inputs/dayNN.txt`.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print how long parsing and each part took.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Only print timings at least this many milliseconds long.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

/// The input file used when none is given: `inputs/dayNN.txt`.
fn default_input_path(day: u8) -> PathBuf {
    PathBuf::from("inputs").join(format!("day{day:02}.txt"))
}

fn read_input(path: &Path, is_default: bool) -> Result<String> {
    fs::read_to_string(path).with_context(|| {
        if is_default {
            format!(
                "default input file missing: {}\n\n\
                please create the file or provide the input file argument",
                path.display()
            )
        } else {
            format!("could not read input file at: {}", path.display())
        }
    })
}

/// Prints runner events to stdout.
struct CliOutputHandler {
    /// Durations shorter than this are not printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const DECIMAL_PLACES: usize = 3;

        if duration >= Duration::from_secs(1) {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f64())
        } else if duration >= Duration::from_millis(1) {
            format!("{:.*} milliseconds", DECIMAL_PLACES, duration.as_secs_f64() * 1e3)
        } else if duration >= Duration::from_micros(1) {
            format!("{:.*} microseconds", DECIMAL_PLACES, duration.as_secs_f64() * 1e6)
        } else {
            format!("{} nanoseconds", duration.subsec_nanos())
        }
    }

    fn shown_duration(&self, duration_opt: Option<Duration>) -> Option<String> {
        duration_opt
            .filter(|duration| *duration >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(duration) = self.shown_duration(duration_opt) {
            println!("Input parsed in {duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        match self.shown_duration(duration_opt) {
            Some(duration) => println!("{output} ({duration})"),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = match &args.input {
        Some(path) => read_input(path, false)?,
        None => read_input(&default_input_path(args.day), true)?,
    };

    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    solutions::run_day(args.day, &input, &mut handler, args.timed)
        .map_err(|error| Error::from_boxed(error).context("failed to run solution"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_path_pads_day() {
        assert_eq!(default_input_path(3), PathBuf::from("inputs").join("day03.txt"));
        assert_eq!(default_input_path(12), PathBuf::from("inputs").join("day12.txt"));
    }

    #[test]
    fn format_duration_picks_unit() {
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_millis(1500)),
            "1.500 seconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_micros(2500)),
            "2.500 milliseconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_nanos(42)),
            "42 nanoseconds"
        );
    }

    #[test]
    fn cli_parses_flags() {
        let args = Cli::parse_from(["aoc-2025", "8", "--input", "example.txt", "-t"]);
        assert_eq!(args.day, 8);
        assert_eq!(args.input, Some(PathBuf::from("example.txt")));
        assert!(args.timed);
        assert_eq!(args.min_timing_ms, 0);
    }
}
