//! Solutions implemented for Advent of Code 2025.
//!
//! [`run_day`] runs a solution by its day number.
//!
//! To make a new day runnable:
//! 1. Add a submodule holding the solution.
//! 2. In it, implement [`AdventOfCode2025<DAY>`] as a [`SolutionRunner`] for the day, usually with
//!    [`#[solution_runner]`][aoc_framework::runner::solution_runner].
//! 3. Declare the submodule below `IMPORT SUBMODULES HERE`.
//! 4. Add a match arm below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! 3 => AdventOfCode2025::<3>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day03;
mod day04;
mod day05;
mod day08;
mod day09;

/// Solutions collected by day.
///
/// A submodule implements this as a [`SolutionRunner`] for its day:
///
/// ```ignore
/// #[solution_runner(name = "Day 3: Lobby", parsed = BatteryBanks, part_one = Day03, part_two = Day03)]
/// impl super::AdventOfCode2025<3> {}
/// ```
struct AdventOfCode2025<const DAY: u8>;

/// No solution exists for the requested day.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run the solution for `day`.
///
/// # Errors
///
/// [`DayNotAvailable`] for a day without a solution, otherwise any error from running it.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        3 => AdventOfCode2025::<3>::run(input, handler, timed),
        4 => AdventOfCode2025::<4>::run(input, handler, timed),
        5 => AdventOfCode2025::<5>::run(input, handler, timed),
        8 => AdventOfCode2025::<8>::run(input, handler, timed),
        9 => AdventOfCode2025::<9>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
