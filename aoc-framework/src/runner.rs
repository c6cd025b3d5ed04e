//! Running a day's solution and reporting progress through an [`OutputHandler`].
//!
//! Days normally get a [`SolutionRunner`] implementation from the
//! [`#[solution_runner]`][solution_runner] attribute:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! struct Words(Vec<String>);
//!
//! impl ParseData for Words {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(input.split_whitespace().map(String::from).collect()))
//!     }
//! }
//!
//! struct WordCount;
//!
//! impl Solution<PartOne> for WordCount {
//!     type Input = Words;
//!     type Output = usize;
//!
//!     fn solve(input: &Words) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//!
//! #[solution_runner(name = "Word Count", parsed = Words, part_one = WordCount)]
//! struct WordCountRunner;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use aoc_framework_macros::solution_runner;

/// Receives events while a solution runs.
pub trait OutputHandler {
    /// The solution's display name, sent before anything else.
    fn solution_name(&mut self, name: &str);

    /// Input parsing is about to start.
    fn parse_start(&mut self);

    /// Input parsing finished, with the elapsed time when timing is enabled.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part is about to be solved.
    fn part_start(&mut self, part: PartKind);

    /// A part produced its answer, with the elapsed time when timing is enabled.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate `step`, also returning its duration when `timed` is set.
fn run_timed<T>(timed: bool, step: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = step();
        (result, Some(start.elapsed()))
    } else {
        (step(), None)
    }
}

fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = run_timed(timed, || D::parse(input));
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = run_timed(timed, || S::solve(input));
    handler.part_output(part, &result?, duration_opt);
    Ok(())
}

/// Parse the input then solve part one only.
///
/// # Errors
///
/// The first error from parsing or solving.
pub fn solve_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Parse the input once then solve both parts in order.
///
/// # Errors
///
/// The first error from parsing or either part; part two is not run if part one fails.
pub fn solve_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A solution that can be run from raw input.
///
/// Usually implemented through [`solution_runner`].
pub trait SolutionRunner {
    /// Run the solution on `input`, reporting to `handler`.
    ///
    /// # Errors
    ///
    /// Any error from parsing or solving.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records events as strings.
    #[derive(Default)]
    struct RecordingHandler(Vec<String>);

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.0.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.0.push("parse start".to_owned());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.0.push(format!("parse end timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.0.push(format!("start {part}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.0
                .push(format!("{part}: {output} timed={}", duration_opt.is_some()));
        }
    }

    struct Numbers(Vec<i64>);

    impl ParseData for Numbers {
        fn parse(input: &str) -> DynamicResult<Self> {
            let values = input
                .split(',')
                .map(str::parse)
                .collect::<Result<_, _>>()?;
            Ok(Self(values))
        }
    }

    struct Totals;

    impl Solution<PartOne> for Totals {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for Totals {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            input
                .0
                .iter()
                .try_fold(1_i64, |acc, value| acc.checked_mul(*value))
                .ok_or_else(|| "product overflowed".into())
        }
    }

    #[test]
    fn full_solution_reports_events_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_full_solution::<Numbers, Totals, Totals>("Totals", "2,3,4", &mut handler, true)?;

        assert_eq!(
            handler.0,
            vec![
                "name Totals",
                "parse start",
                "parse end timed=true",
                "start Part 1",
                "Part 1: 9 timed=true",
                "start Part 2",
                "Part 2: 24 timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn half_solution_stops_after_part_one() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_half_solution::<Numbers, Totals>("Totals", "5", &mut handler, false)?;

        assert_eq!(handler.0.last().map(String::as_str), Some("Part 1: 5 timed=false"));
        Ok(())
    }

    #[test]
    fn parse_error_skips_parts() {
        let mut handler = RecordingHandler::default();
        let result =
            solve_full_solution::<Numbers, Totals, Totals>("Totals", "1,x", &mut handler, false);

        assert!(result.is_err());
        assert_eq!(handler.0, vec!["name Totals", "parse start"]);
    }
}
