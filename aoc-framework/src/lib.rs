//! Traits and helpers for solving Advent of Code puzzles.
//!
//! A day is made of one input type implementing [`ParseData`] and one or two types implementing
//! [`Solution`] for [`PartOne`] / [`PartTwo`]. The [`runner`] module parses the input once and
//! hands a reference to each part.
//!
//! # Example
//!
//! ```
//! use aoc_framework::parsing::{parse_input_lines, parse_with_context};
//! use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//!
//! struct Depths(Vec<u32>);
//!
//! impl ParseData for Depths {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let depths = parse_input_lines(input, |_, line| parse_with_context::<u32>(line))
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(depths))
//!     }
//! }
//!
//! struct Sonar;
//!
//! impl Solution<PartOne> for Sonar {
//!     type Input = Depths;
//!     type Output = usize;
//!
//!     fn solve(input: &Depths) -> DynamicResult<usize> {
//!         Ok(input.0.windows(2).filter(|pair| pair[1] > pair[0]).count())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Sonar {
//!     type Input = Depths;
//!     type Output = u32;
//!
//!     fn solve(input: &Depths) -> DynamicResult<u32> {
//!         Ok(input.0.iter().copied().max().unwrap_or(0))
//!     }
//! }
//!
//! let depths = Depths::parse("199\n200\n208\n200")?;
//! assert_eq!(<Sonar as Solution<PartOne>>::solve(&depths)?, 2);
//! assert_eq!(<Sonar as Solution<PartTwo>>::solve(&depths)?, 208);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```

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
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod sealed {
    /// Keeps [`Part`][super::Part] closed to the two marker structs defined here.
    pub trait Sealed {}
}

/// A boxed error of any type, used across parse and solve steps.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result with a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Which half of a puzzle is being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// Marker for a puzzle part, used as the generic parameter of [`Solution`].
pub trait Part: sealed::Sealed {
    /// The [`PartKind`] this marker stands for.
    fn kind() -> PartKind;
}

/// Marker for part one.
pub struct PartOne;
impl sealed::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marker for part two.
pub struct PartTwo;
impl sealed::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one [`Part`] of a puzzle from parsed input.
///
/// A single type may implement both `Solution<PartOne>` and `Solution<PartTwo>` when the parts
/// share an input type.
pub trait Solution<P: Part> {
    /// The parsed input handed to [`Solution::solve`].
    type Input: ParseData;

    /// The answer type, printed by the runner.
    type Output: Display;

    /// Solve the part.
    ///
    /// # Errors
    ///
    /// Any failure while solving, e.g. input that parses but cannot produce an answer.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Data built by parsing the raw puzzle input.
pub trait ParseData {
    /// Parse the full input string.
    ///
    /// # Errors
    ///
    /// If the input is malformed; the error should identify where.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
