use std::str::FromStr;

use aoc_framework::parsing::{InputScanner, ParseContextError, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 5: Cafeteria",
    parsed = IngredientDatabase,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2025<5> {}

/*
Input is the inventory database: a block of fresh ingredient ID ranges, an empty line, then a block
of available ingredient IDs.

Ranges are written `start-end` and include both ends. Ranges can overlap.
*/

/// The integer type for ingredient IDs.
///
/// Observed 15 digit IDs in input, so this is sized past `u32`.
type IngredientId = u64;

/// An inclusive range of fresh ingredient IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FreshRange {
    // order of props relevant when deriving Ord
    start: IngredientId,
    end: IngredientId,
}

#[derive(thiserror::Error, Debug)]
enum ParseFreshRangeError {
    #[error("expected a dash between range start and end")]
    NoDashDelimiter,

    #[error(transparent)]
    InvalidId(#[from] ParseContextError<std::num::ParseIntError>),

    #[error("range start {start} is after range end {end}")]
    Reversed {
        start: IngredientId,
        end: IngredientId,
    },
}

impl FromStr for FreshRange {
    type Err = ParseFreshRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_str, end_str) = s
            .trim()
            .split_once('-')
            .ok_or(ParseFreshRangeError::NoDashDelimiter)?;
        let start = parse_with_context::<IngredientId>(start_str)?;
        let end = parse_with_context::<IngredientId>(end_str)?;
        if start > end {
            return Err(ParseFreshRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }
}

impl FreshRange {
    fn contains(self, id: IngredientId) -> bool {
        (self.start..=self.end).contains(&id)
    }

    /// The count of IDs in the range.
    fn len(self) -> IngredientId {
        self.end - self.start + 1
    }
}

#[derive(Debug)]
struct IngredientDatabase {
    fresh_ranges: Vec<FreshRange>,
    available_ids: Vec<IngredientId>,
}

#[derive(thiserror::Error, Debug)]
enum ParseDatabaseError {
    #[error("unexpected content after the available ingredient IDs")]
    TrailingBlock,
}

impl ParseData for IngredientDatabase {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);

        let fresh_ranges = scanner.collect_sequence(|_, line| line.parse::<FreshRange>())?;

        // the available IDs block may be left out entirely
        scanner.skip_empty();
        let available_ids = scanner.collect_sequence(|_, line| {
            parse_with_context::<IngredientId>(line.trim())
        })?;

        if !scanner.is_finished() {
            return Err(ParseDatabaseError::TrailingBlock.into());
        }

        Ok(Self {
            fresh_ranges,
            available_ids,
        })
    }
}

/*
For part 1, count how many available ingredient IDs are fresh: inside at least one fresh range.
*/

impl IngredientDatabase {
    fn is_fresh(&self, id: IngredientId) -> bool {
        self.fresh_ranges.iter().any(|range| range.contains(id))
    }
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = IngredientDatabase;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .available_ids
            .iter()
            .filter(|id| input.is_fresh(**id))
            .count())
    }
}

/*
For part 2, ignore the available IDs and count every ID the fresh ranges consider fresh.

> Overlaps would double count, so merge ranges first. Sorted by start, a range overlaps or touches
> the previous merged range when it starts no later than one past that range's end.
*/

/// Merge overlapping and adjacent ranges into disjoint ranges, sorted by start.
fn merge_ranges(ranges: &[FreshRange]) -> Vec<FreshRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<FreshRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

impl Solution<PartTwo> for Day05 {
    type Input = IngredientDatabase;
    type Output = IngredientId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = merge_ranges(&input.fresh_ranges)
            .into_iter()
            .map(FreshRange::len)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(total)
    }
}
