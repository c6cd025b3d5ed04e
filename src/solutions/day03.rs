use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 3: Lobby",
    parsed = BatteryBanks,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2025<3> {}

/*
Input is a list of battery banks, one per line. Each character is a battery's joltage rating, a
single digit 1 through 9.
*/

/// A joltage rating of one battery, `0..=9`.
type Rating = u8;

/// The joltage produced by a bank, read as the decimal number of its turned-on ratings.
///
/// Part 2 turns on 12 batteries, so this holds at least 12 decimal digits.
type Joltage = u64;

#[derive(Debug)]
struct BatteryBanks(Vec<Vec<Rating>>);

#[derive(thiserror::Error, Debug)]
enum ParseBankError {
    #[error("expected a digit for a battery rating, found {0:?}")]
    NotADigit(char),
}

impl ParseData for BatteryBanks {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let banks: Vec<_> = parse_input_lines(input, |_, line| {
            line.trim()
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|digit| Rating::try_from(digit).expect("a digit fits in a rating"))
                        .ok_or(ParseBankError::NotADigit(c))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()?;

        // blank lines hold no batteries
        Ok(Self(banks.into_iter().filter(|bank| !bank.is_empty()).collect()))
    }
}

/*
Turning on batteries produces joltage equal to the number their ratings form, in bank order. The
batteries can't be rearranged.

For part 1, turn on exactly two batteries per bank to get its largest joltage, then sum across
banks.

> Choosing digits left to right, the earliest digit dominates. Greedily take the largest digit that
> still leaves enough batteries after it for the remaining picks, preferring the leftmost of equal
> digits so later picks have the most room.
*/

/// Find the largest joltage from turning on exactly `count` batteries of a bank.
///
/// A bank with fewer than `count` batteries can't be turned on and produces 0.
fn max_joltage(bank: &[Rating], count: usize) -> Joltage {
    if count == 0 || bank.len() < count {
        return 0;
    }

    let mut joltage: Joltage = 0;
    let mut start = 0;
    for remaining_after in (0..count).rev() {
        // leave `remaining_after` batteries for later picks
        let window = &bank[start..bank.len() - remaining_after];
        let (offset, rating) = window
            .iter()
            .enumerate()
            .rev() // max_by_key keeps the last maximum; reversed, that's the leftmost
            .max_by_key(|(_, rating)| **rating)
            .expect("window should have at least one battery");

        joltage = joltage
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(Joltage::from(*rating)))
            .expect("joltage should not overflow");
        start += offset + 1;
    }

    joltage
}

impl BatteryBanks {
    fn total_joltage(&self, count: usize) -> Joltage {
        self.0
            .iter()
            .map(|bank| max_joltage(bank, count))
            .checked_sum()
            .expect("should not have integer overflow during summation")
    }
}

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = BatteryBanks;
    type Output = Joltage;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.total_joltage(2))
    }
}

/*
For part 2, turn on exactly twelve batteries per bank instead. The same greedy choice applies.
*/

impl Solution<PartTwo> for Day03 {
    type Input = BatteryBanks;
    type Output = Joltage;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.total_joltage(12))
    }
}
