use std::collections::HashSet;
use std::num::TryFromIntError;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 4: Printing Department",
    parsed = PaperGrid,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2025<4> {}

/*
Input is a character grid of the printing department floor: `@` is a roll of paper, `.` is empty.
*/

/// Positions of paper rolls on the floor.
///
/// Anything outside the grid is empty floor, so only roll positions need tracking.
#[derive(Debug, Clone)]
struct PaperGrid {
    rolls: HashSet<Point2<i32>>,
}

#[derive(thiserror::Error, Debug)]
enum ParsePaperGridError {
    #[error("too many lines to represent y-coordinate")]
    LineIndexOverflow(#[source] TryFromIntError),

    #[error("too many characters to represent x-coordinate")]
    CharIndexOverflow(#[source] TryFromIntError),

    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalGridWidth { expected: usize, found: usize },

    #[error("invalid character in grid: {0:?}")]
    InvalidChar(char),
}

impl ParseData for PaperGrid {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut width_opt = None;
        let mut rolls = HashSet::new();

        parse_input_lines(input, |line_index, line| {
            let line_width = line.chars().count();
            match width_opt {
                Some(expected) if expected != line_width => {
                    return Err(ParsePaperGridError::UnequalGridWidth {
                        expected,
                        found: line_width,
                    });
                }
                Some(_) => {}
                None => width_opt = Some(line_width),
            }

            let y = i32::try_from(line_index).map_err(ParsePaperGridError::LineIndexOverflow)?;
            for (char_index, c) in line.chars().enumerate() {
                match c {
                    '.' => {}
                    '@' => {
                        let x = i32::try_from(char_index)
                            .map_err(ParsePaperGridError::CharIndexOverflow)?;
                        rolls.insert(Point2::new(x, y));
                    }
                    _ => return Err(ParsePaperGridError::InvalidChar(c)),
                }
            }

            Ok(())
        })
        .collect::<Result<(), _>>()?;

        Ok(Self { rolls })
    }
}

/*
A forklift can access a roll when fewer than four of the eight surrounding positions hold rolls.

For part 1, count the rolls a forklift can access.
*/

/// The eight offsets to neighbouring positions, cardinal and diagonal.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A roll is accessible with fewer than this many neighbouring rolls.
const CROWDED_NEIGHBOURS: usize = 4;

impl PaperGrid {
    fn neighbouring_rolls(&self, position: Point2<i32>) -> usize {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.rolls.contains(&(position + Vector2::new(*dx, *dy))))
            .count()
    }

    /// Rolls that currently have fewer than [`CROWDED_NEIGHBOURS`] neighbouring rolls.
    fn accessible_rolls(&self) -> Vec<Point2<i32>> {
        self.rolls
            .iter()
            .copied()
            .filter(|position| self.neighbouring_rolls(*position) < CROWDED_NEIGHBOURS)
            .collect()
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = PaperGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.accessible_rolls().len())
    }
}

/*
For part 2, removing accessible rolls can make more rolls accessible. Keep removing rolls until none
are accessible, and count how many were removed in total.

> Removal happens in rounds: every accessible roll of the current floor is removed at once. Removal
> only ever lowers neighbour counts, so the final count matches removing one roll at a time.
*/

impl PaperGrid {
    /// Remove accessible rolls in rounds until none remain accessible, returning the count
    /// removed.
    fn remove_accessible_rolls(&mut self) -> usize {
        let mut removed = 0;
        loop {
            let accessible = self.accessible_rolls();
            if accessible.is_empty() {
                return removed;
            }

            removed += accessible.len();
            for position in &accessible {
                self.rolls.remove(position);
            }
        }
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = PaperGrid;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.clone().remove_accessible_rolls())
    }
}
