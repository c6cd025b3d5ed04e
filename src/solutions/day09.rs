use std::collections::VecDeque;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{DMatrix, Point2};

#[solution_runner(
    name = "Day 9: Movie Theater",
    parsed = RedTiles,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2025<9> {}

/*
Input is a list of red tile positions on the theater floor, one `X,Y` per line.
*/

/// The integer type for tile coordinates.
type Coordinate = i64;

/// The integer type for rectangle areas, counted in tiles.
type Area = u64;

#[derive(Debug)]
struct RedTiles(Vec<Point2<Coordinate>>);

#[derive(thiserror::Error, Debug)]
enum ParseRedTileError {
    #[error("expected two comma-separated coordinates, found {0:?}")]
    ExpectedTwoCoordinates(String),
}

impl ParseData for RedTiles {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let tiles = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (x, y) = line
                .trim()
                .split_once(',')
                .ok_or_else(|| ParseRedTileError::ExpectedTwoCoordinates(line.to_owned()))?;
            Ok(Point2::new(
                parse_with_context::<Coordinate>(x.trim())?,
                parse_with_context::<Coordinate>(y.trim())?,
            ))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(tiles))
    }
}

/*
For part 1, find the largest rectangle that uses two red tiles as opposite corners.

Corners are tiles themselves, so the area includes both edges: a rectangle from `(2,5)` to `(11,1)`
is 10 tiles wide and 5 tall.
*/

/// The area of the rectangle with opposite corner tiles `a` and `b`.
fn rectangle_area(a: Point2<Coordinate>, b: Point2<Coordinate>) -> Area {
    let width = a.x.abs_diff(b.x) + 1;
    let height = a.y.abs_diff(b.y) + 1;
    width
        .checked_mul(height)
        .expect("rectangle area should not overflow")
}

impl RedTiles {
    /// Every unordered pair of red tiles.
    fn corner_pairs(&self) -> impl Iterator<Item = (Point2<Coordinate>, Point2<Coordinate>)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(index, a)| self.0[index + 1..].iter().map(move |b| (*a, *b)))
    }
}

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = RedTiles;
    type Output = Area;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .corner_pairs()
            .map(|(a, b)| rectangle_area(a, b))
            .max()
            .unwrap_or(0))
    }
}

/*
For part 2, the list order matters: each red tile connects to the next (and the last to the first)
by a straight line of green tiles, making a loop. Tiles inside the loop are green too.

Find the largest rectangle with red opposite corners that only covers red or green tiles.

> The floor is huge but only coordinates of red tiles matter. Compress each axis to the sorted
> distinct coordinates at odd indices, with the gaps between them (and a padding border) at even
> indices. Draw the loop on that grid, flood fill the outside from the border, and anything not
> reached is allowed. Prefix sums of outside cells then test any rectangle in constant time.
*/

#[derive(thiserror::Error, Debug)]
enum Day09Error {
    #[error("red tiles {from} and {to} are not in the same row or column")]
    DiagonalEdge {
        from: Point2<Coordinate>,
        to: Point2<Coordinate>,
    },
}

/// One axis of the compressed floor.
struct CompressedAxis(Vec<Coordinate>);

impl CompressedAxis {
    fn new(values: impl Iterator<Item = Coordinate>) -> Self {
        let mut sorted: Vec<_> = values.collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self(sorted)
    }

    /// Cells along the axis: each coordinate, each gap, and a border at both ends.
    fn cell_count(&self) -> usize {
        2 * self.0.len() + 1
    }

    /// The cell index of a coordinate that's on the axis.
    fn cell_of(&self, value: Coordinate) -> usize {
        let index = self
            .0
            .binary_search(&value)
            .expect("coordinate should come from a red tile");
        2 * index + 1
    }

    /// Whether a cell stands for at least one real tile.
    ///
    /// Gaps between neighbouring coordinates, like 5 and 6, hold none.
    fn cell_has_tiles(&self, cell: usize) -> bool {
        if cell % 2 == 1 || cell == 0 || cell == self.cell_count() - 1 {
            return true;
        }
        let after = self.0[cell / 2];
        let before = self.0[cell / 2 - 1];
        after - before > 1
    }
}

/// The compressed floor, knowing which cells are outside the loop.
struct TheaterFloor {
    columns: CompressedAxis,
    rows: CompressedAxis,
    /// `outside_sums[(r, c)]` counts outside cells with row `< r` and column `< c`.
    outside_sums: DMatrix<u32>,
}

impl TheaterFloor {
    fn new(tiles: &[Point2<Coordinate>]) -> Result<Self, Day09Error> {
        let columns = CompressedAxis::new(tiles.iter().map(|tile| tile.x));
        let rows = CompressedAxis::new(tiles.iter().map(|tile| tile.y));
        let (height, width) = (rows.cell_count(), columns.cell_count());

        let mut on_loop = DMatrix::from_element(height, width, false);
        let next_tiles = tiles.iter().cycle().skip(1);
        for (from, to) in tiles.iter().zip(next_tiles) {
            if from.x != to.x && from.y != to.y {
                return Err(Day09Error::DiagonalEdge {
                    from: *from,
                    to: *to,
                });
            }

            let (row_a, row_b) = (rows.cell_of(from.y), rows.cell_of(to.y));
            let (column_a, column_b) = (columns.cell_of(from.x), columns.cell_of(to.x));
            for row in row_a.min(row_b)..=row_a.max(row_b) {
                for column in column_a.min(column_b)..=column_a.max(column_b) {
                    on_loop[(row, column)] = true;
                }
            }
        }

        // flood fill from the border corner, which is never on the loop
        let mut outside = DMatrix::from_element(height, width, false);
        let mut queue = VecDeque::from([(0_usize, 0_usize)]);
        outside[(0, 0)] = true;
        while let Some((row, column)) = queue.pop_front() {
            let neighbours = [
                (row.checked_sub(1), Some(column)),
                (Some(row + 1), Some(column)),
                (Some(row), column.checked_sub(1)),
                (Some(row), Some(column + 1)),
            ];
            for (next_row, next_column) in neighbours {
                let (Some(next_row), Some(next_column)) = (next_row, next_column) else {
                    continue;
                };
                if next_row >= height
                    || next_column >= width
                    || on_loop[(next_row, next_column)]
                    || outside[(next_row, next_column)]
                {
                    continue;
                }
                outside[(next_row, next_column)] = true;
                queue.push_back((next_row, next_column));
            }
        }

        let mut outside_sums = DMatrix::from_element(height + 1, width + 1, 0_u32);
        for row in 0..height {
            for column in 0..width {
                let counts = outside[(row, column)]
                    && rows.cell_has_tiles(row)
                    && columns.cell_has_tiles(column);
                outside_sums[(row + 1, column + 1)] = outside_sums[(row, column + 1)]
                    + outside_sums[(row + 1, column)]
                    - outside_sums[(row, column)]
                    + u32::from(counts);
            }
        }

        Ok(Self {
            columns,
            rows,
            outside_sums,
        })
    }

    /// Whether every tile of the rectangle with opposite corner tiles `a` and `b` is red or green.
    fn rectangle_allowed(&self, a: Point2<Coordinate>, b: Point2<Coordinate>) -> bool {
        let (row_a, row_b) = (self.rows.cell_of(a.y), self.rows.cell_of(b.y));
        let (column_a, column_b) = (self.columns.cell_of(a.x), self.columns.cell_of(b.x));
        let (top, bottom) = (row_a.min(row_b), row_a.max(row_b) + 1);
        let (left, right) = (column_a.min(column_b), column_a.max(column_b) + 1);

        let sums = &self.outside_sums;
        let outside_count =
            sums[(bottom, right)] + sums[(top, left)] - sums[(top, right)] - sums[(bottom, left)];
        outside_count == 0
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = RedTiles;
    type Output = Area;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let floor = TheaterFloor::new(&input.0)?;
        Ok(input
            .corner_pairs()
            .filter(|(a, b)| floor.rectangle_allowed(*a, *b))
            .map(|(a, b)| rectangle_area(a, b))
            .max()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 50);
        Ok(())
    }

    #[test]
    fn part_one_solves_two_tile_cases() -> DynamicResult<()> {
        let cases = [
            ("0,0\n5,0", 6, "horizontal"),
            ("0,0\n0,3", 4, "vertical"),
            ("0,0\n5,5", 36, "square"),
            ("3,3", 0, "single tile"),
        ];
        for (input, expected, case) in cases {
            let parsed = RedTiles::parse(input)?;
            let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result, expected, "failed {case} case");
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 24);
        Ok(())
    }

    #[test]
    fn part_two_solves_small_square() -> DynamicResult<()> {
        let parsed = RedTiles::parse("0,0\n2,0\n2,2\n0,2")?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }

    #[test]
    fn part_two_excludes_notch() -> DynamicResult<()> {
        // an L shape: the full 11x11 bounding box is not allowed
        let input = "0,0\n10,0\n10,4\n4,4\n4,10\n0,10";
        let parsed = RedTiles::parse(input)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 11 * 5);
        Ok(())
    }

    #[test]
    fn part_two_rejects_diagonal_edges() -> DynamicResult<()> {
        let parsed = RedTiles::parse("0,0\n3,3\n0,3")?;
        assert!(<Day09 as Solution<PartTwo>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn gap_between_neighbouring_coordinates_has_no_tiles() {
        let axis = CompressedAxis::new([5, 6, 9].into_iter());
        assert_eq!(axis.cell_count(), 7);
        assert_eq!(axis.cell_of(6), 3);
        assert!(axis.cell_has_tiles(0));
        assert!(!axis.cell_has_tiles(2), "between 5 and 6");
        assert!(axis.cell_has_tiles(4), "between 6 and 9");
        assert!(axis.cell_has_tiles(6));
    }
}
