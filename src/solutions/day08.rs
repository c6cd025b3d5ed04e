use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point3;

use crate::checked_product::CheckedProduct;
use crate::disjoint_set::DisjointSet;

#[solution_runner(
    name = "Day 8: Playground",
    parsed = JunctionBoxes,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2025<8> {}

/*
Input is a list of junction box positions in 3D space, one `X,Y,Z` per line.
*/

/// The integer type for junction box coordinates.
///
/// Coordinates are squared when measuring distances, so this is sized well past the observed
/// 5 digit values.
type Coordinate = i64;

#[derive(Debug)]
struct JunctionBoxes(Vec<Point3<Coordinate>>);

#[derive(thiserror::Error, Debug)]
enum ParseJunctionBoxError {
    #[error("expected three comma-separated coordinates, found {0:?}")]
    ExpectedThreeCoordinates(String),
}

impl ParseData for JunctionBoxes {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let boxes = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let coordinates: Vec<_> = line.trim().split(',').collect();
            let [x, y, z] = coordinates.as_slice() else {
                return Err(ParseJunctionBoxError::ExpectedThreeCoordinates(line.to_owned()).into());
            };

            Ok(Point3::new(
                parse_with_context::<Coordinate>(x.trim())?,
                parse_with_context::<Coordinate>(y.trim())?,
                parse_with_context::<Coordinate>(z.trim())?,
            ))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(boxes))
    }
}

/*
Connecting two junction boxes with a string of lights joins them into the same circuit. Circuits are
connected components: connecting boxes already in one circuit changes nothing.

Connections are made between the closest pairs of boxes first, by straight-line distance.

For part 1, make the 1000 shortest connections, then multiply the sizes of the three largest
circuits.

> Squared distances order pairs the same as distances and stay exact integers. Sorting is stable so
> equal distances keep pair enumeration order.
*/

/// A possible connection between two boxes, by index.
#[derive(Debug, Clone, Copy)]
struct Connection {
    squared_distance: Coordinate,
    a: usize,
    b: usize,
}

/// Connections made for part 1.
const PART_ONE_CONNECTIONS: usize = 1000;

impl JunctionBoxes {
    /// Every pair of boxes, shortest distance first.
    fn connections_by_distance(&self) -> Vec<Connection> {
        let mut connections = Vec::with_capacity(self.0.len() * self.0.len().saturating_sub(1) / 2);
        for (a, position_a) in self.0.iter().enumerate() {
            for (offset, position_b) in self.0[a + 1..].iter().enumerate() {
                let difference = *position_b - *position_a;
                connections.push(Connection {
                    squared_distance: difference.dot(&difference),
                    a,
                    b: a + 1 + offset,
                });
            }
        }

        connections.sort_by_key(|connection| connection.squared_distance);
        connections
    }

    /// Multiply the sizes of the three largest circuits after making the `connection_count`
    /// shortest connections.
    fn product_of_largest_circuits(&self, connection_count: usize) -> usize {
        let mut circuits = DisjointSet::new(self.0.len());
        for connection in self.connections_by_distance().iter().take(connection_count) {
            circuits.union(connection.a, connection.b);
        }

        let mut sizes = circuits.component_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
            .into_iter()
            .take(3)
            .checked_product()
            .expect("circuit sizes product should not overflow")
    }
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = JunctionBoxes;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.product_of_largest_circuits(PART_ONE_CONNECTIONS))
    }
}

/*
For part 2, keep connecting the closest pairs until every box is in one circuit. Multiply the X
coordinates of the two boxes in the connection that completed it.
*/

#[derive(thiserror::Error, Debug)]
enum Day08Error {
    #[error("need at least two junction boxes to connect, found {0}")]
    TooFewBoxes(usize),
}

impl JunctionBoxes {
    /// Find the connection that joins every box into a single circuit.
    ///
    /// Returns `None` when there's nothing to connect (fewer than two boxes).
    fn completing_connection(&self) -> Option<Connection> {
        let mut circuits = DisjointSet::new(self.0.len());
        self.connections_by_distance()
            .into_iter()
            .find(|connection| {
                circuits.union(connection.a, connection.b) && circuits.component_count() == 1
            })
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = JunctionBoxes;
    type Output = Coordinate;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let connection = input
            .completing_connection()
            .ok_or(Day08Error::TooFewBoxes(input.0.len()))?;

        let product = input.0[connection.a]
            .x
            .checked_mul(input.0[connection.b].x)
            .expect("coordinate product should not overflow");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn product_of_largest_circuits_solves_example() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        // circuits of 5, 4, 2, 2 and seven single boxes
        assert_eq!(parsed.product_of_largest_circuits(10), 40);
        Ok(())
    }

    #[test]
    fn part_one_with_more_connections_than_pairs() -> DynamicResult<()> {
        // 190 pairs, all connected into one circuit of 20
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 20);
        Ok(())
    }

    #[test]
    fn example_circuit_sizes_after_ten_connections() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let mut circuits = DisjointSet::new(parsed.0.len());
        for connection in parsed.connections_by_distance().iter().take(10) {
            circuits.union(connection.a, connection.b);
        }

        let mut sizes = circuits.component_sizes();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sizes, vec![5, 4, 2, 2, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(sizes.iter().sum::<usize>(), 20);
        Ok(())
    }

    #[test]
    fn closest_example_pair_comes_first() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let first = parsed.connections_by_distance()[0];
        // 162,817,812 and 425,690,689
        assert_eq!((first.a, first.b), (0, 19));
        Ok(())
    }

    #[test]
    fn equal_distances_keep_enumeration_order() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse("0,0,0\n1,0,0\n0,1,0\n1,1,0")?;
        let pairs: Vec<_> = parsed
            .connections_by_distance()
            .iter()
            .map(|connection| (connection.a, connection.b))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 3), (2, 3), (0, 3), (1, 2)]);

        // (0, 1) and (0, 2) join three boxes, leaving one alone
        assert_eq!(parsed.product_of_largest_circuits(2), 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        // 216,146,977 and 117,168,530 connect last
        assert_eq!(result, 25272);
        Ok(())
    }

    #[test]
    fn part_two_needs_two_boxes() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse("1,2,3\n")?;
        assert!(<Day08 as Solution<PartTwo>>::solve(&parsed).is_err());

        let parsed = JunctionBoxes::parse("4,0,0\n7,9,9\n")?;
        assert_eq!(<Day08 as Solution<PartTwo>>::solve(&parsed)?, 28);
        Ok(())
    }

    #[test]
    fn parse_rejects_bad_boxes() {
        assert!(JunctionBoxes::parse("1,2").is_err(), "two coordinates");
        assert!(JunctionBoxes::parse("1,2,3,4").is_err(), "four coordinates");
        assert!(JunctionBoxes::parse("1,b,3").is_err(), "not a number");
    }
}
