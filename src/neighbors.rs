//! Neighborhoods decide which Tiles of a [`GridGraph`](crate::GridGraph) are connected.

use crate::{Point, Weight};
use std::fmt::Debug;

/// The four cardinal moves, clockwise starting upwards
const CARDINAL_MOVES: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// The cardinal and diagonal moves, clockwise starting upwards
const KING_MOVES: [(isize, isize); 8] = [
	(0, -1),
	(1, -1),
	(1, 0),
	(1, 1),
	(0, 1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
];

/// The set of single-step moves a [`GridGraph`](crate::GridGraph) turns into Edges, together with
/// a Heuristic that matches those moves.
///
/// An implementation only describes the geometry. Whether a Tile can be entered, and what it
/// costs, is up to the `GridGraph`.
///
/// Provided implementations:
/// - [`ManhattanNeighborhood`]: up, down, left and right
/// - [`MooreNeighborhood`]: the same plus the 4 diagonals
pub trait Neighborhood: Clone + Debug {
	/// `(width, height)` of the Grid
	fn dimensions(&self) -> (usize, usize);

	/// The relative `(dx, dy)` offsets of a single step
	fn moves(&self) -> &[(isize, isize)];

	/// A lower bound for the number of steps from `point` to `goal`.
	///
	/// Multiplied by the cheapest Tile cost this is an admissible Heuristic. The `GridGraph`
	/// uses it as is, so it is admissible as long as no walkable Tile costs less than 1.
	fn heuristic(&self, point: Point, goal: Point) -> Weight;

	/// Checks if `point` lies within the Grid
	fn contains(&self, (x, y): Point) -> bool {
		let (width, height) = self.dimensions();
		x < width && y < height
	}

	/// Applies a single move to `point`. Returns `None` if that leaves the Grid.
	///
	/// ## Examples
	/// ```
	/// # use astar_solver::neighbors::{ManhattanNeighborhood, Neighborhood};
	/// let neighborhood = ManhattanNeighborhood::new(3, 3);
	///
	/// assert_eq!(neighborhood.step((1, 1), (1, 0)), Some((2, 1)));
	/// assert_eq!(neighborhood.step((2, 1), (1, 0)), None);
	/// assert_eq!(neighborhood.step((0, 0), (0, -1)), None);
	/// ```
	fn step(&self, (x, y): Point, (dx, dy): (isize, isize)) -> Option<Point> {
		let target = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
		self.contains(target).then_some(target)
	}

	/// All Points one move away from `point`, in the order of [`moves`](Neighborhood::moves)
	fn neighbors_of(&self, point: Point) -> Vec<Point> {
		self.moves()
			.iter()
			.filter_map(|&offset| self.step(point, offset))
			.collect()
	}
}

/// Moves along the 4 cardinal directions. The Heuristic is the
/// [Taxicab Distance](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// A Neighborhood on a `width` x `height` Grid
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	fn moves(&self) -> &[(isize, isize)] {
		&CARDINAL_MOVES
	}
	fn heuristic(&self, point: Point, goal: Point) -> Weight {
		(point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)) as Weight
	}
}

/// Moves along the 4 cardinal directions and the 4 diagonals, each at the same price. The
/// Heuristic is the [Chebyshev Distance](https://en.wikipedia.org/wiki/Chebyshev_distance).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// A Neighborhood on a `width` x `height` Grid
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	fn moves(&self) -> &[(isize, isize)] {
		&KING_MOVES
	}
	fn heuristic(&self, point: Point, goal: Point) -> Weight {
		point.0.abs_diff(goal.0).max(point.1.abs_diff(goal.1)) as Weight
	}
}

#[test]
fn test_manhattan_border() {
	let neighborhood = ManhattanNeighborhood::new(5, 3);
	assert_eq!(neighborhood.neighbors_of((0, 1)), vec![(0, 0), (1, 1), (0, 2)]);
	assert_eq!(neighborhood.neighbors_of((4, 2)), vec![(4, 1), (3, 2)]);
}

#[test]
fn test_moore_corner() {
	let neighborhood = MooreNeighborhood::new(4, 4);
	assert_eq!(neighborhood.neighbors_of((0, 0)), vec![(1, 0), (1, 1), (0, 1)]);
	assert_eq!(neighborhood.neighbors_of((2, 2)).len(), 8);
}

#[test]
fn test_single_tile_grid() {
	let neighborhood = MooreNeighborhood::new(1, 1);
	assert!(neighborhood.contains((0, 0)));
	assert!(neighborhood.neighbors_of((0, 0)).is_empty());
}

#[test]
fn test_heuristics() {
	let manhattan = ManhattanNeighborhood::new(10, 10);
	let moore = MooreNeighborhood::new(10, 10);
	assert_eq!(manhattan.heuristic((3, 1), (0, 5)), 7.0);
	assert_eq!(moore.heuristic((3, 1), (0, 5)), 4.0);
	assert_eq!(moore.heuristic((6, 6), (6, 6)), 0.0);
}

#[test]
fn test_heuristic_counts_steps() {
	// walking straight towards the goal lowers the Heuristic by exactly 1 per step
	let moore = MooreNeighborhood::new(10, 10);
	let goal = (9, 4);
	let mut point = (0, 0);
	while point != goal {
		let next = moore
			.neighbors_of(point)
			.into_iter()
			.min_by(|a, b| moore.heuristic(*a, goal).total_cmp(&moore.heuristic(*b, goal)))
			.unwrap();
		assert_eq!(moore.heuristic(point, goal) - 1.0, moore.heuristic(next, goal));
		point = next;
	}
}
