use crate::graph::{AStarGraph, WeightedEdge};
use crate::neighbors::Neighborhood;
use crate::{Point, Weight};

use std::fmt;

/// Turns a Grid into a Graph that can be searched with an [`AStarSolver`](crate::AStarSolver).
///
/// Every Tile is a Vertex. The Grid itself is never stored: `get_cost` is asked for the cost of
/// walking over the Tile at a Point, and the [`Neighborhood`] decides which Tiles are adjacent.
///
/// A negative cost marks a solid Tile, which has no Edges in or out. Leaving a Tile costs the
/// cost of that Tile, so the weight of an Edge `a -> b` is `get_cost(a)`.
///
/// The Heuristic is the step count of the Neighborhood, which is only admissible if all
/// walkable Tiles cost at least 1.
///
/// ## Examples
/// ```
/// use astar_solver::{prelude::*, Point};
/// use std::time::Duration;
///
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid: [[usize; 5]; 5] = [
///     [0, 2, 0, 0, 0],
///     [0, 2, 2, 2, 2],
///     [0, 1, 0, 0, 0],
///     [0, 1, 0, 2, 0],
///     [0, 0, 0, 2, 0],
/// ];
/// let (width, height) = (grid[0].len(), grid.len());
///
/// const COST_MAP: [isize; 3] = [1, 10, -1];
///
/// let graph = GridGraph::new(
///     ManhattanNeighborhood::new(width, height),
///     |(x, y): Point| COST_MAP[grid[y][x]],
/// );
///
/// let solver = AStarSolver::new(&graph, (0, 0), (4, 4), Duration::from_secs(1));
///
/// assert_eq!(solver.outcome(), SolverOutcome::Solved);
/// assert_eq!(solver.solution_weight(), 12.0);
/// ```
#[derive(Clone)]
pub struct GridGraph<N, F> {
	neighborhood: N,
	get_cost: F,
}

impl<N, F> GridGraph<N, F>
where
	N: Neighborhood,
	F: Fn(Point) -> isize,
{
	/// Creates a new GridGraph
	///
	/// ## Arguments
	/// - `neighborhood` - the Neighborhood to use. (See [`Neighborhood`])
	/// - `get_cost` - get the cost for walking over a Tile. (Cost < 0 => solid Tile)
	pub fn new(neighborhood: N, get_cost: F) -> GridGraph<N, F> {
		GridGraph {
			neighborhood,
			get_cost,
		}
	}

	/// Checks if the Tile at `point` is solid
	pub fn is_solid(&self, point: Point) -> bool {
		(self.get_cost)(point) < 0
	}
}

impl<N, F> AStarGraph<Point> for GridGraph<N, F>
where
	N: Neighborhood,
	F: Fn(Point) -> isize,
{
	fn neighbors(&self, point: &Point) -> Vec<WeightedEdge<Point>> {
		let cost = (self.get_cost)(*point);
		if cost < 0 {
			return Vec::new();
		}
		let from = *point;
		self.neighborhood
			.neighbors_of(from)
			.into_iter()
			.filter(|&other| !self.is_solid(other))
			.map(|other| WeightedEdge::new(from, other, cost as Weight))
			.collect()
	}

	fn estimated_distance_to_goal(&self, point: &Point, goal: &Point) -> Weight {
		self.neighborhood.heuristic(*point, *goal)
	}
}

impl<N: fmt::Debug, F> fmt::Debug for GridGraph<N, F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("GridGraph")
			.field("neighborhood", &self.neighborhood)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;
	use crate::Point;
	use std::time::Duration;

	// create and initialize Grid
	// 0 = empty, 1 = swamp, 2 = wall
	const GRID: [[usize; 5]; 5] = [
		[0, 2, 0, 0, 0],
		[0, 2, 2, 2, 2],
		[0, 1, 0, 0, 0],
		[0, 1, 0, 2, 0],
		[0, 0, 0, 2, 0],
	];
	const COST_MAP: [isize; 3] = [1, 10, -1];

	fn cost_fn(grid: &[[usize; 5]; 5]) -> impl '_ + Fn(Point) -> isize {
		move |(x, y)| COST_MAP[grid[y][x]]
	}

	#[test]
	fn unreachable_goal() {
		let graph = GridGraph::new(ManhattanNeighborhood::new(5, 5), cost_fn(&GRID));

		let solver = AStarSolver::new(&graph, (0, 0), (2, 0), Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Unsolvable);
	}

	#[test]
	fn basic() {
		let graph = GridGraph::new(ManhattanNeighborhood::new(5, 5), cost_fn(&GRID));

		let solver = AStarSolver::new(&graph, (0, 0), (4, 4), Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		assert_eq!(solver.solution_weight(), 12.0);
		#[rustfmt::skip]
		assert_eq!(
			solver.solution(),
			&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (2, 3), (2, 2), (3, 2), (4, 2), (4, 3), (4, 4)],
		);
	}

	#[test]
	fn moore_takes_diagonals() {
		let graph = GridGraph::new(MooreNeighborhood::new(5, 5), cost_fn(&GRID));

		let solver = AStarSolver::new(&graph, (0, 0), (4, 4), Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		// (0,0) (0,1) (0,2) (0,3) (1,4) (2,3) (3,2) (4,3) (4,4)
		assert_eq!(solver.solution_weight(), 8.0);
	}

	#[test]
	fn solid_tiles_have_no_edges() {
		let graph = GridGraph::new(ManhattanNeighborhood::new(5, 5), cost_fn(&GRID));

		assert!(graph.is_solid((1, 0)));
		assert!(graph.neighbors(&(1, 0)).is_empty());
		// (0, 0) borders the wall at (1, 0)
		assert_eq!(graph.neighbors(&(0, 0)).len(), 1);

		let solver = AStarSolver::new(&graph, (0, 0), (1, 0), Duration::from_secs(10));
		assert_eq!(solver.outcome(), SolverOutcome::Unsolvable);
	}

	#[test]
	fn heuristic_is_neighborhood_metric() {
		let graph = GridGraph::new(MooreNeighborhood::new(5, 5), cost_fn(&GRID));
		assert_eq!(graph.estimated_distance_to_goal(&(0, 0), &(4, 2)), 4.0);
	}
}
