//! The Graph side of a Search.
//!
//! The Solver never owns or inspects a Graph directly. Everything it needs is provided through
//! the [`AStarGraph`] Trait: the outgoing Edges of a Vertex, and an estimate of how far a Vertex
//! is from the Goal.

use crate::Weight;

mod adjacency;
pub use self::adjacency::AdjacencyGraph;

/// A directed Edge from `from` to `to` with a non-negative `weight`.
///
/// Undirected Graphs are modeled by adding an Edge in each direction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<V> {
	/// the Vertex this Edge starts at
	pub from: V,
	/// the Vertex this Edge leads to
	pub to: V,
	/// the Cost of traversing this Edge
	pub weight: Weight,
}

impl<V> WeightedEdge<V> {
	/// Creates a new Edge
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use astar_solver::WeightedEdge;
	/// let edge = WeightedEdge::new('a', 'b', 1.5);
	///
	/// assert_eq!(edge.from, 'a');
	/// assert_eq!(edge.to, 'b');
	/// assert_eq!(edge.weight, 1.5);
	/// ```
	pub fn new(from: V, to: V, weight: Weight) -> WeightedEdge<V> {
		WeightedEdge { from, to, weight }
	}

	/// Returns the same Edge pointing the other way
	pub fn reversed(self) -> WeightedEdge<V> {
		WeightedEdge {
			from: self.to,
			to: self.from,
			weight: self.weight,
		}
	}
}

/// A weighted, directed Graph that can be searched with an [`AStarSolver`](crate::AStarSolver).
///
/// Vertices the Graph does not know about should simply return no Edges. The Solver will then
/// report such a Search as [`Unsolvable`](crate::SolverOutcome::Unsolvable) instead of failing.
pub trait AStarGraph<V> {
	/// All outgoing Edges of `vertex`.
	///
	/// Duplicate Edges are allowed. Each of them is relaxed on its own, which is harmless.
	/// Negative weights are not supported.
	fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V>>;

	/// Gives a Heuristic for how expensive it is to reach `goal` from `vertex`.
	///
	/// The returned value must never be larger than the actual Cost, otherwise the Paths found
	/// are no longer guaranteed to be the shortest ones. Returning 0 is always correct, but
	/// turns the Search into a plain Dijkstra.
	fn estimated_distance_to_goal(&self, vertex: &V, goal: &V) -> Weight;
}

impl<V, G: AStarGraph<V> + ?Sized> AStarGraph<V> for &G {
	fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V>> {
		(**self).neighbors(vertex)
	}
	fn estimated_distance_to_goal(&self, vertex: &V, goal: &V) -> Weight {
		(**self).estimated_distance_to_goal(vertex, goal)
	}
}
