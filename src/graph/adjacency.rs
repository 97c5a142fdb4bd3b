use super::{AStarGraph, WeightedEdge};
use crate::Weight;

use hashbrown::HashMap;
use std::fmt;
use std::hash::Hash;

fn zero_heuristic<V>(_: &V, _: &V) -> Weight {
	0.0
}

/// A simple owned Graph that stores the outgoing Edges of every Vertex in a list.
///
/// The Heuristic is supplied as a Function `(vertex, goal) -> Weight`. [`AdjacencyGraph::new`]
/// uses a Heuristic of 0 everywhere.
///
/// ## Examples
/// ```
/// # use astar_solver::{AdjacencyGraph, AStarGraph};
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge('a', 'b', 1.0);
/// graph.add_undirected_edge('b', 'c', 2.0);
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbors(&'b').len(), 1);
/// assert_eq!(graph.estimated_distance_to_goal(&'a', &'c'), 0.0);
/// ```
pub struct AdjacencyGraph<V, H = fn(&V, &V) -> Weight> {
	edges: HashMap<V, Vec<WeightedEdge<V>>>,
	heuristic: H,
}

impl<V: Clone + Eq + Hash> AdjacencyGraph<V> {
	/// Creates an empty Graph with a Heuristic of 0
	pub fn new() -> AdjacencyGraph<V> {
		let heuristic: fn(&V, &V) -> Weight = zero_heuristic;
		AdjacencyGraph::with_heuristic(heuristic)
	}
}

impl<V: Clone + Eq + Hash> Default for AdjacencyGraph<V> {
	fn default() -> AdjacencyGraph<V> {
		AdjacencyGraph::new()
	}
}

impl<V, H> AdjacencyGraph<V, H>
where
	V: Clone + Eq + Hash,
	H: Fn(&V, &V) -> Weight,
{
	/// Creates an empty Graph with the given Heuristic
	///
	/// ## Examples
	/// ```
	/// # use astar_solver::{AdjacencyGraph, AStarGraph};
	/// let graph = AdjacencyGraph::with_heuristic(|a: &i32, b: &i32| (a - b).abs() as f64);
	///
	/// assert_eq!(graph.estimated_distance_to_goal(&3, &7), 4.0);
	/// ```
	pub fn with_heuristic(heuristic: H) -> AdjacencyGraph<V, H> {
		AdjacencyGraph {
			edges: HashMap::new(),
			heuristic,
		}
	}

	/// Adds a Vertex without any Edges. Returns `false` if it was already present.
	pub fn add_vertex(&mut self, vertex: V) -> bool {
		if self.edges.contains_key(&vertex) {
			return false;
		}
		self.edges.insert(vertex, Vec::new());
		true
	}

	/// Adds a directed Edge. Both ends are added as Vertices if necessary.
	pub fn add_edge(&mut self, from: V, to: V, weight: Weight) {
		self.add_vertex(to.clone());
		self.edges
			.entry(from.clone())
			.or_default()
			.push(WeightedEdge::new(from, to, weight));
	}

	/// Adds an Edge in both directions
	pub fn add_undirected_edge(&mut self, a: V, b: V, weight: Weight) {
		self.add_edge(a.clone(), b.clone(), weight);
		self.add_edge(b, a, weight);
	}

	/// Checks if `vertex` is part of the Graph
	pub fn contains_vertex(&self, vertex: &V) -> bool {
		self.edges.contains_key(vertex)
	}

	/// An Iterator over all Vertices, in no particular order
	/// ## Examples
	/// ```
	/// # use astar_solver::AdjacencyGraph;
	/// let mut graph = AdjacencyGraph::new();
	/// graph.add_edge(1, 2, 1.0);
	/// graph.add_vertex(7);
	///
	/// let mut vertices: Vec<_> = graph.vertices().copied().collect();
	/// vertices.sort();
	/// assert_eq!(vertices, vec![1, 2, 7]);
	/// ```
	pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
		self.edges.keys()
	}

	/// The outgoing Edges of `vertex`, without copying them
	pub fn edges_from(&self, vertex: &V) -> &[WeightedEdge<V>] {
		self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
	}

	/// The number of Vertices
	pub fn len(&self) -> usize {
		self.edges.len()
	}

	/// `true` if the Graph has no Vertices
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// The number of directed Edges
	pub fn edge_count(&self) -> usize {
		self.edges.values().map(Vec::len).sum()
	}
}

impl<V, H> AStarGraph<V> for AdjacencyGraph<V, H>
where
	V: Clone + Eq + Hash,
	H: Fn(&V, &V) -> Weight,
{
	fn neighbors(&self, vertex: &V) -> Vec<WeightedEdge<V>> {
		self.edges_from(vertex).to_vec()
	}
	fn estimated_distance_to_goal(&self, vertex: &V, goal: &V) -> Weight {
		(self.heuristic)(vertex, goal)
	}
}

impl<V: fmt::Debug, H> fmt::Debug for AdjacencyGraph<V, H> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("AdjacencyGraph")
			.field("edges", &self.edges)
			.finish_non_exhaustive()
	}
}

impl<V: Clone, H: Clone> Clone for AdjacencyGraph<V, H> {
	fn clone(&self) -> Self {
		AdjacencyGraph {
			edges: self.edges.clone(),
			heuristic: self.heuristic.clone(),
		}
	}
}
