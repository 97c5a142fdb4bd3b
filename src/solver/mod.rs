use crate::graph::AStarGraph;
use crate::queue::{IndexedPriorityQueue, MinHeap, QueueError};
use crate::{Path, Weight};

use hashbrown::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

mod config;
pub use self::config::SolverConfig;

mod outcome;
pub use self::outcome::SolverOutcome;

#[cfg(feature = "parallel")]
mod batch;
#[cfg(feature = "parallel")]
pub use self::batch::solve_all;

/// The queries every Shortest-Path Solver answers once its Search is done.
pub trait ShortestPathsSolver<V> {
	/// How the Search ended
	fn outcome(&self) -> SolverOutcome;
	/// The Vertices from start to goal (both inclusive). Empty unless the Search was solved.
	fn solution(&self) -> &[V];
	/// The total Weight of the Solution, or 0 if there is none
	fn solution_weight(&self) -> Weight;
	/// How many Vertices were expanded (removed from the Frontier and had their Edges relaxed)
	fn num_states_explored(&self) -> usize;
	/// How long the Search took
	fn exploration_time(&self) -> Duration;
}

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Generic type Parameter `V` is supposed to uniquely identify a Vertex in the Graph.
/// This may be a Number, String, a Grid position, ... as long as it can be compared, hashed and cloned.
/// Note that it is advised to choose a cheap representation for `V`, since it will be cloned several times.
///
/// Creating the Solver runs the entire Search. The Solver never returns partial results: once
/// it exists, every query reports the same, final answer. To search again, create a new Solver.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use astar_solver::{AdjacencyGraph, AStarSolver, SolverOutcome};
/// # use std::time::Duration;
/// //   1     1
/// // A --> B --> D
/// //  \         ^
/// // 5 \       / 1
/// //    +-> C +
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge('A', 'B', 1.0);
/// graph.add_edge('B', 'D', 1.0);
/// graph.add_edge('A', 'C', 5.0);
/// graph.add_edge('C', 'D', 1.0);
///
/// let solver = AStarSolver::new(&graph, 'A', 'D', Duration::from_secs(10));
///
/// assert_eq!(solver.outcome(), SolverOutcome::Solved);
/// assert_eq!(solver.solution(), &['A', 'B', 'D']);
/// assert_eq!(solver.solution_weight(), 2.0);
/// assert_eq!(solver.num_states_explored(), 2);
/// ```
///
/// If the goal cannot be reached, the Solution is empty:
/// ```
/// # use astar_solver::{AdjacencyGraph, AStarSolver, SolverOutcome};
/// # use std::time::Duration;
/// # let mut graph = AdjacencyGraph::new();
/// # graph.add_edge('A', 'B', 1.0);
/// # graph.add_edge('B', 'D', 1.0);
/// # graph.add_edge('A', 'C', 5.0);
/// # graph.add_edge('C', 'D', 1.0);
/// graph.add_vertex('E');
///
/// let solver = AStarSolver::new(&graph, 'A', 'E', Duration::from_secs(10));
///
/// assert_eq!(solver.outcome(), SolverOutcome::Unsolvable);
/// assert!(solver.solution().is_empty());
/// assert_eq!(solver.solution_weight(), 0.0);
/// ```
///
/// ## Ties
/// When several Vertices in the Frontier share the same Priority, the order in which they are
/// expanded is whatever the [`IndexedPriorityQueue`] yields. If there are several shortest Paths,
/// the Solution may be any one of them; only its Weight is guaranteed.
///
/// ## Timeout
/// The Timeout is checked once per iteration, after checking for the goal and before expanding
/// the next Vertex. A goal that is reached exactly as the Timeout runs out is therefore still
/// reported as [`SolverOutcome::Solved`].
#[derive(Debug, Clone)]
pub struct AStarSolver<V> {
	outcome: SolverOutcome,
	solution: Vec<V>,
	solution_weight: Weight,
	num_states_explored: usize,
	exploration_time: Duration,
}

impl<V: Clone + Eq + Hash> AStarSolver<V> {
	/// Searches for the shortest Path from `start` to `goal`, giving up after `timeout`.
	pub fn new<G>(graph: &G, start: V, goal: V, timeout: Duration) -> AStarSolver<V>
	where
		G: AStarGraph<V> + ?Sized,
	{
		AStarSolver::with_config(graph, start, goal, SolverConfig::with_timeout(timeout))
	}

	/// Same as [`new`](AStarSolver::new), but with all the options of a [`SolverConfig`]
	pub fn with_config<G>(graph: &G, start: V, goal: V, config: SolverConfig) -> AStarSolver<V>
	where
		G: AStarGraph<V> + ?Sized,
	{
		let frontier = MinHeap::with_capacity(config.size_hint / 2);
		AStarSolver::with_queue(graph, start, goal, config, frontier)
	}

	/// Runs the Search with a custom Frontier.
	///
	/// `frontier` must be empty.
	///
	/// ## Panics
	/// If `frontier` is not empty, or if it reports an Error for an operation that is valid
	/// according to the [`IndexedPriorityQueue`] contract.
	pub fn with_queue<G, Q>(
		graph: &G,
		start: V,
		goal: V,
		config: SolverConfig,
		mut frontier: Q,
	) -> AStarSolver<V>
	where
		G: AStarGraph<V> + ?Sized,
		Q: IndexedPriorityQueue<V>,
	{
		let stopwatch = Instant::now();
		assert!(frontier.is_empty(), "the Frontier of a new Search must be empty");

		let mut dist_to: HashMap<V, Weight> = HashMap::with_capacity(config.size_hint);
		let mut edge_to: HashMap<V, V> = HashMap::with_capacity(config.size_hint);
		let mut num_states_explored = 0;

		dist_to.insert(start.clone(), 0.0);
		let priority = graph.estimated_distance_to_goal(&start, &goal);
		frontier_op(frontier.insert(start.clone(), priority));

		while !frontier.is_empty() {
			let current = frontier_op(frontier.peek_min()).clone();

			if current == goal {
				let solution_weight = dist_to[&current];
				let solution = reconstruct_path(&edge_to, &start, current);
				return AStarSolver::finish(
					SolverOutcome::Solved,
					solution,
					solution_weight,
					num_states_explored,
					stopwatch.elapsed(),
				);
			}
			if stopwatch.elapsed() >= config.timeout {
				return AStarSolver::finish(
					SolverOutcome::Timeout,
					Vec::new(),
					0.0,
					num_states_explored,
					config.timeout,
				);
			}

			frontier_op(frontier.extract_min());
			num_states_explored += 1;

			let current_dist = dist_to[&current];
			log::trace!(
				"expanding state #{} at distance {} ({} in frontier)",
				num_states_explored,
				current_dist,
				frontier.len()
			);

			for edge in graph.neighbors(&current) {
				let candidate = current_dist + edge.weight;
				if let Some(&known) = dist_to.get(&edge.to) {
					if candidate >= known {
						continue;
					}
				}
				let priority = candidate + graph.estimated_distance_to_goal(&edge.to, &goal);
				dist_to.insert(edge.to.clone(), candidate);
				edge_to.insert(edge.to.clone(), current.clone());

				if frontier.contains(&edge.to) {
					frontier_op(frontier.update_priority(&edge.to, priority));
				} else {
					frontier_op(frontier.insert(edge.to, priority));
				}
			}
		}

		AStarSolver::finish(
			SolverOutcome::Unsolvable,
			Vec::new(),
			0.0,
			num_states_explored,
			stopwatch.elapsed().min(config.timeout),
		)
	}

	fn finish(
		outcome: SolverOutcome,
		solution: Vec<V>,
		solution_weight: Weight,
		num_states_explored: usize,
		exploration_time: Duration,
	) -> AStarSolver<V> {
		log::debug!(
			"A* search {} after exploring {} states in {:?} (solution weight {})",
			outcome,
			num_states_explored,
			exploration_time,
			solution_weight
		);
		AStarSolver {
			outcome,
			solution,
			solution_weight,
			num_states_explored,
			exploration_time,
		}
	}
}

impl<V> AStarSolver<V> {
	/// How the Search ended
	pub fn outcome(&self) -> SolverOutcome {
		self.outcome
	}

	/// The Vertices from start to goal (both inclusive). Empty unless the outcome is
	/// [`SolverOutcome::Solved`].
	pub fn solution(&self) -> &[V] {
		&self.solution
	}

	/// The total Weight of the Solution, or 0 if there is none
	pub fn solution_weight(&self) -> Weight {
		self.solution_weight
	}

	/// How many Vertices were expanded. Vertices that were only added to the Frontier don't count.
	pub fn num_states_explored(&self) -> usize {
		self.num_states_explored
	}

	/// How long the Search took.
	///
	/// Exactly the Timeout if the outcome is [`SolverOutcome::Timeout`], and never more than the
	/// Timeout for [`SolverOutcome::Unsolvable`].
	pub fn exploration_time(&self) -> Duration {
		self.exploration_time
	}

	/// The Solution as a [`Path`], if the Search was solved
	pub fn path(&self) -> Option<Path<V>>
	where
		V: Clone,
	{
		self.outcome
			.is_solved()
			.then(|| Path::new(self.solution.clone(), self.solution_weight))
	}

	/// Consumes the Solver and returns the Solution as a [`Path`], if the Search was solved
	pub fn into_path(self) -> Option<Path<V>> {
		if self.outcome.is_solved() {
			Some(Path::new(self.solution, self.solution_weight))
		} else {
			None
		}
	}
}

impl<V> ShortestPathsSolver<V> for AStarSolver<V> {
	fn outcome(&self) -> SolverOutcome {
		self.outcome
	}
	fn solution(&self) -> &[V] {
		&self.solution
	}
	fn solution_weight(&self) -> Weight {
		self.solution_weight
	}
	fn num_states_explored(&self) -> usize {
		self.num_states_explored
	}
	fn exploration_time(&self) -> Duration {
		self.exploration_time
	}
}

#[track_caller]
fn frontier_op<T>(result: Result<T, QueueError>) -> T {
	match result {
		Ok(value) => value,
		Err(err) => panic!("Frontier invariant violated: {}", err),
	}
}

fn reconstruct_path<V: Clone + Eq + Hash>(edge_to: &HashMap<V, V>, start: &V, goal: V) -> Vec<V> {
	let mut steps = vec![];
	let mut current = goal;

	while current != *start {
		let prev = edge_to[&current].clone();
		steps.push(current);
		current = prev;
	}
	steps.push(current);
	steps.reverse();
	steps
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{AdjacencyGraph, WeightedEdge};

	fn diamond() -> AdjacencyGraph<char> {
		let mut graph = AdjacencyGraph::new();
		graph.add_edge('A', 'B', 1.0);
		graph.add_edge('B', 'D', 1.0);
		graph.add_edge('A', 'C', 5.0);
		graph.add_edge('C', 'D', 1.0);
		graph.add_vertex('E');
		graph
	}

	#[test]
	fn diamond_is_solved() {
		let solver = AStarSolver::new(&diamond(), 'A', 'D', Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		assert_eq!(solver.solution(), &['A', 'B', 'D']);
		assert_eq!(solver.solution_weight(), 2.0);
		assert_eq!(solver.num_states_explored(), 2);
		assert_eq!(solver.path(), Some(Path::new(vec!['A', 'B', 'D'], 2.0)));
	}

	#[test]
	fn isolated_goal_is_unsolvable() {
		let solver = AStarSolver::new(&diamond(), 'A', 'E', Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Unsolvable);
		assert!(solver.solution().is_empty());
		assert_eq!(solver.solution_weight(), 0.0);
		// A, B, C, D are all reachable
		assert_eq!(solver.num_states_explored(), 4);
		assert_eq!(solver.path(), None);
		assert!(solver.exploration_time() <= Duration::from_secs(10));
	}

	#[test]
	fn start_is_goal() {
		let solver = AStarSolver::new(&diamond(), 'C', 'C', Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		assert_eq!(solver.solution(), &['C']);
		assert_eq!(solver.solution_weight(), 0.0);
		assert_eq!(solver.num_states_explored(), 0);
	}

	#[test]
	fn start_is_goal_beats_zero_timeout() {
		let solver = AStarSolver::new(&diamond(), 'A', 'A', Duration::ZERO);

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		assert_eq!(solver.solution(), &['A']);
	}

	#[test]
	fn zero_timeout() {
		let solver = AStarSolver::new(&diamond(), 'A', 'D', Duration::ZERO);

		assert_eq!(solver.outcome(), SolverOutcome::Timeout);
		assert_eq!(solver.exploration_time(), Duration::ZERO);
		assert_eq!(solver.num_states_explored(), 0);
		assert!(solver.solution().is_empty());
		assert_eq!(solver.solution_weight(), 0.0);
		assert_eq!(solver.into_path(), None);
	}

	#[test]
	fn unknown_start() {
		let solver = AStarSolver::new(&diamond(), 'Z', 'D', Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Unsolvable);
		assert_eq!(solver.num_states_explored(), 1);
	}

	#[test]
	fn decrease_key_reroutes() {
		// S -> X is cheap, but X is first discovered through the expensive direct Edge
		//   S --10--> G
		//   S --1--> X --1--> G
		let mut graph = AdjacencyGraph::new();
		graph.add_edge("S", "G", 10.0);
		graph.add_edge("S", "X", 1.0);
		graph.add_edge("X", "G", 1.0);

		let solver = AStarSolver::new(&graph, "S", "G", Duration::from_secs(10));

		assert_eq!(solver.solution(), &["S", "X", "G"]);
		assert_eq!(solver.solution_weight(), 2.0);
	}

	#[test]
	fn heuristic_prunes_expansions() {
		// a line 0 - 1 - 2 - ... - 9 with a dead end branch at every Vertex
		let mut plain = AdjacencyGraph::new();
		let mut guided = AdjacencyGraph::with_heuristic(|a: &i32, b: &i32| {
			if *a < 0 {
				// dead ends are never closer than their parent
				(-a - b).abs() as Weight
			} else {
				(b - a).abs() as Weight
			}
		});
		for i in 0..9 {
			plain.add_edge(i, i + 1, 1.0);
			guided.add_edge(i, i + 1, 1.0);
			plain.add_edge(i, -(i + 100), 1.0);
			guided.add_edge(i, -(i + 100), 1.0);
		}

		let plain = AStarSolver::new(&plain, 0, 9, Duration::from_secs(10));
		let guided = AStarSolver::new(&guided, 0, 9, Duration::from_secs(10));

		assert_eq!(plain.solution_weight(), 9.0);
		assert_eq!(guided.solution_weight(), 9.0);
		assert_eq!(guided.num_states_explored(), 9);
		assert!(plain.num_states_explored() > guided.num_states_explored());
	}

	#[test]
	fn expanded_vertex_is_reopened_on_shorter_path() {
		// admissible but inconsistent: B looks far away, so A is expanded before the
		// cheaper route through B is known
		let mut graph = AdjacencyGraph::with_heuristic(|v: &char, _: &char| match v {
			'B' => 5.0,
			_ => 0.0,
		});
		graph.add_edge('S', 'A', 4.0);
		graph.add_edge('S', 'B', 1.0);
		graph.add_edge('B', 'A', 1.0);
		graph.add_edge('A', 'G', 5.0);

		let solver = AStarSolver::new(&graph, 'S', 'G', Duration::from_secs(10));

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		assert_eq!(solver.solution_weight(), 7.0);
		assert_eq!(solver.solution(), &['S', 'B', 'A', 'G']);
		// S, A, B, then A a second time
		assert_eq!(solver.num_states_explored(), 4);
	}

	#[test]
	fn duplicate_edges_are_harmless() {
		let mut graph = AdjacencyGraph::new();
		graph.add_edge(0, 1, 2.0);
		graph.add_edge(0, 1, 1.0);
		graph.add_edge(0, 1, 3.0);

		let solver = AStarSolver::new(&graph, 0, 1, Duration::from_secs(10));

		assert_eq!(solver.solution_weight(), 1.0);
		assert_eq!(solver.solution(), &[0, 1]);
	}

	#[derive(Debug)]
	struct OverfullQueue(MinHeap<char>);

	impl IndexedPriorityQueue<char> for OverfullQueue {
		fn insert(&mut self, item: char, priority: Weight) -> Result<(), QueueError> {
			self.0.insert(item, priority)
		}
		fn peek_min(&self) -> Result<&char, QueueError> {
			self.0.peek_min()
		}
		fn extract_min(&mut self) -> Result<char, QueueError> {
			self.0.extract_min()
		}
		fn contains(&self, _: &char) -> bool {
			// lie about membership so that the Solver inserts twice
			false
		}
		fn update_priority(&mut self, item: &char, priority: Weight) -> Result<(), QueueError> {
			self.0.update_priority(item, priority)
		}
		fn len(&self) -> usize {
			self.0.len()
		}
	}

	#[test]
	#[should_panic(expected = "Frontier invariant violated")]
	fn broken_queue_panics() {
		let mut graph = AdjacencyGraph::new();
		graph.add_edge('A', 'B', 5.0);
		graph.add_edge('A', 'C', 1.0);
		graph.add_edge('C', 'B', 1.0);
		graph.add_edge('C', 'D', 100.0);

		AStarSolver::with_queue(
			&graph,
			'A',
			'D',
			SolverConfig::UNBOUNDED,
			OverfullQueue(MinHeap::new()),
		);
	}

	#[test]
	fn solver_trait_object() {
		let solver = AStarSolver::new(&diamond(), 'A', 'D', Duration::from_secs(10));
		let solver: &dyn ShortestPathsSolver<char> = &solver;

		assert_eq!(solver.outcome(), SolverOutcome::Solved);
		assert_eq!(solver.solution().len(), 3);
		assert_eq!(solver.num_states_explored(), 2);
	}

	#[test]
	fn edges_from_other_vertices_are_relaxed_from_current() {
		// a Graph that hands out Edges with a wrong `from`; only `to` and `weight` matter
		struct Sloppy;
		impl AStarGraph<u8> for Sloppy {
			fn neighbors(&self, vertex: &u8) -> Vec<WeightedEdge<u8>> {
				if *vertex < 3 {
					vec![WeightedEdge::new(99, vertex + 1, 1.0)]
				} else {
					vec![]
				}
			}
			fn estimated_distance_to_goal(&self, _: &u8, _: &u8) -> Weight {
				0.0
			}
		}

		let solver = AStarSolver::new(&Sloppy, 0u8, 3u8, Duration::from_secs(10));
		assert_eq!(solver.solution(), &[0, 1, 2, 3]);
	}
}
