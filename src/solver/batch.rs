use super::{AStarSolver, SolverConfig};
use crate::graph::AStarGraph;

use rayon::prelude::*;
use std::hash::Hash;

/// Runs one independent [`AStarSolver`] per `(start, goal)` pair on the rayon Thread Pool.
///
/// Only the Graph is shared between the Searches. Every Search gets its own Solver, tables and
/// Frontier, and the `timeout` of `config` applies to each Search on its own.
///
/// The returned Solvers are in the same order as `queries`.
///
/// ## Examples
/// ```
/// # use astar_solver::{solve_all, AdjacencyGraph, SolverConfig, SolverOutcome};
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge(1, 2, 1.0);
/// graph.add_edge(2, 3, 1.0);
///
/// let results = solve_all(&graph, &[(1, 3), (3, 1)], SolverConfig::default());
///
/// assert_eq!(results[0].outcome(), SolverOutcome::Solved);
/// assert_eq!(results[0].solution_weight(), 2.0);
/// assert_eq!(results[1].outcome(), SolverOutcome::Unsolvable);
/// ```
pub fn solve_all<V, G>(graph: &G, queries: &[(V, V)], config: SolverConfig) -> Vec<AStarSolver<V>>
where
	V: Clone + Eq + Hash + Send + Sync,
	G: AStarGraph<V> + Sync + ?Sized,
{
	log::debug!("solving {} queries in parallel", queries.len());
	queries
		.par_iter()
		.map(|(start, goal)| AStarSolver::with_config(graph, start.clone(), goal.clone(), config))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::AdjacencyGraph;
	use crate::SolverOutcome;

	#[test]
	fn matches_sequential_results() {
		let mut graph = AdjacencyGraph::new();
		for i in 0..50u32 {
			graph.add_undirected_edge(i, i + 1, 1.0 + (i % 3) as f64);
			graph.add_undirected_edge(i, i + 7, 4.0);
		}
		let queries: Vec<(u32, u32)> = (0..20).map(|i| (i, 50 - i)).collect();

		let parallel = solve_all(&graph, &queries, SolverConfig::UNBOUNDED);

		assert_eq!(parallel.len(), queries.len());
		for ((start, goal), result) in queries.iter().zip(&parallel) {
			let sequential = AStarSolver::with_config(&graph, *start, *goal, SolverConfig::UNBOUNDED);
			assert_eq!(result.outcome(), SolverOutcome::Solved);
			assert_eq!(result.solution_weight(), sequential.solution_weight());
			assert_eq!(result.solution().first(), Some(start));
			assert_eq!(result.solution().last(), Some(goal));
		}
	}

	#[test]
	fn empty_batch() {
		let graph: AdjacencyGraph<u8> = AdjacencyGraph::new();
		assert!(solve_all(&graph, &[], SolverConfig::default()).is_empty());
	}
}
