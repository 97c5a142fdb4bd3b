#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the shortest Path through any weighted Graph using A*, with a Timeout.
//!
//! ## Introduction
//! [`AStarSolver`] runs a single best-first Search from a start Vertex to a goal Vertex. The
//! Search is bounded by a wall-clock Timeout, and always ends in one of three ways:
//! - [`SolverOutcome::Solved`]: the shortest Path was found
//! - [`SolverOutcome::Timeout`]: the Timeout ran out first
//! - [`SolverOutcome::Unsolvable`]: the goal cannot be reached from the start
//!
//! None of these is an Error. The Solver also reports how many Vertices it expanded and how
//! long it took.
//!
//! The Solver is generic over the Vertex type. Any type that can be compared, hashed and cloned
//! works, as long as the Graph implements [`AStarGraph`] for it. Two Graphs are included:
//! - [`AdjacencyGraph`]: an owned list of Edges per Vertex, with an optional Heuristic
//! - [`GridGraph`]: a Grid described by a cost function and a [`Neighborhood`](neighbors::Neighborhood)
//!
//! ## Examples
//! Searching a small Graph:
//! ```
//! use astar_solver::prelude::*;
//! use std::time::Duration;
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("home", "bakery", 4.0);
//! graph.add_edge("bakery", "office", 3.0);
//! graph.add_edge("home", "office", 9.0);
//!
//! let solver = AStarSolver::new(&graph, "home", "office", Duration::from_secs(1));
//!
//! assert_eq!(solver.outcome(), SolverOutcome::Solved);
//! assert_eq!(solver.solution(), &["home", "bakery", "office"]);
//! assert_eq!(solver.solution_weight(), 7.0);
//! ```
//!
//! ### Heuristics
//! A* only beats Dijkstra if it is given a good estimate of the remaining distance. The estimate
//! must never be larger than the real remaining Cost. The Solver does not check this: a
//! Heuristic that overestimates still produces a [`Solved`](SolverOutcome::Solved) result, but
//! the Path may not be the shortest one.
//! ```
//! use astar_solver::prelude::*;
//! use std::time::Duration;
//!
//! // Vertices are positions on a line
//! let mut graph = AdjacencyGraph::with_heuristic(|a: &i64, b: &i64| (a - b).abs() as f64);
//! for i in 0..100 {
//!     graph.add_undirected_edge(i, i + 1, 1.0);
//! }
//!
//! let solver = AStarSolver::new(&graph, 0, 100, Duration::from_secs(1));
//!
//! assert_eq!(solver.solution_weight(), 100.0);
//! // only the Vertices on the way are expanded
//! assert_eq!(solver.num_states_explored(), 100);
//! ```
//!
//! ### Configuration
//! [`AStarSolver::with_config`] takes a [`SolverConfig`] with more options than just the Timeout.
//! [`SolverConfig::UNBOUNDED`] never times out:
//! ```
//! # use astar_solver::prelude::*;
//! # let mut graph = AdjacencyGraph::new();
//! # graph.add_edge(1, 2, 1.0);
//! let solver = AStarSolver::with_config(
//!     &graph,
//!     1,
//!     2,
//!     SolverConfig {
//!         size_hint: 64,
//!         ..SolverConfig::UNBOUNDED
//!     },
//! );
//! assert!(solver.outcome().is_solved());
//! ```
//!
//! ### Custom Frontiers
//! The Frontier is any [`IndexedPriorityQueue`](queue::IndexedPriorityQueue); [`queue::MinHeap`]
//! is used by default. See [`AStarSolver::with_queue`].
//!
//! ## Logging
//! The Solver logs through the [`log`](https://docs.rs/log) facade: one `debug` line per
//! finished Search and one `trace` line per expanded Vertex. Install any logger to see them.

/// The Type used for Edge weights, Costs and Priorities
pub type Weight = f64;

/// A shorthand for Points on a Grid
pub type Point = (usize, usize);

mod path;
pub use self::path::Path;

pub mod graph;
pub use self::graph::{AStarGraph, AdjacencyGraph, WeightedEdge};

mod grid;
pub use self::grid::GridGraph;

pub mod neighbors;

pub mod queue;

mod solver;
#[cfg(feature = "parallel")]
pub use self::solver::solve_all;
pub use self::solver::{AStarSolver, ShortestPathsSolver, SolverConfig, SolverOutcome};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		graph::{AStarGraph, AdjacencyGraph, WeightedEdge},
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		queue::{IndexedPriorityQueue, MinHeap},
		AStarSolver, GridGraph, Path, ShortestPathsSolver, SolverConfig, SolverOutcome,
	};
}
