use crate::Weight;

/// A Path found by a Solver
///
/// Stores the sequence of Vertices from the start to the goal (both inclusive) in `path` and the
/// total Weight of traversing these Vertices in `cost`.
/// Note that the individual weights of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V> {
	/// the Path
	pub path: Vec<V>,
	/// the total Cost of the Path
	pub cost: Weight,
}

impl<V> Path<V> {
	/// creates a new Path with the given sequence of Vertices and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use astar_solver::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 4.5);
	/// ```
	pub fn new(path: Vec<V>, cost: Weight) -> Path<V> {
		Path { path, cost }
	}

	/// The first Vertex of the Path
	pub fn start(&self) -> Option<&V> {
		self.path.first()
	}

	/// The last Vertex of the Path
	pub fn goal(&self) -> Option<&V> {
		self.path.last()
	}

	/// The number of steps (Edges) in the Path
	/// ## Examples
	/// ```
	/// # use astar_solver::Path;
	/// assert_eq!(Path::new(vec!['a', 'b', 'c'], 2.0).steps(), 2);
	/// assert_eq!(Path::new(vec!['a'], 0.0).steps(), 0);
	/// ```
	pub fn steps(&self) -> usize {
		self.path.len().saturating_sub(1)
	}
}

use std::ops::{Deref, Index};

impl<V> Index<usize> for Path<V> {
	type Output = V;
	fn index(&self, index: usize) -> &V {
		&self.path[index]
	}
}

impl<V> Deref for Path<V> {
	type Target = [V];
	fn deref(&self) -> &[V] {
		&self.path
	}
}

/// Drops the Cost and keeps the Vertices
///
/// ```
/// # use astar_solver::Path;
/// let vertices: Vec<char> = Path::new(vec!['a', 'b'], 1.0).into();
/// assert_eq!(vertices, vec!['a', 'b']);
/// ```
impl<V> From<Path<V>> for Vec<V> {
	fn from(path: Path<V>) -> Vec<V> {
		path.path
	}
}

use std::cmp::Ordering;

impl<V: PartialEq> PartialOrd for Path<V> {
	fn partial_cmp(&self, other: &Path<V>) -> Option<Ordering> {
		self.cost.partial_cmp(&other.cost)
	}
}

use std::fmt;
impl<V: fmt::Display> fmt::Display for Path<V> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn path_index() {
		let path = Path::new(vec![4, 2, 0], 42.0);

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
		assert_eq!(path.start(), Some(&4));
		assert_eq!(path.goal(), Some(&0));
	}

	#[test]
	fn path_display() {
		let path = Path::new(vec!['A', 'B', 'D'], 2.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 2]: A -> B -> D");
	}

	#[test]
	fn path_display_fractional() {
		let path = Path::new(vec![1, 2], 0.5);

		assert_eq!(&format!("{}", path), "Path[Cost = 0.5]: 1 -> 2");
	}

	#[test]
	fn path_display_empty() {
		let path = Path::new(Vec::<i32>::new(), 0.0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn path_ordering_by_cost() {
		let short = Path::new(vec![1, 2], 1.0);
		let long = Path::new(vec![1, 3, 2], 7.0);

		assert!(short < long);
	}
}
