//! Indexed Priority Queues used as the Frontier of a Search.
//!
//! The [`AStarSolver`](crate::AStarSolver) only talks to its Frontier through the
//! [`IndexedPriorityQueue`] Trait, so any conforming implementation can be plugged in using
//! [`AStarSolver::with_queue`](crate::AStarSolver::with_queue). [`MinHeap`] is the default.

use crate::Weight;

mod min_heap;
pub use self::min_heap::MinHeap;

/// The Errors an [`IndexedPriorityQueue`] can signal.
///
/// None of these can occur during a regular Search: the Solver checks emptiness before
/// peeking and membership before inserting. If one reaches the Solver anyway, it is treated
/// as a broken invariant and the Solver panics.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum QueueError {
	/// `peek_min` or `extract_min` was called on an empty Queue
	#[error("the queue is empty")]
	EmptyQueue,
	/// `insert` was called with an Item that is already in the Queue
	#[error("the item is already in the queue")]
	DuplicateInsert,
	/// `update_priority` was called with an Item that is not in the Queue
	#[error("the item is not in the queue")]
	MissingItem,
	/// a Priority that cannot be ordered (NaN) was supplied
	#[error("invalid priority: {0}")]
	InvalidPriority(Weight),
}

/// A min-priority Queue over a set of distinct Items that allows changing the Priority of an
/// Item that is already queued.
///
/// Items with equal Priority come out in whatever order the implementation yields. No
/// stability is guaranteed.
pub trait IndexedPriorityQueue<T> {
	/// Adds `item` with the given `priority`.
	///
	/// Fails with [`QueueError::DuplicateInsert`] if `item` is already present.
	fn insert(&mut self, item: T, priority: Weight) -> Result<(), QueueError>;

	/// Returns the Item with the lowest Priority without removing it.
	fn peek_min(&self) -> Result<&T, QueueError>;

	/// Removes and returns the Item with the lowest Priority.
	fn extract_min(&mut self) -> Result<T, QueueError>;

	/// Checks if `item` is currently queued.
	fn contains(&self, item: &T) -> bool;

	/// Sets the Priority of a queued Item to `priority`. The new Priority may be lower or higher
	/// than the old one.
	///
	/// Fails with [`QueueError::MissingItem`] if `item` is not present.
	fn update_priority(&mut self, item: &T, priority: Weight) -> Result<(), QueueError>;

	/// The number of queued Items
	fn len(&self) -> usize;

	/// `true` if no Items are queued
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

pub(crate) fn check_priority(priority: Weight) -> Result<Weight, QueueError> {
	if priority.is_nan() {
		Err(QueueError::InvalidPriority(priority))
	} else {
		Ok(priority)
	}
}
