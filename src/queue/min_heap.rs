use super::{check_priority, IndexedPriorityQueue, QueueError};
use crate::Weight;

use hashbrown::HashMap;
use slab::Slab;
use std::hash::Hash;

#[derive(Clone, Debug)]
struct Entry<T> {
	item: T,
	priority: Weight,
	/// index of this Entry in `MinHeap::heap`
	position: usize,
}

/// An array-backed binary Heap with a position Index, implementing [`IndexedPriorityQueue`].
///
/// The Entries live in a [`Slab`]; the Heap itself only shuffles Slab keys around, and every
/// Entry remembers its own position so that `update_priority` can find it in O(1) through the
/// Item Index.
///
/// ## Examples
/// ```
/// # use astar_solver::queue::{IndexedPriorityQueue, MinHeap};
/// let mut queue = MinHeap::new();
/// queue.insert('a', 5.0).unwrap();
/// queue.insert('b', 3.0).unwrap();
/// queue.update_priority(&'a', 1.0).unwrap();
///
/// assert_eq!(queue.extract_min(), Ok('a'));
/// assert_eq!(queue.extract_min(), Ok('b'));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
	entries: Slab<Entry<T>>,
	heap: Vec<usize>,
	index: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> MinHeap<T> {
	/// Creates an empty MinHeap
	pub fn new() -> MinHeap<T> {
		MinHeap {
			entries: Slab::new(),
			heap: Vec::new(),
			index: HashMap::new(),
		}
	}

	/// Creates an empty MinHeap with space for at least `capacity` Items
	pub fn with_capacity(capacity: usize) -> MinHeap<T> {
		MinHeap {
			entries: Slab::with_capacity(capacity),
			heap: Vec::with_capacity(capacity),
			index: HashMap::with_capacity(capacity),
		}
	}

	/// The current Priority of `item`, if it is queued
	pub fn priority(&self, item: &T) -> Option<Weight> {
		self.index.get(item).map(|&key| self.entries[key].priority)
	}

	fn less(&self, a: usize, b: usize) -> bool {
		self.entries[self.heap[a]].priority < self.entries[self.heap[b]].priority
	}

	fn swap(&mut self, a: usize, b: usize) {
		self.heap.swap(a, b);
		let (key_a, key_b) = (self.heap[a], self.heap[b]);
		self.entries[key_a].position = a;
		self.entries[key_b].position = b;
	}

	fn sift_up(&mut self, mut pos: usize) {
		while pos > 0 {
			let parent = (pos - 1) / 2;
			if !self.less(pos, parent) {
				break;
			}
			self.swap(pos, parent);
			pos = parent;
		}
	}

	fn sift_down(&mut self, mut pos: usize) {
		loop {
			let left = 2 * pos + 1;
			if left >= self.heap.len() {
				break;
			}
			let right = left + 1;
			let smallest = if right < self.heap.len() && self.less(right, left) {
				right
			} else {
				left
			};
			if !self.less(smallest, pos) {
				break;
			}
			self.swap(pos, smallest);
			pos = smallest;
		}
	}
}

impl<T: Clone + Eq + Hash> Default for MinHeap<T> {
	fn default() -> MinHeap<T> {
		MinHeap::new()
	}
}

impl<T: Clone + Eq + Hash> IndexedPriorityQueue<T> for MinHeap<T> {
	fn insert(&mut self, item: T, priority: Weight) -> Result<(), QueueError> {
		let priority = check_priority(priority)?;
		if self.index.contains_key(&item) {
			return Err(QueueError::DuplicateInsert);
		}
		let position = self.heap.len();
		let key = self.entries.insert(Entry {
			item: item.clone(),
			priority,
			position,
		});
		self.heap.push(key);
		self.index.insert(item, key);
		self.sift_up(position);
		Ok(())
	}

	fn peek_min(&self) -> Result<&T, QueueError> {
		self.heap
			.first()
			.map(|&key| &self.entries[key].item)
			.ok_or(QueueError::EmptyQueue)
	}

	fn extract_min(&mut self) -> Result<T, QueueError> {
		if self.heap.is_empty() {
			return Err(QueueError::EmptyQueue);
		}
		let last = self.heap.len() - 1;
		self.swap(0, last);
		let key = self.heap.pop().ok_or(QueueError::EmptyQueue)?;
		let entry = self.entries.remove(key);
		self.index.remove(&entry.item);
		if !self.heap.is_empty() {
			self.sift_down(0);
		}
		Ok(entry.item)
	}

	fn contains(&self, item: &T) -> bool {
		self.index.contains_key(item)
	}

	fn update_priority(&mut self, item: &T, priority: Weight) -> Result<(), QueueError> {
		let priority = check_priority(priority)?;
		let key = *self.index.get(item).ok_or(QueueError::MissingItem)?;
		let entry = &mut self.entries[key];
		let old = entry.priority;
		let position = entry.position;
		entry.priority = priority;
		if priority < old {
			self.sift_up(position);
		} else {
			self.sift_down(position);
		}
		Ok(())
	}

	fn len(&self) -> usize {
		self.heap.len()
	}
}
