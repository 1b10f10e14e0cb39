//! Min-priority queue backed by a binary heap
//!
//! The solver's frontier structure. Entries are (value, priority) pairs and
//! extraction always returns the entry with the numerically smallest
//! priority among those currently held. Single-threaded use only.

use crate::error::{Result, WaymarkError};
use crate::graph::types::Weight;

/// A (value, priority) pair held by the queue.
#[derive(Debug, Clone)]
pub struct QueueEntry<T> {
    pub value: T,
    pub priority: Weight,
}

/// Binary min-heap keyed by `Weight` priority.
///
/// Heap-order invariant: every parent's priority is <= its children's.
/// Duplicate priorities are allowed and `Weight::INFINITY` is an ordinary
/// key. Extraction order among equal priorities is unspecified.
///
/// 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
#[derive(Debug, Clone)]
pub struct MinQueue<T> {
    entries: Vec<QueueEntry<T>>,
}

impl<T> MinQueue<T> {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        MinQueue {
            entries: Vec::new(),
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current minimum-priority entry, without removing it.
    pub fn peek(&self) -> Option<&QueueEntry<T>> {
        self.entries.first()
    }

    /// Add an entry in O(log n): append, then swap with the parent while
    /// the priority is smaller than the parent's.
    pub fn insert(&mut self, value: T, priority: Weight) {
        self.entries.push(QueueEntry { value, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum-priority entry, or `None` when empty.
    ///
    /// The last entry moves to the root and sinks down: at each step it is
    /// compared against both children and swapped with the smaller
    /// qualifying child. O(log n).
    pub fn pop(&mut self) -> Option<QueueEntry<T>> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        entry
    }

    /// Like [`pop`](MinQueue::pop), but extraction from an empty queue is
    /// an explicit `EmptyQueue` error rather than an absent value.
    pub fn extract_min(&mut self) -> Result<QueueEntry<T>> {
        self.pop().ok_or(WaymarkError::EmptyQueue)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].priority < self.entries[parent].priority {
                self.entries.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
