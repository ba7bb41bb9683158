//! Array-backed binary heap
//!
//! An implicit binary tree stored in a `Vec`: the root lives at index 0 and
//! the children of `i` at `2i + 1` and `2i + 2`. Sift-up and sift-down keep
//! every parent at least as extreme as its children.
//!
//! This heap has no per-element identity, so it only implements the base
//! [`PriorityQueue`] trait. If the ordering of stored elements changes, call
//! [`update_priorities`](PriorityQueue::update_priorities) to rebuild in O(n).
//! For in-place priority updates use [`PairingHeap`](crate::pairing::PairingHeap).
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `pop`               | O(log n)   |
//! | `peek`              | O(1)       |
//! | `from_iter_with`    | O(n)       |
//! | `update_priorities` | O(n)       |
//! | `merge`             | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::PriorityQueue;
//! use pairing_pq::binary::ArrayHeap;
//!
//! let mut heap: ArrayHeap<i32> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::compare::{Compare, Less};
use crate::traits::PriorityQueue;
use log::debug;

/// A binary heap over a caller-supplied ordering
#[derive(Debug, Clone)]
pub struct ArrayHeap<T, C = Less> {
    /// Elements in implicit-tree order
    data: Vec<T>,
    compare: C,
}

impl<T, C: Compare<T>> PriorityQueue<T> for ArrayHeap<T, C> {
    type Compare = C;

    fn with_compare(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        let mut heap = Self {
            data: iter.into_iter().collect(),
            compare,
        };
        debug!("building array heap from {} elements", heap.data.len());
        heap.rebuild();
        heap
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    fn update_priorities(&mut self) {
        debug!("rebuilding array heap of {} elements", self.data.len());
        self.rebuild();
    }

    fn merge(&mut self, other: Self) {
        debug!(
            "merging array heaps of {} and {} elements",
            self.data.len(),
            other.data.len()
        );
        // Appending then rebuilding is O(n + m), cheaper than m sift-ups
        // once the other heap is not tiny.
        self.data.extend(other.data);
        self.rebuild();
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> ArrayHeap<T, Less> {
    /// Creates an empty max-first heap
    ///
    /// Pins the comparator to [`Less`] so `ArrayHeap::new()` infers without a type
    /// annotation; the trait's `new` leaves `C` open.
    pub fn new() -> Self {
        Self::with_compare(Less)
    }
}

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Returns an iterator over the elements in unspecified order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in unspecified order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Restores the heap property bottom-up, from the last non-leaf to the root
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up while it is more extreme than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare.less(&self.data[parent], &self.data[index]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down toward its more extreme child
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;

            if right < len && self.compare.less(&self.data[left], &self.data[right]) {
                best = right;
            }

            if self.compare.less(&self.data[index], &self.data[best]) {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T> + Default> Default for ArrayHeap<T, C> {
    fn default() -> Self {
        Self::with_compare(C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for ArrayHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for ArrayHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
