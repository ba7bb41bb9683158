//! Common traits for the priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: the contract shared by every queue in the crate
//! - [`AddressableQueue`]: adds handles and in-place priority improvement
//!
//! The array-backed [`ArrayHeap`](crate::binary::ArrayHeap) only implements the
//! base trait. Its elements have no stable identity, so the only way to honor a
//! priority change is a global [`update_priorities`](PriorityQueue::update_priorities).
//! The [`PairingHeap`](crate::pairing::PairingHeap) implements both.

use crate::compare::Compare;
use std::fmt;

/// Error type for handle-based updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new value is not strictly more extreme than the current one
    PriorityNotImproved,
    /// The handle is no longer valid (element was popped)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::PriorityNotImproved => {
                write!(f, "new value is not more extreme than the current value")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in a queue, used for in-place updates
///
/// Handles are plain copyable identifiers. They do not own the element; the
/// queue that issued them keeps ownership until the element is popped.
pub trait Handle: Clone + PartialEq + Eq + fmt::Debug {}

/// Base trait for priority queues ordered by a [`Compare`] predicate
///
/// The queue always yields its *most extreme* element first: the element `e`
/// for which `compare.less(e, x)` is false for every other stored `x`. With
/// the default [`Less`](crate::compare::Less) that is the greatest element.
///
/// # Example
///
/// ```rust
/// use pairing_pq::PriorityQueue;
/// use pairing_pq::binary::ArrayHeap;
///
/// let mut heap = ArrayHeap::new();
/// heap.push(5);
/// heap.push(3);
/// heap.push(8);
///
/// assert_eq!(heap.peek(), Some(&8));
/// assert_eq!(heap.pop(), Some(8));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<T>: Sized {
    /// The ordering predicate
    type Compare: Compare<T>;

    /// Creates an empty queue ordered by `compare`
    fn with_compare(compare: Self::Compare) -> Self;

    /// Creates an empty queue with the default predicate
    fn new() -> Self
    where
        Self::Compare: Default,
    {
        Self::with_compare(Self::Compare::default())
    }

    /// Builds a queue from all elements of `iter` in a single pass
    ///
    /// # Time Complexity
    /// O(n) for both implementations.
    fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: Self::Compare) -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for the array heap, O(1) for the pairing heap.
    fn push(&mut self, item: T);

    /// Returns the most extreme element without removing it
    ///
    /// The reference is read-only: mutating the top in place could silently
    /// break heap order.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the most extreme element
    ///
    /// # Time Complexity
    /// O(log n), amortized for the pairing heap.
    fn pop(&mut self) -> Option<T>;

    /// Restores heap order after the comparison-relevant state of stored
    /// elements changed outside the queue
    ///
    /// This is global: it does not need to know which elements changed.
    ///
    /// # Time Complexity
    /// O(n)
    fn update_priorities(&mut self);

    /// Moves all elements of `other` into this queue
    fn merge(&mut self, other: Self);

    /// Removes all elements
    fn clear(&mut self);

    /// Drains the queue, returning elements from most to least extreme
    fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }
}

/// Extended queue trait with handle-based priority improvement
///
/// # Example
///
/// ```rust
/// use pairing_pq::{AddressableQueue, PriorityQueue};
/// use pairing_pq::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// heap.push(5);
/// let handle = heap.push_with_handle(3);
/// heap.update(&handle, 9).unwrap();
/// assert_eq!(heap.peek(), Some(&9));
/// ```
pub trait AddressableQueue<T>: PriorityQueue<T> {
    /// The handle type for this queue
    type Handle: Handle;

    /// Inserts an element, returning a handle that stays valid until that
    /// element is popped
    fn push_with_handle(&mut self, item: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a strictly more extreme value
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element was already popped
    /// - [`HeapError::PriorityNotImproved`] if `new_item` is not strictly more
    ///   extreme than the current value; the queue is left unchanged
    fn update(&mut self, handle: &Self::Handle, new_item: T) -> Result<(), HeapError>;

    /// Returns the element behind `handle`, or `None` if it was popped
    fn get(&self, handle: &Self::Handle) -> Option<&T>;
}
