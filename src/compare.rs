//! Ordering predicates for the priority queues
//!
//! Both heaps in this crate are parametric over a [`Compare`] implementation
//! instead of requiring `T: Ord`. A predicate answers one question: is `a`
//! strictly *less extreme* than `b`? If so, `b` is popped before `a`.
//!
//! - [`Less`]: `a < b`, the default, giving max-first order like `BinaryHeap`
//! - [`Greater`]: `a > b`, giving min-first order (the usual choice for Dijkstra)
//! - [`FnCompare`]: any closure, for orderings that depend on external state
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::compare::{FnCompare, Greater};
//! use pairing_pq::binary::ArrayHeap;
//! use pairing_pq::PriorityQueue;
//!
//! let mut min_first = ArrayHeap::with_compare(Greater);
//! min_first.extend([4, 1, 3]);
//! assert_eq!(min_first.peek(), Some(&1));
//!
//! // Order strings by length, longest first
//! let by_len = FnCompare(|a: &&str, b: &&str| a.len() < b.len());
//! let mut heap = ArrayHeap::from_iter_with(["ab", "abcd", "a"], by_len);
//! assert_eq!(heap.pop(), Some("abcd"));
//! ```

/// A strict weak ordering over elements of type `T`
///
/// `less(a, b)` returns true when `a` is strictly less extreme than `b`, i.e.
/// `b` must leave the queue first. The predicate must stay consistent for as
/// long as the compared elements are stored in a queue; if it changes, call
/// [`update_priorities`](crate::PriorityQueue::update_priorities).
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is strictly less extreme than `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural ordering: greater elements are popped first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reversed ordering: smaller elements are popped first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` into a [`Compare`]
///
/// The closure has the same meaning as [`Compare::less`].
#[derive(Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> std::fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnCompare").finish_non_exhaustive()
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (**self).less(a, b)
    }
}
