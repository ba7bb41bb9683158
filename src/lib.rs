//! Priority queues over a caller-supplied ordering
//!
//! This crate provides two interchangeable priority queues behind one contract,
//! [`PriorityQueue`]:
//!
//! - [`ArrayHeap`](binary::ArrayHeap): an implicit binary heap in a `Vec`.
//!   Compact and fast, but its elements have no identity, so priority changes
//!   can only be honored by a global rebuild.
//! - [`PairingHeap`](pairing::PairingHeap): a pairing heap whose nodes live in
//!   an arena. It additionally implements [`AddressableQueue`], handing out a
//!   stable handle per element so a caller can improve that element's priority
//!   in place.
//!
//! Both are ordered by a [`Compare`](compare::Compare) predicate. The default,
//! [`Less`](compare::Less), pops the greatest element first.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::pairing::PairingHeap;
//! use pairing_pq::{AddressableQueue, PriorityQueue};
//!
//! let mut heap = PairingHeap::new();
//! for value in [5, 3, 8, 1] {
//!     heap.push(value);
//! }
//! assert_eq!(heap.peek(), Some(&8));
//! heap.pop();
//! assert_eq!(heap.peek(), Some(&5));
//!
//! let handle = heap.push_with_handle(3);
//! heap.update(&handle, 9).unwrap();
//! assert_eq!(heap.peek(), Some(&9));
//! ```

pub mod binary;
pub mod compare;
pub mod pairing;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{AddressableQueue, HeapError, PriorityQueue};
