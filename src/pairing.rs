//! Pairing Heap implementation
//!
//! A pairing heap is a single heap-ordered multiway tree with:
//! - O(1) insert and meld
//! - O(log n) amortized pop (two-pass pairing)
//! - o(log n) amortized priority improvement through a handle
//!
//! Nodes live in a [`SlotMap`] arena and refer to each other by key. Each node
//! stores its first `child`, its next `sibling`, and a `prev` back-link that
//! points at the parent when the node is a first child and at the left sibling
//! otherwise. That single back-link is enough to unlink any node in O(1).
//!
//! Because nodes never own one another, dropping or cloning the heap walks the
//! arena's flat storage and never recurses, however deep or long the tree is.
//!
//! A [`PairingHandle`] is the arena key of the node holding an element. Keys are
//! generational: once the element is popped the handle is reported as invalid
//! instead of aliasing whatever later reuses the slot.

use crate::compare::{Compare, Less};
use crate::traits::{AddressableQueue, Handle, HeapError, PriorityQueue};
use log::{debug, trace};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    struct NodeKey;
}

/// Handle to an element in a [`PairingHeap`]
///
/// Handles are tied to the heap that issued them and to clones of that heap.
/// Using one with an unrelated heap is not detected and addresses an
/// arbitrary element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    node: NodeKey,
}

impl Handle for PairingHandle {}

#[derive(Clone, Debug)]
struct Node<T> {
    item: T,
    child: Option<NodeKey>,
    sibling: Option<NodeKey>,
    prev: Option<NodeKey>, // parent if first child, else previous sibling
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Self {
            item,
            child: None,
            sibling: None,
            prev: None,
        }
    }
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use pairing_pq::pairing::PairingHeap;
/// use pairing_pq::{AddressableQueue, PriorityQueue};
///
/// let mut heap = PairingHeap::new();
/// heap.push(5);
/// let handle = heap.push_with_handle(3);
/// heap.push(8);
/// assert_eq!(heap.peek(), Some(&8));
///
/// heap.update(&handle, 9).unwrap();
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.pop(), Some(8));
/// ```
#[derive(Clone, Debug)]
pub struct PairingHeap<T, C = Less> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
    compare: C,
}

impl<T, C: Compare<T>> PriorityQueue<T> for PairingHeap<T, C> {
    type Compare = C;

    fn with_compare(compare: C) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            compare,
        }
    }

    fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self {
            nodes: SlotMap::with_capacity_and_key(iter.size_hint().0),
            root: None,
            compare,
        };
        for item in iter {
            heap.insert_node(item);
        }
        debug!("built pairing heap from {} elements", heap.len());
        heap
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, item: T) {
        self.insert_node(item);
    }

    fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].item)
    }

    fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        let node = self.nodes.remove(root)?;

        self.root = match node.child {
            Some(first) => Some(self.merge_pairs(first)),
            None => None,
        };

        Some(node.item)
    }

    fn update_priorities(&mut self) {
        debug!("rebuilding pairing heap of {} elements", self.nodes.len());

        // Relink every node in place so outstanding handles stay valid.
        let keys: Vec<NodeKey> = self.nodes.keys().collect();
        for node in self.nodes.values_mut() {
            node.child = None;
            node.sibling = None;
            node.prev = None;
        }

        self.root = None;
        for key in keys {
            self.root = self.meld(self.root, Some(key));
        }
    }

    fn merge(&mut self, mut other: Self) {
        debug!(
            "merging pairing heaps of {} and {} elements",
            self.nodes.len(),
            other.nodes.len()
        );

        let Some(other_root) = other.root.take() else {
            return;
        };

        // Move the other forest into our arena, keeping its shape, then
        // translate its links through the old-key -> new-key table.
        let mut remap: SecondaryMap<NodeKey, NodeKey> =
            SecondaryMap::with_capacity(other.nodes.len());
        let mut links = Vec::with_capacity(other.nodes.len());

        for (old_key, node) in other.nodes.drain() {
            let Node {
                item,
                child,
                sibling,
                prev,
            } = node;
            let new_key = self.nodes.insert(Node::new(item));
            remap.insert(old_key, new_key);
            links.push((new_key, child, sibling, prev));
        }

        let translate = |key: Option<NodeKey>| key.and_then(|k| remap.get(k).copied());
        for (new_key, child, sibling, prev) in links {
            let node = &mut self.nodes[new_key];
            node.child = translate(child);
            node.sibling = translate(sibling);
            node.prev = translate(prev);
        }

        let grafted_root = remap.get(other_root).copied();
        self.root = self.meld(self.root, grafted_root);
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<T, C: Compare<T>> AddressableQueue<T> for PairingHeap<T, C> {
    type Handle = PairingHandle;

    fn push_with_handle(&mut self, item: T) -> PairingHandle {
        PairingHandle {
            node: self.insert_node(item),
        }
    }

    fn update(&mut self, handle: &PairingHandle, new_item: T) -> Result<(), HeapError> {
        let key = handle.node;

        let Some(node) = self.nodes.get(key) else {
            trace!("update rejected: stale handle {:?}", key);
            return Err(HeapError::InvalidHandle);
        };

        if !self.compare.less(&node.item, &new_item) {
            trace!("update rejected: value for {:?} does not improve", key);
            return Err(HeapError::PriorityNotImproved);
        }

        if self.root == Some(key) {
            self.nodes[key].item = new_item;
            return Ok(());
        }

        // The node carries its whole subtree with it; everything below it
        // was already no more extreme than the old value.
        self.cut(key);
        self.nodes[key].item = new_item;
        self.root = self.meld(self.root, Some(key));

        Ok(())
    }

    fn get(&self, handle: &PairingHandle) -> Option<&T> {
        self.nodes.get(handle.node).map(|node| &node.item)
    }
}

impl<T: Ord> PairingHeap<T, Less> {
    /// Creates an empty max-first heap
    ///
    /// Pins the comparator to [`Less`] so `PairingHeap::new()` infers without a type
    /// annotation; the trait's `new` leaves `C` open.
    pub fn new() -> Self {
        Self::with_compare(Less)
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// Returns true if the element behind `handle` is still in the heap
    pub fn contains(&self, handle: &PairingHandle) -> bool {
        self.nodes.contains_key(handle.node)
    }

    /// Returns an iterator over the elements in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.item)
    }

    /// Allocates a one-node tree and melds it into the root
    fn insert_node(&mut self, item: T) -> NodeKey {
        let key = self.nodes.insert(Node::new(item));
        self.root = self.meld(self.root, Some(key));
        key
    }

    /// Melds two trees, either of which may be absent
    fn meld(&mut self, a: Option<NodeKey>, b: Option<NodeKey>) -> Option<NodeKey> {
        match (a, b) {
            (Some(a), Some(b)) => Some(self.link(a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Makes the less extreme of two roots the first child of the other
    ///
    /// Both `a` and `b` must be detached roots (no `prev`, no `sibling`).
    /// On ties `a` stays on top.
    fn link(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        let (winner, loser) = if self.compare.less(&self.nodes[a].item, &self.nodes[b].item) {
            (b, a)
        } else {
            (a, b)
        };

        let first_child = self.nodes[winner].child;
        let loser_node = &mut self.nodes[loser];
        loser_node.sibling = first_child;
        loser_node.prev = Some(winner);
        if let Some(child) = first_child {
            self.nodes[child].prev = Some(loser);
        }
        self.nodes[winner].child = Some(loser);

        winner
    }

    /// Combines a sibling list into one tree with the two-pass pairing rule
    fn merge_pairs(&mut self, first: NodeKey) -> NodeKey {
        // First pass: link siblings left to right in pairs
        let mut pairs: SmallVec<[NodeKey; 32]> = SmallVec::new();
        let mut current = Some(first);

        while let Some(a) = current {
            match self.detach(a) {
                Some(b) => {
                    current = self.detach(b);
                    pairs.push(self.link(a, b));
                }
                None => {
                    pairs.push(a);
                    current = None;
                }
            }
        }

        // Second pass: fold from the last pair back to the first
        let Some(mut result) = pairs.pop() else {
            return first;
        };
        while let Some(tree) = pairs.pop() {
            result = self.link(tree, result);
        }

        result
    }

    /// Clears a node's sibling-list links, returning its old next sibling
    fn detach(&mut self, key: NodeKey) -> Option<NodeKey> {
        let node = &mut self.nodes[key];
        node.prev = None;
        node.sibling.take()
    }

    /// Unlinks a non-root node (and its subtree) from its parent or left sibling
    fn cut(&mut self, key: NodeKey) {
        let node = &mut self.nodes[key];
        let sibling = node.sibling.take();
        let Some(prev) = node.prev.take() else {
            return;
        };

        let prev_node = &mut self.nodes[prev];
        if prev_node.child == Some(key) {
            prev_node.child = sibling;
        } else {
            prev_node.sibling = sibling;
        }

        if let Some(sibling) = sibling {
            self.nodes[sibling].prev = Some(prev);
        }
    }
}

impl<T, C: Compare<T> + Default> Default for PairingHeap<T, C> {
    fn default() -> Self {
        Self::with_compare(C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PairingHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_node(item);
        }
    }
}
