//! List-wide operations over a chain of nodes.
//!
//! Every function takes a caller-supplied handle and walks the chain from
//! there. Read-only operations borrow the chain as `Option<&IntNode>`;
//! restructuring operations consume a [`Head`] and return the possibly
//! changed head.
//!
//! Allocation goes through the global allocator, which aborts rather than
//! fails, so the constructors here are infallible. Everything else that looks
//! like a failure (empty list, value not found, empty input) is an ordinary
//! return value.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::{
    iter::Iter,
    node::{Head, IntNode},
};

/// Returns `head` unchanged. Identity accessor, kept for symmetry with
/// [`tail`].
pub fn head(head: Option<&IntNode>) -> Option<&IntNode> {
    head
}

/// Returns the last node of the chain starting at `head`, or `None` for the
/// empty list. O(n).
pub fn tail(head: Option<&IntNode>) -> Option<&IntNode> {
    Iter::new(head).last()
}

/// Counts the nodes reachable from `head`. O(n).
pub fn size(head: Option<&IntNode>) -> usize {
    Iter::new(head).count()
}

/// Returns the first node in traversal order whose value equals `value`, or
/// `None` when nothing matches. Later duplicates are not considered. O(n).
pub fn find(head: Option<&IntNode>, value: i32) -> Option<&IntNode> {
    Iter::new(head).find(|node| node.value() == value)
}

/// An iterator over the nodes of the chain starting at `head`.
pub fn iter(head: Option<&IntNode>) -> Iter<'_> {
    Iter::new(head)
}

/// Copies the chain's values into a vector, in traversal order.
///
/// The vector is independent of the list and owned by the caller; the empty
/// list yields an empty vector.
pub fn to_array(head: Option<&IntNode>) -> Vec<i32> {
    iter(head).map(IntNode::value).collect()
}

/// Creates a one-node list holding `value`.
pub fn create(value: i32) -> Head {
    Some(Box::new(IntNode::new(value)))
}

/// Releases every node reachable from `head`, front to back.
///
/// Safe to call on the empty list. Dropping the handle has the same effect;
/// this exists so teardown reads explicitly at call sites.
pub fn destroy(head: Head) {
    let mut current = head;
    while let Some(mut node) = current {
        current = node.take_next();
    }
}

/// Appends a node holding `value` after the current tail and returns the
/// head.
///
/// Appending to the empty list creates a one-node list, so the returned head
/// is the newly created node in that case and `head` otherwise.
pub fn append(mut head: Head, value: i32) -> Head {
    let mut slot = &mut head;
    while let Some(node) = slot {
        slot = &mut node.next;
    }
    *slot = create(value);
    head
}

/// Builds a chain from `values`, one node per element in order, the first
/// element becoming the head. Returns `None` for an empty slice.
pub fn from_array(values: &[i32]) -> Head {
    let mut head: Head = None;
    for &value in values.iter().rev() {
        let mut node = Box::new(IntNode::new(value));
        node.next = head;
        head = Some(node);
    }
    head
}

/// Removes the first node in traversal order whose value equals `value`,
/// releasing it, and returns the resulting head.
///
/// Removing the head node hands back its successor; removing the sole node,
/// or removing from the empty list, yields `None`. When nothing matches the
/// chain comes back unchanged. Later duplicates are untouched.
pub fn remove(mut head: Head, value: i32) -> Head {
    let mut slot = &mut head;
    loop {
        match slot {
            Some(node) if node.value == value => {
                let rest = node.take_next();
                *slot = rest;
                break;
            }
            Some(node) => slot = &mut node.next,
            None => break,
        }
    }
    head
}
