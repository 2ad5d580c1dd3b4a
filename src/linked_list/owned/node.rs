use alloc::boxed::Box;

/// An owning handle to a chain of nodes. `None` is the empty list.
pub type Head = Option<Box<IntNode>>;

/// A node in an owned singly linked list.
///
/// A node holds one integer value and exclusive ownership of its successor.
/// A detached node is a one-node list; any node acts as the head of the chain
/// starting at it.
#[derive(Debug)]
pub struct IntNode {
    pub(crate) value: i32,
    pub(crate) next: Head,
}

impl IntNode {
    /// Creates a detached node holding `value`, with no successor.
    pub fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    /// The value stored in this node.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The node after this one, or `None` at the end of the chain.
    #[inline]
    pub fn next(&self) -> Option<&IntNode> {
        self.next.as_deref()
    }

    /// Mutable access to the node after this one.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut IntNode> {
        self.next.as_deref_mut()
    }

    /// Detaches and returns the rest of the chain, leaving this node with no
    /// successor.
    #[inline]
    pub fn take_next(&mut self) -> Head {
        self.next.take()
    }

    /// Replaces this node's successor, returning the previous one so the
    /// caller can splice chains without losing nodes.
    #[inline]
    pub fn set_next(&mut self, next: Head) -> Head {
        core::mem::replace(&mut self.next, next)
    }
}

// The compiler-generated drop would recurse once per node and overflow the
// stack on a long chain, so teardown walks the chain iteratively.
impl Drop for IntNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
