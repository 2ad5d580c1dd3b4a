use super::node::IntNode;

/// An iterator over the nodes of a chain.
pub struct Iter<'a> {
    current: Option<&'a IntNode>,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator starting at `head`.
    pub fn new(head: Option<&'a IntNode>) -> Self {
        Self { current: head }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a IntNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|node| {
            self.current = node.next();
        })
    }
}
