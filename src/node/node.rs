use std::fmt::{self, Debug, Formatter};

/// A cell holding one value and owned links to an optional `next` and `prev` neighbour.
///
/// Links are owned [`Box`]es, so attaching a node consumes it and detaching one hands it back:
/// relinking is an explicit ownership transfer, never an alias. Setting a link that is already
/// occupied drops the previous chain.
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
    prev: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a new cell with both links absent.
    pub const fn new(value: T) -> Node<T> {
        Node {
            value,
            next: None,
            prev: None,
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the cell, discarding both links.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Links `node` as this cell's `next` neighbour, replacing (and dropping) any previous link.
    pub fn set_next(&mut self, node: Node<T>) {
        self.next = Some(Box::new(node));
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Detaches and returns the `next` neighbour, or None if there wasn't one.
    pub fn take_next(&mut self) -> Option<Node<T>> {
        self.next.take().map(|node| *node)
    }

    /// Links `node` as this cell's `prev` neighbour, replacing (and dropping) any previous link.
    pub fn set_prev(&mut self, node: Node<T>) {
        self.prev = Some(Box::new(node));
    }

    pub fn prev(&self) -> Option<&Node<T>> {
        self.prev.as_deref()
    }

    pub fn prev_mut(&mut self) -> Option<&mut Node<T>> {
        self.prev.as_deref_mut()
    }

    pub const fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Detaches and returns the `prev` neighbour, or None if there wasn't one.
    pub fn take_prev(&mut self) -> Option<Node<T>> {
        self.prev.take().map(|node| *node)
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("next", &self.next)
            .field("prev", &self.prev)
            .finish()
    }
}
