use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// An owning handle to a heap-allocated list node.
///
/// The handle itself is a copyable raw pointer; exclusive ownership is a convention upheld by the
/// list, which allocates every node it links in and reclaims each one exactly once.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        // SAFETY: Box::into_raw never returns null.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    /// Reclaims the heap allocation and returns the node by value.
    pub(crate) fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was produced by Box::into_raw in from_node, and the owning list
        // passes each node to take_node at most once.
        *unsafe { Box::from_raw(self.0.as_ptr()) }
    }

    pub(crate) fn value(&self) -> &T {
        // SAFETY: A node stays allocated while any handle to it is reachable from its list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub(crate) fn prev(&self) -> &Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    pub(crate) fn prev_mut(&self) -> &mut Link<T> {
        // SAFETY: As for value. The list never holds two live references to one link.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub(crate) fn next(&self) -> &Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub(crate) fn next_mut(&self) -> &mut Link<T> {
        // SAFETY: As for prev_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub(crate) const fn as_non_null(self) -> NonNull<Node<T>> {
        self.0
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}
