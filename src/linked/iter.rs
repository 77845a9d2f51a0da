use std::marker::PhantomData;
use std::mem;

use super::{Link, LinkedList, ListContents, ListState};

use ListState::*;

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: match &self.state {
                Empty => None,
                Full(ListContents { head, .. }) => Some(*head),
            },
            remaining: self.size(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over a list, head to tail.
pub struct Iter<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            self.curr = *ptr.next();
            self.remaining -= 1;
            // SAFETY: The iterator borrows the list for 'a, so no node can be freed or relinked
            // while this reference is live.
            unsafe { &ptr.as_non_null().as_ref().value }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = self.size();
        // Take the state so that the list's own Drop sees an empty list; the nodes now belong to
        // the iterator.
        IntoIter {
            curr: match mem::take(&mut self.state) {
                Empty => None,
                Full(ListContents { head, .. }) => Some(head),
            },
            remaining,
        }
    }
}

/// An owning iterator which frees each node as it yields its value.
pub struct IntoIter<T> {
    pub(crate) curr: Link<T>,
    pub(crate) remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr.map(|ptr| {
            let node = ptr.take_node();
            self.curr = node.next;
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Any nodes not yet yielded still have to be reclaimed.
        while self.next().is_some() {}
    }
}
