use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::num::NonZero;

use super::{Iter, Node, NodePtr};
use crate::util::option::OptionExtension;
#[doc(inline)]
pub use crate::util::error::EmptyList;

/// Which end of the list a scan starts from, and therefore which links it follows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SearchFrom {
    #[default]
    Head,
    Tail,
}

/// A list with links in both directions, tracking both its head and its tail.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `head` / `tail` | `O(1)` |
/// | `add_to_head` / `add_to_tail` | `O(1)` |
/// | `remove_head` / `remove_tail` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `index_of` | `O(n)` |
///
/// Every node is owned by the list alone. The references returned by [`head`](LinkedList::head),
/// [`tail`](LinkedList::tail) and the iterators are immutable, so the chain can't be reshaped
/// from outside.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

/// A non-empty list always has a first and last node, and the length is carried as [`NonZero`] so
/// the 1 → 0 transition is a type-level event rather than an if.
pub(crate) struct ListContents<T> {
    pub len: NonZero<usize>,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values in the list.
    pub const fn size(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    /// Returns true if the list holds no values.
    pub const fn is_empty(&self) -> bool {
        match &self.state {
            Empty => true,
            Full { .. } => false,
        }
    }

    /// Adds `value` at the head of the list in `O(1)`.
    pub fn add_to_head(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.link_head(value),
        }
    }

    /// Adds `value` at the tail of the list in `O(1)`.
    pub fn add_to_tail(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.link_tail(value),
        }
    }

    /// Returns the value at the head of the list, or [`EmptyList`] if there is none.
    pub fn head(&self) -> Result<&T, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(contents) => Ok(contents.head.value()),
        }
    }

    /// Returns the value at the tail of the list, or [`EmptyList`] if there is none.
    pub fn tail(&self) -> Result<&T, EmptyList> {
        match &self.state {
            Empty => Err(EmptyList),
            Full(contents) => Ok(contents.tail.value()),
        }
    }

    /// Detaches the head node and returns its value, or [`EmptyList`] if there is none. Removing
    /// the only value empties the list entirely.
    pub fn remove_head(&mut self) -> Result<T, EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match NonZero::new(len.get() - 1) {
                    Some(new_len) => {
                        // SAFETY: The previous length was at least 2, so the removed head had a
                        // successor.
                        let new_head = unsafe { node.next.unreachable() };
                        *new_head.prev_mut() = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Detaches the tail node and returns its value, or [`EmptyList`] if there is none. Removing
    /// the only value empties the list entirely.
    pub fn remove_tail(&mut self) -> Result<T, EmptyList> {
        match &mut self.state {
            Empty => Err(EmptyList),
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match NonZero::new(len.get() - 1) {
                    Some(new_len) => {
                        // SAFETY: The previous length was at least 2, so the removed tail had a
                        // predecessor.
                        let new_tail = unsafe { node.prev.unreachable() };
                        *new_tail.next_mut() = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Ok(node.value)
            },
        }
    }

    /// Returns true if `value` occurs anywhere in the list, scanning forward from the head.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains_from(value, SearchFrom::Head)
    }

    /// Returns true if `value` occurs anywhere in the list. The scan starts at the end chosen by
    /// `from` and follows that direction's links; either way the whole list is searched.
    pub fn contains_from(&self, value: &T, from: SearchFrom) -> bool
    where
        T: PartialEq,
    {
        match &self.state {
            Empty => false,
            Full(contents) => {
                let mut curr = Some(match from {
                    SearchFrom::Head => contents.head,
                    SearchFrom::Tail => contents.tail,
                });

                while let Some(node) = curr {
                    if node.value() == value {
                        return true;
                    }
                    curr = match from {
                        SearchFrom::Head => *node.next(),
                        SearchFrom::Tail => *node.prev(),
                    };
                }
                false
            },
        }
    }

    /// Returns the zero-based position of the first occurrence of `value`, scanning from the
    /// head, or None if the list doesn't contain it.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns an iterator over the values in the list, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

#[cfg(test)]
impl<T> LinkedList<T> {
    /// Walks the whole chain asserting that every `next` link is mirrored by a `prev` link and
    /// that the forward walk terminates at the tracked tail.
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { head, tail, .. }) => {
                let mut curr = *head;
                while let Some(next) = *curr.next() {
                    assert!(*next.prev() == Some(curr));
                    curr = next;
                }
                assert!(*tail == curr);
            },
        }
    }
}

impl<T> ListContents<T> {
    pub(crate) fn link_head(&mut self, value: T) {
        self.len = self.len.checked_add(1).expect("Length overflow!");

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub(crate) fn link_tail(&mut self, value: T) {
        self.len = self.len.checked_add(1).expect("Length overflow!");

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub(crate) fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: NonZero::<usize>::MIN,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub(crate) fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter.into_iter() {
            list.add_to_tail(item);
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                let node = ptr.take_node();
                curr = node.next;
            }
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList {{ contents: ")?;
        f.debug_list().entries(self.iter()).finish()?;
        write!(f, ", size: {} }}", self.size())
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
