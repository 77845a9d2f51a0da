use std::fmt::{self, Debug, Formatter};

use super::{Branch, TreeNode};
use crate::linked::LinkedList;
#[doc(inline)]
pub use crate::util::error::EmptyTree;

/// When a depth-first traversal visits a node relative to its subtrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    #[default]
    Preorder,
    /// Left subtree, then node, then right subtree. Visits values in ascending order.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

/// An unbalanced binary search tree of distinct values.
///
/// For every node, the left subtree holds strictly smaller values and the right subtree strictly
/// greater ones; inserting a duplicate is rejected rather than stored. No rebalancing is
/// performed, so sorted insertion degrades the tree into a linked list — `insert` and `contains`
/// are `O(height)`, not `O(log n)`.
///
/// There is no removal. The structure only ever grows.
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at the leaf position its ordering dictates. Returns true if a node was
    /// attached, or false (leaving the tree untouched) if an equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns true if an equal value is present in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.root.contains(value)
    }

    /// Returns the smallest value in the tree, or [`EmptyTree`] if there is none.
    pub fn min(&self) -> Result<&T, EmptyTree> {
        self.root.min().ok_or(EmptyTree)
    }

    /// Returns the largest value in the tree, or [`EmptyTree`] if there is none.
    pub fn max(&self) -> Result<&T, EmptyTree> {
        self.root.max().ok_or(EmptyTree)
    }

    /// Returns the root node, allowing read-only structural inspection.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.0.as_deref()
    }

    /// Visits every node exactly once, depth first, in the given `order`. Returns false without
    /// invoking `visit` if the tree is empty.
    pub fn depth_first<F>(&self, mut visit: F, order: TraversalOrder) -> bool
    where
        F: FnMut(&TreeNode<T>),
    {
        match self.root() {
            Some(root) => {
                root.walk_depth_first(&mut visit, order);
                true
            },
            None => false,
        }
    }

    /// Visits every node exactly once in level order, left to right within each level. Returns
    /// false without invoking `visit` if the tree is empty.
    pub fn breadth_first<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&TreeNode<T>),
    {
        let Some(root) = self.root() else {
            return false;
        };

        // The crate's own list serves as the FIFO queue.
        let mut queue = LinkedList::new();
        queue.add_to_tail(root);

        while let Ok(current) = queue.remove_head() {
            visit(current);
            if let Some(left) = current.left() {
                queue.add_to_tail(left);
            }
            if let Some(right) = current.right() {
                queue.add_to_tail(right);
            }
        }
        true
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinarySearchTree {{ nodes:\n{:?}\n, size: {} }}",
            self.root, self.len
        )
    }
}
