use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::TraversalOrder;

/// A child slot of the tree: either empty or an owned node.
pub(crate) struct Branch<T: Ord>(pub Option<Box<TreeNode<T>>>);

/// A node of a [`BinarySearchTree`](super::BinarySearchTree): a value and its two child branches.
///
/// Traversal callbacks are handed `&TreeNode` rather than just the value, so a caller can walk
/// and inspect subtree shapes, but not reshape them.
pub struct TreeNode<T: Ord> {
    pub(crate) value: T,
    pub(crate) left: Branch<T>,
    pub(crate) right: Branch<T>,
}

impl<T: Ord> TreeNode<T> {
    pub(crate) fn leaf(value: T) -> TreeNode<T> {
        TreeNode {
            value,
            left: Branch(None),
            right: Branch(None),
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.0.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.0.as_deref()
    }

    pub const fn has_left(&self) -> bool {
        self.left.0.is_some()
    }

    pub const fn has_right(&self) -> bool {
        self.right.0.is_some()
    }

    /// Recursive depth-first walk. The three orders only differ in when `visit` fires relative
    /// to the two child walks.
    pub(crate) fn walk_depth_first<F>(&self, visit: &mut F, order: TraversalOrder)
    where
        F: FnMut(&TreeNode<T>),
    {
        if order == TraversalOrder::Preorder {
            visit(self);
        }
        if let Some(left) = self.left() {
            left.walk_depth_first(visit, order);
        }
        if order == TraversalOrder::Inorder {
            visit(self);
        }
        if let Some(right) = self.right() {
            right.walk_depth_first(visit, order);
        }
        if order == TraversalOrder::Postorder {
            visit(self);
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Walks down to the correct empty slot and attaches `value` there. Returns false without
    /// mutating anything if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(TreeNode::leaf(value)));
                true
            },
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.contains(value),
                Ordering::Greater => node.right.contains(value),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    /// The leftmost value of the subtree, or None for an empty branch.
    pub fn min(&self) -> Option<&T> {
        let node = self.0.as_deref()?;
        match node.left.min() {
            Some(value) => Some(value),
            None => Some(&node.value),
        }
    }

    /// The rightmost value of the subtree, or None for an empty branch.
    pub fn max(&self) -> Option<&T> {
        let node = self.0.as_deref()?;
        match node.right.max() {
            Some(value) => Some(value),
            None => Some(&node.value),
        }
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
