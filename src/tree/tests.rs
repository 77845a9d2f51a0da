#![cfg(test)]

use super::*;
use crate::util::error::EmptyTree;

fn tree_of(values: &[i32]) -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    for &value in values {
        assert!(tree.insert(value), "Test values should be distinct.");
    }
    tree
}

fn collect_depth_first(tree: &BinarySearchTree<i32>, order: TraversalOrder) -> Vec<i32> {
    let mut values = Vec::new();
    tree.depth_first(|node| values.push(*node.value()), order);
    values
}

#[test]
fn test_empty_tree() {
    let tree = BinarySearchTree::<i32>::new();
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(!tree.contains(&1));
    assert_eq!(tree.min(), Err(EmptyTree), "An empty tree has no minimum.");
    assert_eq!(tree.max(), Err(EmptyTree), "An empty tree has no maximum.");
    assert!(
        !tree.depth_first(|_| panic!("must not visit"), TraversalOrder::Preorder),
        "Depth-first traversal of an empty tree should return false without visiting."
    );
    assert!(
        !tree.breadth_first(|_| panic!("must not visit")),
        "Breadth-first traversal of an empty tree should return false without visiting."
    );
}

#[test]
fn test_insert_shapes_the_tree() {
    let tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.size(), 3);

    let root = tree.root().expect("tree is non-empty");
    assert_eq!(*root.value(), 2);
    assert_eq!(
        root.left().map(TreeNode::value),
        Some(&1),
        "The smaller value should hang off the left branch."
    );
    assert_eq!(
        root.right().map(TreeNode::value),
        Some(&3),
        "The larger value should hang off the right branch."
    );
    assert!(!root.left().expect("left child").has_left());
    assert!(!root.right().expect("right child").has_right());
}

#[test]
fn test_duplicates_are_rejected() {
    let mut tree = tree_of(&[5, 3, 8]);

    assert!(!tree.insert(5), "Inserting the root's value again should fail.");
    assert!(!tree.insert(3), "Inserting an inner value again should fail.");
    assert_eq!(tree.size(), 3, "A rejected insert must not change the size.");
    assert_eq!(
        collect_depth_first(&tree, TraversalOrder::Inorder),
        [3, 5, 8],
        "A rejected insert must not change the shape."
    );
}

#[test]
fn test_contains() {
    let tree = tree_of(&[20, 10, 15, 16, 35, 31]);
    assert!(tree.contains(&15));
    assert!(tree.contains(&35));
    assert!(!tree.contains(&40));
    assert!(!tree.contains(&1));
}

#[test]
fn test_min_max_ignore_insertion_order() {
    for values in [
        [3, 1, 2, 4],
        [1, 2, 3, 4],
        [4, 3, 2, 1],
        [2, 4, 1, 3],
    ] {
        let tree = tree_of(&values);
        assert_eq!(tree.min(), Ok(&1), "Min should not depend on insertion order.");
        assert_eq!(tree.max(), Ok(&4), "Max should not depend on insertion order.");
    }
}

#[test]
fn test_depth_first_orders() {
    let tree = tree_of(&[3, 1, 2, 4]);

    assert_eq!(
        TraversalOrder::default(),
        TraversalOrder::Preorder,
        "Preorder is the default traversal order."
    );
    assert_eq!(collect_depth_first(&tree, TraversalOrder::Preorder), [3, 1, 2, 4]);
    assert_eq!(collect_depth_first(&tree, TraversalOrder::Inorder), [1, 2, 3, 4]);
    assert_eq!(collect_depth_first(&tree, TraversalOrder::Postorder), [2, 1, 4, 3]);
}

#[test]
fn test_breadth_first_is_level_order() {
    let tree = tree_of(&[3, 1, 2, 4]);

    let mut values = Vec::new();
    assert!(tree.breadth_first(|node| values.push(*node.value())));
    assert_eq!(
        values,
        [3, 1, 4, 2],
        "Breadth-first traversal should go level by level, left to right."
    );
}

#[test]
fn test_inorder_is_sorted() {
    let tree = tree_of(&[50, 17, 72, 12, 23, 54, 76, 9, 14, 19, 67]);

    let inorder = collect_depth_first(&tree, TraversalOrder::Inorder);
    let mut sorted = inorder.clone();
    sorted.sort_unstable();
    assert_eq!(
        inorder, sorted,
        "Inorder traversal should always yield strictly ascending values."
    );
    assert_eq!(inorder.len(), tree.size());
}

#[test]
fn test_traversal_visits_nodes_not_values() {
    let tree = tree_of(&[2, 1, 3]);

    let mut leaves = 0;
    tree.depth_first(
        |node| {
            if !node.has_left() && !node.has_right() {
                leaves += 1;
            }
        },
        TraversalOrder::Preorder,
    );
    assert_eq!(leaves, 2, "The callback should see structure, not just values.");
}
