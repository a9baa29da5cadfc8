//! Common test utilities

#![allow(dead_code)]

use bintree::{Branches, CycleValues, TreeBuilder, TreeNode};

/// Source yielding 0, 1, 2, ... up to `len - 1`, then repeating
pub fn counting(len: i64) -> CycleValues<i64> {
    CycleValues::new((0..len).collect()).expect("non-empty sequence")
}

/// Build a tree whose node values are the order in which they were drawn
pub fn numbered_tree(depth: i32) -> TreeNode<i64> {
    let nodes = (1i64 << depth) - 1;
    TreeBuilder::build(depth, &mut counting(nodes)).expect("positive depth")
}

/// Shorthand for a node with two optional children
pub fn node(value: i64, left: Option<TreeNode<i64>>, right: Option<TreeNode<i64>>) -> TreeNode<i64> {
    TreeNode::new(value, left, right)
}

pub fn leaf(value: i64) -> Option<TreeNode<i64>> {
    Some(TreeNode::leaf(value))
}

/// Number of stored nodes
pub fn count_nodes<N: Branches>(tree: &N) -> usize {
    1 + tree.stored_left().map_or(0, count_nodes) + tree.stored_right().map_or(0, count_nodes)
}

/// Longest root-to-leaf path, counted in nodes
pub fn height<N: Branches>(tree: &N) -> usize {
    1 + tree
        .stored_left()
        .map_or(0, height)
        .max(tree.stored_right().map_or(0, height))
}

/// Every stored subtree, preorder
pub fn subtrees<N: Branches>(tree: &N) -> Vec<&N> {
    let mut out = vec![tree];
    if let Some(left) = tree.stored_left() {
        out.extend(subtrees(left));
    }
    if let Some(right) = tree.stored_right() {
        out.extend(subtrees(right));
    }
    out
}
