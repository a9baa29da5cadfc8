//! Complete binary tree builder

use super::node::TreeNode;
use crate::values::{self, Value, ValueRange, ValueSource};

/// Builds complete binary trees bottom-up
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build a complete binary tree of `depth` levels.
    ///
    /// Values are drawn from `source` leaves first, then each internal level
    /// from the bottom up, left to right within a level:
    ///
    /// ```text
    ///        6
    ///      4   5
    ///     0 1 2 3
    /// ```
    ///
    /// A non-positive depth gives `None`, as does a depth whose leaf row
    /// cannot be allocated.
    pub fn build<S: ValueSource>(depth: i32, source: &mut S) -> Option<TreeNode<S::Value>> {
        if depth <= 0 {
            tracing::debug!(depth, "no nodes for non-positive depth");
            return None;
        }

        let Some(leaf_count) = 1usize.checked_shl((depth - 1) as u32) else {
            tracing::warn!(depth, "depth too large to build");
            return None;
        };

        let mut row: Vec<TreeNode<S::Value>> = Vec::new();
        if let Err(err) = row.try_reserve_exact(leaf_count) {
            tracing::warn!(depth, leaf_count, %err, "depth too large to build");
            return None;
        }

        tracing::debug!(depth, leaf_count, "building complete tree");

        row.extend((0..leaf_count).map(|_| TreeNode::leaf(source.next_value())));

        while row.len() > 1 {
            let mut nodes = row.into_iter();
            let mut parents = Vec::with_capacity(nodes.len() / 2);
            while let (Some(left), Some(right)) = (nodes.next(), nodes.next()) {
                parents.push(TreeNode::new(source.next_value(), Some(left), Some(right)));
            }
            row = parents;
        }

        row.pop()
    }

    /// Build from supplied values, cycled, or from random values in `range`
    /// when none (or an empty list) are supplied.
    pub fn generate(
        depth: i32,
        values: Option<Vec<Value>>,
        range: ValueRange,
        seed: Option<u64>,
    ) -> Option<TreeNode<Value>> {
        let mut source = values::source_for(values, range, seed);
        Self::build(depth, &mut source)
    }
}
