//! Integration tests for tree building, comparison and rendering

mod common;

use bintree::{
    Branches, GrowingNode, NodeAccess, RandomValues, Side, TreeBuilder, TreeError, TreeNode,
    ValueRange,
};
use common::{count_nodes, height, leaf, node, numbered_tree, subtrees};
use std::ptr;

#[test]
fn test_depth_three_draw_order() {
    let tree = numbered_tree(3);

    let expected = node(6, Some(node(4, leaf(0), leaf(1))), Some(node(5, leaf(2), leaf(3))));
    assert_eq!(tree, expected);
    assert_eq!(
        tree.to_string(),
        "TreeNode(6, left=TreeNode(4, left=TreeNode(0), right=TreeNode(1)), \
         right=TreeNode(5, left=TreeNode(2), right=TreeNode(3)))"
    );
}

#[test]
fn test_depth_four_draw_order() {
    //            14
    //       12        13
    //     8    9   10    11
    //    0 1  2 3  4 5  6 7
    let tree = numbered_tree(4);

    assert_eq!(*tree.value(), 14);
    assert_eq!(*tree.left().unwrap().value(), 12);
    assert_eq!(*tree.right().unwrap().value(), 13);
    assert_eq!(*tree.right().unwrap().left().unwrap().value(), 10);
    assert_eq!(
        *tree.right().unwrap().left().unwrap().right().unwrap().value(),
        5
    );
}

#[test]
fn test_built_tree_is_complete() {
    for depth in 1..=8 {
        let tree = numbered_tree(depth);
        assert_eq!(count_nodes(&tree), (1usize << depth) - 1);
        assert_eq!(height(&tree), depth as usize);

        for subtree in subtrees(&tree) {
            let children = [subtree.stored_left(), subtree.stored_right()];
            assert!(
                children.iter().all(Option::is_some) || subtree.is_leaf(),
                "every internal node has two children"
            );
        }
    }
}

#[test]
fn test_non_positive_depth_builds_nothing() {
    assert!(TreeBuilder::generate(0, None, ValueRange::default(), None).is_none());
    assert!(TreeBuilder::generate(-3, Some(vec![1, 2]), ValueRange::default(), None).is_none());
}

#[test]
fn test_random_values_respect_range() {
    let range = ValueRange::new(10, 20).unwrap();
    let mut source = RandomValues::seeded(5, range);
    let tree = TreeBuilder::build(6, &mut source).unwrap();

    for subtree in subtrees(&tree) {
        assert!(range.contains(*subtree.value()));
    }
}

#[test]
fn test_default_random_tree() {
    let tree = TreeBuilder::generate(4, None, ValueRange::default(), None).unwrap();
    assert_eq!(count_nodes(&tree), 15);
    for subtree in subtrees(&tree) {
        assert!((1..100).contains(subtree.value()));
    }
}

#[test]
fn test_every_subtree_is_contained() {
    let tree = numbered_tree(4);

    for subtree in subtrees(&tree) {
        assert!(tree.contains(subtree));
        // A separately built copy matches as well
        assert!(tree.contains(&subtree.clone()));
    }
}

#[test]
fn test_fragments_are_not_contained() {
    let tree = numbered_tree(3);

    assert!(!tree.contains(&node(4, leaf(0), None)));
    assert!(!tree.contains(&node(4, None, None)));
    assert!(!tree.contains(&node(6, Some(node(4, leaf(0), leaf(1))), None)));
    assert!(!tree.contains(&node(99, None, None)));
    assert!(!tree.left().unwrap().contains(&tree));
}

#[test]
fn test_null_child_is_an_error() {
    let tree = numbered_tree(2);
    let leaf = tree.left().unwrap();

    let err = leaf.child(Side::Right).unwrap_err();
    let TreeError::NullChild { side, node } = &err;
    assert_eq!(*side, Side::Right);
    assert!(node.contains("TreeNode(0)"));
    assert!(err.to_string().starts_with("Right child of <TreeNode(0) at 0x"));
}

#[test]
fn test_to_map_mirrors_structure() {
    let tree = node(1, Some(node(2, None, leaf(4))), leaf(3));
    let map = tree.to_map().unwrap();

    assert_eq!(map["value"], 1);
    assert_eq!(map["left"]["value"], 2);
    assert_eq!(map["left"]["right"]["value"], 4);
    assert!(map["left"].get("left").is_none());
    assert_eq!(map["right"]["value"], 3);
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["left", "right", "value"]
    );
}

#[test]
fn test_pretty_rendering() {
    let tree = numbered_tree(2);

    let expected = r#"{
      "left" --> {
            "value" --> 0
      },
      "right" --> {
            "value" --> 1
      },
      "value" --> 2
}"#;
    assert_eq!(tree.pretty().unwrap(), expected);
}

#[test]
fn test_growing_node_identity() {
    let node = GrowingNode::new(50);

    let first = node.left().unwrap();
    let second = node.left().unwrap();
    assert!(ptr::eq(first, second));
    assert!((1..100).contains(first.value()));
}

#[test]
fn test_growing_nodes_compare_stored_state() {
    let a = GrowingNode::new(8);
    let b = GrowingNode::new(8);
    assert_eq!(a, b);

    a.left().unwrap();
    assert_ne!(a, b);
    assert!(a.stored_left().is_some());
    assert!(b.stored_left().is_none());
}

#[test]
fn test_growing_tree_deep_access() {
    let root = GrowingNode::random(RandomValues::seeded(1, ValueRange::default()));

    let mut current = &root;
    for step in 0..32 {
        current = if step % 2 == 0 {
            current.left().unwrap()
        } else {
            current.right().unwrap()
        };
    }

    assert_eq!(count_nodes(&root), 33);
    assert_eq!(height(&root), 33);
    assert!(root.contains(current));
}

#[test]
fn test_growing_snapshot_matches_built_tree() {
    let source = common::counting(100);
    let root = GrowingNode::seeded(6, source);
    // Draws 0, 1, 2, 3, 4, 5 in this order
    root.left().unwrap().left().unwrap();
    root.left().unwrap().right().unwrap();
    root.right().unwrap().left().unwrap();
    root.right().unwrap().right().unwrap();

    let expected = node(6, Some(node(0, leaf(1), leaf(2))), Some(node(3, leaf(4), leaf(5))));
    assert_eq!(root.snapshot(), expected);
    assert_ne!(root.snapshot(), numbered_tree(3));
}

#[test]
fn test_one_sided_node_is_not_leaf() {
    let tree: TreeNode<i64> = node(1, None, leaf(2));
    assert!(!tree.is_leaf());
    assert!(tree.left().is_err());
    assert!(tree.right().is_ok());
}
