//! Binary tree node and the logic shared by every node flavour

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ptr;
use thiserror::Error;

use crate::output::{self, OutputError};

/// Which child slot of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A branch was read that points to nothing
    #[error("{side} child of {node} is null.")]
    NullChild { side: Side, node: String },
}

/// Read-only view of what a node actually stores.
///
/// Equality, containment, serialization and the textual representation are
/// written once against this trait. None of these methods may grow a node,
/// so a lazily-growing tree is always compared and rendered as it currently
/// exists in memory.
pub trait Branches: Sized {
    type Value;

    /// Type name used in the textual representation
    const NAME: &'static str;

    fn value(&self) -> &Self::Value;

    fn stored_left(&self) -> Option<&Self>;

    fn stored_right(&self) -> Option<&Self>;

    fn stored(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.stored_left(),
            Side::Right => self.stored_right(),
        }
    }

    /// True when neither child is stored
    fn is_leaf(&self) -> bool {
        self.stored_left().is_none() && self.stored_right().is_none()
    }

    /// True if `other` is a whole subtree of `self`, including `self` itself.
    ///
    /// An absent child means "not on that side"; the search never fails.
    fn contains(&self, other: &Self) -> bool
    where
        Self::Value: PartialEq,
    {
        if subtree_eq(other, self) {
            return true;
        }
        self.stored_left().is_some_and(|left| left.contains(other))
            || self.stored_right().is_some_and(|right| right.contains(other))
    }

    /// Nested mapping with `"value"` and, when stored, `"left"` and `"right"`
    fn to_map(&self) -> serde_json::Result<serde_json::Map<String, serde_json::Value>>
    where
        Self::Value: Serialize,
    {
        match serde_json::to_value(Subtree(self))? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde_json::Error::custom(format!(
                "node serialized to a non-object: {other}"
            ))),
        }
    }

    /// Indented, key-sorted rendering of [`Branches::to_map`]
    fn pretty(&self) -> Result<String, OutputError>
    where
        Self::Value: Serialize,
    {
        output::render_pretty(&Subtree(self))
    }
}

/// Child access that decides what happens when a slot is empty.
///
/// [`TreeNode`] reports the empty slot as [`TreeError::NullChild`];
/// a growing node fills it instead.
pub trait NodeAccess: Branches {
    fn left(&self) -> Result<&Self, TreeError>;

    fn right(&self) -> Result<&Self, TreeError>;

    fn child(&self, side: Side) -> Result<&Self, TreeError> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
}

/// Structural equality over stored children, with an identity fast path
pub(crate) fn subtree_eq<N>(a: &N, b: &N) -> bool
where
    N: Branches,
    N::Value: PartialEq,
{
    if ptr::eq(a, b) {
        return true;
    }
    a.value() == b.value()
        && a.is_leaf() == b.is_leaf()
        && slot_eq(a.stored_left(), b.stored_left())
        && slot_eq(a.stored_right(), b.stored_right())
}

fn slot_eq<N>(a: Option<&N>, b: Option<&N>) -> bool
where
    N: Branches,
    N::Value: PartialEq,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => subtree_eq(a, b),
        _ => false,
    }
}

/// Constructor-style rendering: `Name(value, left=..., right=...)`
pub(crate) fn write_repr<N, F>(node: &N, f: &mut fmt::Formatter<'_>, fmt_value: F) -> fmt::Result
where
    N: Branches,
    F: Fn(&N::Value, &mut fmt::Formatter<'_>) -> fmt::Result + Copy,
{
    write!(f, "{}(", N::NAME)?;
    fmt_value(node.value(), f)?;
    if let Some(left) = node.stored_left() {
        write!(f, ", left=")?;
        write_repr(left, f, fmt_value)?;
    }
    if let Some(right) = node.stored_right() {
        write!(f, ", right=")?;
        write_repr(right, f, fmt_value)?;
    }
    write!(f, ")")
}

/// `<repr at 0x...>`, naming a node in error messages
pub(crate) fn describe<N>(node: &N) -> String
where
    N: Branches,
    N::Value: fmt::Debug,
{
    struct Repr<'a, N>(&'a N);

    impl<N> fmt::Display for Repr<'_, N>
    where
        N: Branches,
        N::Value: fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_repr(self.0, f, fmt::Debug::fmt)
        }
    }

    format!("<{} at {:p}>", Repr(node), node)
}

/// Serializes any node as a map, skipping absent children.
pub(crate) struct Subtree<'a, N>(pub(crate) &'a N);

impl<N> Serialize for Subtree<'_, N>
where
    N: Branches,
    N::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let len = 1 + usize::from(node.stored_left().is_some())
            + usize::from(node.stored_right().is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("value", node.value())?;
        if let Some(left) = node.stored_left() {
            map.serialize_entry("left", &Subtree(left))?;
        }
        if let Some(right) = node.stored_right() {
            map.serialize_entry("right", &Subtree(right))?;
        }
        map.end()
    }
}

/// An immutable binary tree node.
///
/// Children are exclusively owned, so subtrees are never shared and cycles
/// cannot be built.
#[derive(Clone)]
pub struct TreeNode<T> {
    value: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }
}

impl<T> Branches for TreeNode<T> {
    type Value = T;

    const NAME: &'static str = "TreeNode";

    fn value(&self) -> &T {
        &self.value
    }

    fn stored_left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn stored_right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T: fmt::Debug> NodeAccess for TreeNode<T> {
    fn left(&self) -> Result<&Self, TreeError> {
        self.left.as_deref().ok_or_else(|| TreeError::NullChild {
            side: Side::Left,
            node: describe(self),
        })
    }

    fn right(&self) -> Result<&Self, TreeError> {
        self.right.as_deref().ok_or_else(|| TreeError::NullChild {
            side: Side::Right,
            node: describe(self),
        })
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        subtree_eq(self, other)
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(self, f, fmt::Display::fmt)
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(self, f, fmt::Debug::fmt)
    }
}

impl<T: Serialize> Serialize for TreeNode<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Subtree(self).serialize(serializer)
    }
}

impl<T> Drop for TreeNode<T> {
    // Free children from an explicit stack so deep trees cannot overflow
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
