//! Binary tree that grows missing children on first access

use serde::{Serialize, Serializer};
use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::node::{subtree_eq, write_repr, Branches, NodeAccess, Subtree, TreeError, TreeNode};
use crate::values::{RandomValues, Value, ValueSource};

/// A node whose empty child slots are filled the first time they are read.
///
/// Each slot changes from empty to filled at most once and keeps the same
/// child afterwards. Every node of one tree draws new values from the same
/// shared source.
///
/// The type is neither `Send` nor `Sync`: growth mutates through a shared
/// reference, so a tree stays on the thread that created it.
pub struct GrowingNode<S: ValueSource> {
    value: S::Value,
    left: OnceCell<Box<GrowingNode<S>>>,
    right: OnceCell<Box<GrowingNode<S>>>,
    source: Rc<RefCell<S>>,
}

impl GrowingNode<RandomValues> {
    /// Leaf whose children will hold random values in `[1, 100)`
    pub fn new(value: Value) -> Self {
        Self::seeded(value, RandomValues::default())
    }
}

impl<S: ValueSource> GrowingNode<S> {
    /// Leaf that takes ownership of a fresh source
    pub fn seeded(value: S::Value, source: S) -> Self {
        Self::with_source(value, Rc::new(RefCell::new(source)))
    }

    /// Leaf whose seed value is itself drawn from `source`
    pub fn random(mut source: S) -> Self {
        let value = source.next_value();
        Self::seeded(value, source)
    }

    /// Leaf sharing an existing source
    pub fn with_source(value: S::Value, source: Rc<RefCell<S>>) -> Self {
        Self::with_children(value, None, None, source)
    }

    /// Node with some slots already filled.
    ///
    /// The supplied children keep their own source handles.
    pub fn with_children(
        value: S::Value,
        left: Option<GrowingNode<S>>,
        right: Option<GrowingNode<S>>,
        source: Rc<RefCell<S>>,
    ) -> Self {
        Self {
            value,
            left: left.map(Box::new).map(OnceCell::from).unwrap_or_default(),
            right: right.map(Box::new).map(OnceCell::from).unwrap_or_default(),
            source,
        }
    }

    pub fn source(&self) -> &Rc<RefCell<S>> {
        &self.source
    }

    /// Copy of the part of the tree that exists so far
    pub fn snapshot(&self) -> TreeNode<S::Value>
    where
        S::Value: Clone,
    {
        TreeNode::new(
            self.value.clone(),
            self.stored_left().map(Self::snapshot),
            self.stored_right().map(Self::snapshot),
        )
    }

    fn grow(&self) -> Box<Self> {
        let value = self.source.borrow_mut().next_value();
        tracing::trace!("materialized child node");
        Box::new(Self::with_source(value, Rc::clone(&self.source)))
    }
}

impl<S: ValueSource> Branches for GrowingNode<S> {
    type Value = S::Value;

    const NAME: &'static str = "GrowingNode";

    fn value(&self) -> &S::Value {
        &self.value
    }

    fn stored_left(&self) -> Option<&Self> {
        self.left.get().map(|child| &**child)
    }

    fn stored_right(&self) -> Option<&Self> {
        self.right.get().map(|child| &**child)
    }
}

impl<S: ValueSource> NodeAccess for GrowingNode<S> {
    /// Never fails; an empty slot is filled from the shared source.
    ///
    /// Panics if the shared source is already mutably borrowed.
    fn left(&self) -> Result<&Self, TreeError> {
        Ok(self.left.get_or_init(|| self.grow()))
    }

    fn right(&self) -> Result<&Self, TreeError> {
        Ok(self.right.get_or_init(|| self.grow()))
    }
}

impl<S: ValueSource> Drop for GrowingNode<S> {
    // Free grown children from an explicit stack so deep trees cannot overflow
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<S> PartialEq for GrowingNode<S>
where
    S: ValueSource,
    S::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        subtree_eq(self, other)
    }
}

impl<S> fmt::Display for GrowingNode<S>
where
    S: ValueSource,
    S::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(self, f, fmt::Display::fmt)
    }
}

impl<S> fmt::Debug for GrowingNode<S>
where
    S: ValueSource,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_repr(self, f, fmt::Debug::fmt)
    }
}

impl<S> Serialize for GrowingNode<S>
where
    S: ValueSource,
    S::Value: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        Subtree(self).serialize(serializer)
    }
}
