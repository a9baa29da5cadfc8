//! Complete and lazily-growing binary trees.
//!
//! [`TreeBuilder`] assembles a complete tree of a given depth bottom-up from a
//! [`ValueSource`]. [`GrowingNode`] is the endless variant: it fills in a
//! missing child the first time the child is read. Both node types share the
//! same equality, containment and serialization, which only ever look at the
//! children a node actually stores.

pub mod cli;
pub mod config;
pub mod output;
pub mod tree;
pub mod values;

pub use config::{ConfigError, DepthRange, TreeConfig};
pub use output::{render_pretty, OutputError};
pub use tree::{Branches, GrowingNode, NodeAccess, Side, TreeBuilder, TreeError, TreeNode};
pub use values::{source_for, CycleValues, RandomValues, RangeError, Value, ValueRange, ValueSource};
