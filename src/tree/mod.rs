//! Tree construction and node types

mod builder;
mod growing;
mod node;

pub use builder::TreeBuilder;
pub use growing::GrowingNode;
pub use node::{Branches, NodeAccess, Side, TreeError, TreeNode};
