//! Word ladder search
//!
//! Builds the depth-first search tree over the shared word pool and reports
//! paths to the target word.

mod builder;
mod tree;

pub use builder::build_tree;
pub use tree::{PATH_SEPARATOR, PathTree, TreeNode};
