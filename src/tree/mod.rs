//! Submodule containing the k-d tree and its traversal components.
//!
mod node;
pub use node::Node;

mod tree;
pub use tree::KdTree;

mod query;

mod cursor;
pub use cursor::{Cursor, Iter};
