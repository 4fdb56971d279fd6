//! A Rust implementation of a mutable k-d tree, a multi-dimensional binary
//! search tree over points with ordered numeric coordinates.
//!
//! The tree supports point insertion, exact-match lookup, deletion with
//! structural repair, axis-aligned half-open range queries, and a
//! breadth-first traversal that stays valid while entries are erased
//! mid-iteration. Entries are `(point, value)` pairs; multiple entries may
//! share a coordinate, so deletion disambiguates by value. Insertion order
//! determines the shape of the tree: no rebalancing is performed.
//!
//! ```
//! use kdindex::KdTree;
//!
//! // build a tree over two-dimensional integer points
//! let mut tree: KdTree<[i32; 2], u32> = KdTree::new();
//! tree.insert([2, 3], 0);
//! tree.insert([5, 4], 1);
//! tree.insert([9, 6], 2);
//!
//! // exact-match lookup and existence probe
//! assert_eq!(tree.at(&[5, 4]), Ok(&1));
//! assert!(tree.contains(&[9, 6]));
//! assert!(!tree.contains(&[9, 7]));
//!
//! // half-open box query: lower bound inclusive, upper bound exclusive
//! let found = tree.within(&[0, 0], &[6, 10]).unwrap();
//! assert_eq!(found.len(), 2);
//!
//! // deletion repairs the partition structure in place
//! assert!(tree.erase(&[9, 6], &2));
//! assert_eq!(tree.size(), 2);
//! ```
//!
//! ### References
//!
//! Jon Louis Bentley. *"Multidimensional binary search trees used for
//! associative searching."* Communications of the ACM 18, no. 9 (1975):
//! 509-517.

mod errors;
pub use errors::{KdError, Result};

mod point;
pub use point::{Axis, Point};

mod store;
pub use store::NodeStore;

pub mod tree;
pub use tree::{Cursor, Iter, KdTree, Node};
