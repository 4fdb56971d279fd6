extern crate slab;
use slab::Slab;

use crate::Node;

/// A type for storing tree nodes by key.
///
/// Keys handed out by the store are stable: a key remains associated with
/// its node until that node is removed, regardless of other insertions and
/// removals. Node-to-node links in the tree are keys into this store, so
/// dropping the store reclaims every node in one flat deallocation with no
/// pointer-chasing recursion.
pub type NodeStore<P, V> = Slab<Node<P, V>>;
