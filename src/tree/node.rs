use std::mem;

type NodeKey = usize;

/// A node in a k-d tree.
///
/// Every node carries a full `(point, value)` entry together with the
/// dimension it partitions its children by. The `before` child subtree
/// holds entries whose coordinate along that dimension is strictly less
/// than this node's; the `after_or_equal` subtree holds the rest, so equal
/// coordinates always route to the same side.
///
/// Child links are the owning direction of the tree. The `parent` key is a
/// non-owning back-reference used only to locate and patch the parent's
/// child slot when this node is unlinked during deletion repair.
///
/// # Examples
///
/// ```
/// use kdindex::Node;
///
/// let node: Node<[i32; 2], u32> = Node::new([2, 3], 0, 0);
/// assert_eq!(node.point(), &[2, 3]);
/// assert_eq!(node.value(), &0);
/// assert_eq!(node.split_dimension(), 0);
/// assert!(node.parent().is_none());
/// assert!(node.is_leaf());
/// ```
pub struct Node<P, V> {
    parent: Option<NodeKey>,
    before: Option<NodeKey>,
    after_or_equal: Option<NodeKey>,
    split_dimension: usize,
    point: P,
    value: V,
}

impl<P, V> Node<P, V> {
    /// Create a new unlinked node holding the given entry.
    ///
    /// The parent and both child links are initialized to `None`; linking
    /// into a tree is the tree's responsibility.
    pub fn new(point: P, value: V, split_dimension: usize) -> Self {
        Node {
            parent: None,
            before: None,
            after_or_equal: None,
            split_dimension,
            point,
            value,
        }
    }

    /// Returns the key of the parent node.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Sets the parent node by key.
    pub fn set_parent(&mut self, parent: Option<NodeKey>) {
        self.parent = parent
    }

    /// Returns the key of the strictly-less child subtree.
    pub fn before(&self) -> Option<NodeKey> {
        self.before
    }

    /// Sets the strictly-less child by key.
    pub fn set_before(&mut self, before: Option<NodeKey>) {
        self.before = before
    }

    /// Returns the key of the greater-or-equal child subtree.
    pub fn after_or_equal(&self) -> Option<NodeKey> {
        self.after_or_equal
    }

    /// Sets the greater-or-equal child by key.
    pub fn set_after_or_equal(&mut self, after_or_equal: Option<NodeKey>) {
        self.after_or_equal = after_or_equal
    }

    /// Returns the dimension this node partitions its children by.
    pub fn split_dimension(&self) -> usize {
        self.split_dimension
    }

    /// Returns a reference to this node's point.
    pub fn point(&self) -> &P {
        &self.point
    }

    /// Returns a reference to this node's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.before.is_none() && self.after_or_equal.is_none()
    }

    /// Exchanges the stored entry with `other`, leaving the links and split
    /// dimensions of both nodes in place.
    ///
    /// Deletion repair relocates entries between structural positions; the
    /// vacated slot keeps the doomed entry until it is itself overwritten
    /// or freed.
    pub fn swap_entry(&mut self, other: &mut Node<P, V>) {
        mem::swap(&mut self.point, &mut other.point);
        mem::swap(&mut self.value, &mut other.value);
    }
}
