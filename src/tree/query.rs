use std::collections::VecDeque;

use crate::errors::{KdError, Result};
use crate::point::Point;
use crate::tree::KdTree;

/// Axis-aligned half-open range queries.
///
/// A query box is given by a `low` and a `high` corner; a point is
/// contained when `low[d] <= point[d] < high[d]` holds in every dimension.
/// Both operations traverse breadth-first with a pending-node queue and
/// prune with the split dimension: the `before` subtree can only hold a
/// match when the box begins strictly below the node's coordinate, the
/// `after_or_equal` subtree only when the box ends at or above it. A box
/// spanning the split descends into both.
impl<P: Point, V> KdTree<P, V> {
    /// Collect every entry contained in the half-open box `[low, high)`.
    ///
    /// Entries are returned as snapshots in breadth-first encounter order.
    /// Querying an empty tree is reported as [`KdError::NotFound`], which
    /// is distinct from an empty result: a tree with entries but no match
    /// returns `Ok` with an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdindex::KdTree;
    ///
    /// let mut tree: KdTree<[i32; 2], u32> = KdTree::new();
    /// tree.insert([2, 3], 0);
    /// tree.insert([9, 6], 2);
    ///
    /// let found = tree.within(&[0, 0], &[5, 10]).unwrap();
    /// assert_eq!(found, vec![([2, 3], 0)]);
    ///
    /// assert!(tree.within(&[100, 100], &[200, 200]).unwrap().is_empty());
    /// ```
    pub fn within(&self, low: &P, high: &P) -> Result<Vec<(P, V)>>
    where
        V: Clone,
    {
        let root_key = match self.root_node() {
            Some(root_key) => root_key,
            None => {
                return Err(KdError::NotFound {
                    msg: "range query on an empty tree",
                })
            }
        };

        let mut matches = Vec::new();
        let mut pending = VecDeque::new();
        pending.push_back(root_key);
        while let Some(node_key) = pending.pop_front() {
            let node = self.node(node_key);
            if box_contains(low, high, node.point()) {
                matches.push((node.point().clone(), node.value().clone()));
            }

            let dimension = node.split_dimension();
            let coordinate = node.point().coordinate(dimension);
            if low.coordinate(dimension) < coordinate {
                if let Some(before_key) = node.before() {
                    pending.push_back(before_key);
                }
            }
            if high.coordinate(dimension) >= coordinate {
                if let Some(after_key) = node.after_or_equal() {
                    pending.push_back(after_key);
                }
            }
        }
        Ok(matches)
    }

    /// Returns true if any entry lies in the half-open box `[low, high)`.
    ///
    /// Identical traversal to [`within`](KdTree::within), returning at the
    /// first contained entry. An empty tree or a box with no match reports
    /// `false`, never an error.
    pub fn contains_within(&self, low: &P, high: &P) -> bool {
        let mut pending = VecDeque::new();
        if let Some(root_key) = self.root_node() {
            pending.push_back(root_key);
        }

        while let Some(node_key) = pending.pop_front() {
            let node = self.node(node_key);
            if box_contains(low, high, node.point()) {
                return true;
            }

            let dimension = node.split_dimension();
            let coordinate = node.point().coordinate(dimension);
            if low.coordinate(dimension) < coordinate {
                if let Some(before_key) = node.before() {
                    pending.push_back(before_key);
                }
            }
            if high.coordinate(dimension) >= coordinate {
                if let Some(after_key) = node.after_or_equal() {
                    pending.push_back(after_key);
                }
            }
        }
        false
    }
}

/// True when `point` lies in the half-open box `[low, high)` in every
/// dimension.
fn box_contains<P: Point>(low: &P, high: &P, point: &P) -> bool {
    for dimension in 0..point.dimensions() {
        let coordinate = point.coordinate(dimension);
        if coordinate < low.coordinate(dimension) || high.coordinate(dimension) <= coordinate {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_tree() -> KdTree<[i32; 2], u32> {
        let mut tree = KdTree::new();
        tree.insert([2, 3], 0);
        tree.insert([5, 4], 1);
        tree.insert([9, 6], 2);
        tree.insert([4, 7], 3);
        tree.insert([8, 1], 4);
        tree.insert([7, 2], 5);
        tree
    }

    #[test]
    fn test_within_on_empty_tree_is_an_error() {
        let tree: KdTree<[i32; 2], u32> = KdTree::new();
        assert!(std::matches!(
            tree.within(&[0, 0], &[10, 10]),
            Err(KdError::NotFound { .. })
        ));
        assert!(!tree.contains_within(&[0, 0], &[10, 10]));
    }

    #[test]
    fn test_within_no_match_is_empty_not_an_error() {
        let tree = example_tree();
        let found = tree.within(&[100, 100], &[200, 200]).unwrap();
        assert!(found.is_empty());
        assert!(!tree.contains_within(&[100, 100], &[200, 200]));
    }

    #[test]
    fn test_half_open_bounds() {
        let tree = example_tree();

        // the lower corner is inclusive
        let found = tree.within(&[2, 3], &[3, 4]).unwrap();
        assert_eq!(found, vec![([2, 3], 0)]);

        // the upper corner is exclusive
        assert!(tree.within(&[0, 0], &[2, 3]).unwrap().is_empty());
        assert!(tree.within(&[0, 0], &[3, 3]).unwrap().is_empty());
        assert_eq!(tree.within(&[0, 0], &[3, 4]).unwrap(), vec![([2, 3], 0)]);
    }

    #[test]
    fn test_box_spanning_the_split_explores_both_children() {
        let tree = example_tree();

        // [4, 10) x [0, 10) spans the split of (5, 4) and must pick up
        // entries on both of its sides
        let mut found = tree.within(&[4, 0], &[10, 10]).unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![([4, 7], 3), ([5, 4], 1), ([7, 2], 5), ([8, 1], 4), ([9, 6], 2)]
        );
    }

    #[test]
    fn test_contains_within_agrees_with_within() {
        let tree = example_tree();
        let boxes = [
            ([0, 0], [5, 10]),
            ([0, 0], [1, 1]),
            ([7, 0], [10, 3]),
            ([9, 6], [10, 7]),
        ];
        for (low, high) in boxes.iter() {
            let found = tree.within(low, high).unwrap();
            assert_eq!(tree.contains_within(low, high), !found.is_empty());
        }
    }
}
