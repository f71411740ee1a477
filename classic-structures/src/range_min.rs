//--------------------------------------------------------------------
// range_min.rs
//--------------------------------------------------------------------
// Provides a segment tree that answers range minimum queries and
// supports point updates, both in logarithmic time
//--------------------------------------------------------------------

use std::convert::TryFrom;
use log::{debug, trace};
use crate::error::*;

/// A segment tree over a fixed-length sequence of ordered values.
///
/// Each node of the tree stores the index (into the value sequence) of the
/// minimum of the range it covers, rather than the value itself. On ties the
/// leftmost index wins, so `query_index` always reports the first minimum.
#[derive(Clone, Debug)]
pub struct RangeMinTree<T: Ord> {
    values: Vec<T>,
    tree: Box<[usize]>
}

impl<T: Ord> RangeMinTree<T> {
    /// Builds the tree in O(n). Fails if `values` is empty.
    pub fn new(values: Vec<T>) -> Result<RangeMinTree<T>> {
        if values.is_empty() {
            trace!("Rejected range minimum tree over an empty sequence");
            return Err(Error::EmptyInput);
        }

        let last = values.len() - 1;
        let tree = vec![0; 4 * values.len()].into_boxed_slice();
        let mut rmt = RangeMinTree { values, tree };
        rmt.build(1, 0, last);

        debug!("Built range minimum tree over {} values", rmt.values.len());
        rmt.verify();
        Ok(rmt)
    }

    pub fn len(&self) -> usize { self.values.len() }

    // Construction refuses empty sequences
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn get(&self, index: usize) -> Option<&T> { self.values.get(index) }

    pub fn values(&self) -> &[T] { &self.values }

    pub fn into_values(self) -> Vec<T> { self.values }

    /// Returns the minimum of `values[i..=j]`.
    pub fn query(&self, i: usize, j: usize) -> Result<&T> {
        self.query_index(i, j).map(|k| &self.values[k])
    }

    /// Returns the position of the leftmost minimum of `values[i..=j]`.
    pub fn query_index(&self, i: usize, j: usize) -> Result<usize> {
        let len = self.values.len();
        let err = Error::InvalidRange { start: i, end: j, len };
        if i > j || j >= len {
            trace!("Rejected query [{}, {}] on {} values", i, j, len);
            return Err(err);
        }

        // The root always overlaps a valid range, so this never yields None
        self.query_node(1, 0, len - 1, i, j).ok_or(err)
    }

    /// Replaces `values[index]` and refreshes every ancestor of its leaf.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.values.len();
        if index >= len {
            trace!("Rejected update at {} on {} values", index, len);
            return Err(Error::IndexOutOfBounds { index, len });
        }

        self.values[index] = value;
        self.update_node(1, 0, len - 1, index);

        trace!("Updated index {}", index);
        self.verify();
        Ok(())
    }

    // Picks whichever of the two indices addresses the smaller value
    fn min_index(&self, i: usize, j: usize) -> usize {
        if self.values[j] < self.values[i] { j } else { i }
    }

    fn build(&mut self, node: usize, l: usize, r: usize) {
        if l == r { self.tree[node] = l; }
        else {
            let mid = (l + r) / 2;
            self.build(2 * node, l, mid);
            self.build(2 * node + 1, mid + 1, r);

            let min = self.min_index(self.tree[2 * node], self.tree[2 * node + 1]);
            self.tree[node] = min;
        }
    }

    fn query_node(&self, node: usize, l: usize, r: usize, i: usize, j: usize) -> Option<usize> {
        // Outside, inside or partially overlapping
        if i > r || j < l { None }
        else if i <= l && r <= j { Some(self.tree[node]) }
        else {
            let mid = (l + r) / 2;
            let left = self.query_node(2 * node, l, mid, i, j);
            let right = self.query_node(2 * node + 1, mid + 1, r, i, j);

            match (left, right) {
                (Some(a), Some(b)) => Some(self.min_index(a, b)),
                (a, b) => a.or(b)
            }
        }
    }

    fn update_node(&mut self, node: usize, l: usize, r: usize, index: usize) {
        if l == r { self.tree[node] = l; }
        else {
            let mid = (l + r) / 2;
            if index <= mid { self.update_node(2 * node, l, mid, index); }
            else { self.update_node(2 * node + 1, mid + 1, r, index); }

            let min = self.min_index(self.tree[2 * node], self.tree[2 * node + 1]);
            self.tree[node] = min;
        }
    }

    #[cfg(feature = "verify_invariants")]
    fn verify(&self) {
        self.verify_node(1, 0, self.values.len() - 1);
    }

    #[cfg(not(feature = "verify_invariants"))]
    fn verify(&self) {}

    // Recomputes the minimum index of every node and compares it against the stored one
    #[cfg(any(test, feature = "verify_invariants"))]
    fn verify_node(&self, node: usize, l: usize, r: usize) -> usize {
        let expected = if l == r { l } else {
            let mid = (l + r) / 2;
            let a = self.verify_node(2 * node, l, mid);
            let b = self.verify_node(2 * node + 1, mid + 1, r);
            self.min_index(a, b)
        };

        assert!(self.tree[node] == expected,
            "Node {} covering [{}, {}] stores index {}, but the minimum is at index {}",
            node, l, r, self.tree[node], expected);
        expected
    }
}

impl<T: Ord> TryFrom<Vec<T>> for RangeMinTree<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<RangeMinTree<T>> {
        RangeMinTree::new(values)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use ordered_float::OrderedFloat;

    fn check_tree<T: Ord>(rmt: &RangeMinTree<T>) {
        rmt.verify_node(1, 0, rmt.len() - 1);
    }

    fn check_all_ranges<T: Ord + std::fmt::Debug>(rmt: &RangeMinTree<T>) {
        let values = rmt.values();
        for i in 0..values.len() {
            for j in i..values.len() {
                let expected = values[i..=j].iter().min().unwrap();
                let got = rmt.query(i, j).unwrap();
                assert!(got == expected,
                    "Range [{}, {}]: expected minimum {:?}, but got {:?}", i, j, expected, got);
            }
        }
    }

    #[test]
    fn test_sample_queries() {
        let mut rmt = RangeMinTree::new(vec![5, 7, 9, 8, 10]).unwrap();
        assert_eq!(*rmt.query(2, 3).unwrap(), 8);

        rmt.update(4, 1).unwrap();
        assert_eq!(rmt.values(), &[5, 7, 9, 8, 1]);
        assert_eq!(*rmt.query(0, 4).unwrap(), 1);
        check_tree(&rmt);
    }

    #[test]
    fn test_point_queries() {
        let values = vec![4, -2, 13, 0, 0, 7, -9];
        let rmt = RangeMinTree::new(values.clone()).unwrap();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(rmt.query(i, i).unwrap(), v);
            assert_eq!(rmt.get(i), Some(v));
        }
        assert_eq!(rmt.get(values.len()), None);
    }

    #[test]
    fn test_single_element() {
        let mut rmt = RangeMinTree::new(vec![42]).unwrap();
        assert_eq!(rmt.len(), 1);
        assert!(!rmt.is_empty());
        assert_eq!(*rmt.query(0, 0).unwrap(), 42);

        rmt.update(0, -1).unwrap();
        assert_eq!(*rmt.query(0, 0).unwrap(), -1);
    }

    #[test]
    fn test_random_against_linear_scan() {
        let mut rng = StdRng::seed_from_u64(1235);
        for len in 1..40 {
            let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let rmt = RangeMinTree::new(values).unwrap();
            check_tree(&rmt);
            check_all_ranges(&rmt);
        }
    }

    #[test]
    fn test_random_updates() {
        let mut rng = StdRng::seed_from_u64(4321);
        let values: Vec<i32> = (0..33).map(|_| rng.gen_range(0..100)).collect();
        let mut rmt = RangeMinTree::new(values).unwrap();

        for _ in 0..200 {
            let k = rng.gen_range(0..rmt.len());
            let v = rng.gen_range(-100..200);
            rmt.update(k, v).unwrap();

            assert_eq!(*rmt.query(k, k).unwrap(), v);
            check_tree(&rmt);
        }
        check_all_ranges(&rmt);
    }

    #[test]
    fn test_update_reflected_in_covering_ranges() {
        let mut rmt = RangeMinTree::new(vec![3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
        rmt.update(5, -7).unwrap();
        for i in 0..=5 {
            for j in 5..rmt.len() {
                assert_eq!(*rmt.query(i, j).unwrap(), -7, "Range [{}, {}] misses the update", i, j);
            }
        }
        assert_eq!(*rmt.query(0, 4).unwrap(), 1);
    }

    #[test]
    fn test_leftmost_minimum() {
        let mut rmt = RangeMinTree::new(vec![2, 0, 5, 0, 0, 3]).unwrap();
        assert_eq!(rmt.query_index(0, 5).unwrap(), 1);
        assert_eq!(rmt.query_index(2, 5).unwrap(), 3);
        assert_eq!(rmt.query_index(4, 5).unwrap(), 4);

        rmt.update(1, 8).unwrap();
        assert_eq!(rmt.query_index(0, 5).unwrap(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(RangeMinTree::<i32>::new(Vec::new()).unwrap_err(), Error::EmptyInput);
        assert!(RangeMinTree::<i32>::try_from(Vec::new()).is_err());
        assert!(RangeMinTree::try_from(vec![1, 2]).is_ok());
    }

    #[test]
    fn test_invalid_ranges() {
        let rmt = RangeMinTree::new(vec![5, 7, 9, 8, 10]).unwrap();
        assert_eq!(rmt.query(3, 2), Err(Error::InvalidRange { start: 3, end: 2, len: 5 }));
        assert_eq!(rmt.query(0, 5), Err(Error::InvalidRange { start: 0, end: 5, len: 5 }));
        assert_eq!(rmt.query(5, 5), Err(Error::InvalidRange { start: 5, end: 5, len: 5 }));
        assert!(rmt.query_index(usize::MAX, 0).is_err());
    }

    #[test]
    fn test_failed_update_keeps_state() {
        let mut rmt = RangeMinTree::new(vec![5, 7, 9, 8, 10]).unwrap();
        assert_eq!(rmt.update(5, 0), Err(Error::IndexOutOfBounds { index: 5, len: 5 }));
        assert_eq!(rmt.values(), &[5, 7, 9, 8, 10]);
        assert_eq!(*rmt.query(0, 4).unwrap(), 5);
        check_tree(&rmt);
    }

    #[test]
    fn test_float_values() {
        let values: Vec<_> = [2.5, -0.25, 3.75, -1.5].iter().map(|&f| OrderedFloat(f)).collect();
        let mut rmt = RangeMinTree::new(values).unwrap();
        assert_eq!(rmt.query(0, 2).unwrap().into_inner(), -0.25);
        assert_eq!(rmt.query(0, 3).unwrap().into_inner(), -1.5);

        rmt.update(0, OrderedFloat(-10.0)).unwrap();
        assert_eq!(rmt.query(0, 3).unwrap().into_inner(), -10.0);
    }

    #[test]
    fn test_owned_values() {
        let words = vec!["pear", "apple", "zucchini", "fig"];
        let mut rmt = RangeMinTree::new(words.iter().map(|s| s.to_string()).collect()).unwrap();
        assert_eq!(rmt.query(0, 3).unwrap(), "apple");
        assert_eq!(rmt.query(2, 3).unwrap(), "fig");

        rmt.update(1, "quince".to_string()).unwrap();
        assert_eq!(rmt.query(0, 3).unwrap(), "fig");
        assert_eq!(rmt.into_values()[1], "quince");
    }
}
