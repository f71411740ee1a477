//--------------------------------------------------------------------
// forest.rs
//--------------------------------------------------------------------
// Provides the index-based union/find forest shared by every
// disjoint set optimization
//--------------------------------------------------------------------

use std::mem;
use ahash::AHashMap;
use log::debug;
use crate::error::*;
use super::Optimization;

/// A union/find forest over the slots `0..cnt`.
///
/// The optimization is chosen once at construction and decides both how
/// `union` links two trees and whether `find` compresses the path it walks.
#[derive(Clone, Debug)]
pub struct Forest {
    parents: Box<[usize]>,
    ranks: Box<[u32]>,
    optimization: Optimization,
    sets: usize
}

impl Forest {
    pub fn new(cnt: usize, optimization: Optimization) -> Forest {
        let parents = (0..cnt).collect::<Vec<_>>().into_boxed_slice();
        let ranks = vec![0; cnt].into_boxed_slice();
        Forest { parents, ranks, optimization, sets: cnt }
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    pub fn optimization(&self) -> Optimization { self.optimization }

    /// The number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize { self.sets }

    /// Returns the root of the tree containing `i`, compressing the path
    /// if the optimization asks for it.
    pub fn find(&mut self, i: usize) -> Result<usize> {
        self.check(i)?;
        Ok(self.find_slot(i))
    }

    /// Merges the trees containing `i` and `j`. Returns whether anything changed.
    pub fn union(&mut self, i: usize, j: usize) -> Result<bool> {
        self.check(i)?;
        self.check(j)?;

        let ri = self.find_slot(i);
        let rj = self.find_slot(j);
        if ri == rj { return Ok(false); }

        if self.optimization.uses_rank() { self.link_by_rank(ri, rj); }
        else {
            // Naive linking: whatever `j` is becomes the parent, without looking for its root.
            // `ri` is linked instead of `i` so the rest of `i`'s tree comes along.
            self.parents[ri] = j;
        }

        self.sets -= 1;
        debug!("Merged slots {} and {}, {} sets left", i, j, self.sets);
        self.verify();
        Ok(true)
    }

    pub fn same_set(&mut self, i: usize, j: usize) -> Result<bool> {
        Ok(self.find(i)? == self.find(j)?)
    }

    /// The number of parent hops from `i` to its root. Never mutates the forest.
    pub fn depth(&self, i: usize) -> Result<usize> {
        self.check(i)?;

        let mut i = i;
        let mut hops = 0;
        while self.parents[i] != i {
            i = self.parents[i];
            hops += 1;
        }
        Ok(hops)
    }

    /// The slots grouped by set, in slot order, each group ordered by its first slot.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut group_of_root = AHashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for i in 0..self.len() {
            let root = self.root(i);
            let next = groups.len();
            let g = *group_of_root.entry(root).or_insert(next);
            if g == groups.len() { groups.push(Vec::new()); }
            groups[g].push(i);
        }

        groups
    }

    fn check(&self, i: usize) -> Result<()> {
        if i < self.len() { Ok(()) } else { Err(Error::UnknownElement) }
    }

    fn find_slot(&mut self, i: usize) -> usize {
        if self.optimization.compresses_paths() {
            let root = self.compress(i);
            self.verify();
            root
        } else { self.root(i) }
    }

    fn root(&self, mut i: usize) -> usize {
        while self.parents[i] != i { i = self.parents[i]; }
        i
    }

    fn compress(&mut self, i: usize) -> usize {
        if self.parents[i] == i { i }
        else {
            self.parents[i] = self.compress(self.parents[i]);
            self.parents[i]
        }
    }

    // The first root survives ties
    fn link_by_rank(&mut self, ri: usize, rj: usize) {
        let mut i = ri;
        let mut j = rj;

        if self.ranks[i] < self.ranks[j] { mem::swap(&mut i, &mut j); }
        self.parents[j] = i;
        if self.ranks[i] == self.ranks[j] { self.ranks[i] += 1; }
    }

    #[cfg(feature = "verify_invariants")]
    fn verify(&self) { self.verify_forest(); }

    #[cfg(not(feature = "verify_invariants"))]
    fn verify(&self) {}

    #[cfg(any(test, feature = "verify_invariants"))]
    fn verify_forest(&self) {
        let len = self.len();
        let mut roots = 0;

        for i in 0..len {
            let mut k = i;
            let mut hops = 0;
            while self.parents[k] != k {
                k = self.parents[k];
                hops += 1;
                assert!(hops <= len, "Slot {} does not reach a root", i);
            }
            if k == i { roots += 1; }

            let p = self.parents[i];
            if self.optimization.uses_rank() && p != i {
                assert!(self.ranks[p] > self.ranks[i],
                    "Slot {} has rank {}, but its parent {} has rank {}", i, self.ranks[i], p, self.ranks[p]);
            }
        }

        assert!(roots == self.sets, "Expected {} roots, but found {} roots", self.sets, roots);
    }
}
