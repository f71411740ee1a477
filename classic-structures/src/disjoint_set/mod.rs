//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// Provides the DisjointSet data structure, which partitions a fixed set of
// hashable elements and supports union/find over them
//------------------------------------------------------------------------------

mod forest;
mod optimization;

pub use forest::*;
pub use optimization::*;

use std::hash::Hash;
use std::iter::FromIterator;
use ahash::AHashMap;
use log::debug;
use crate::error::*;

/// A disjoint set over a fixed collection of elements.
///
/// Elements are mapped to dense slots when the set is built, and the
/// union/find work happens on a [`Forest`] of those slots. The
/// [`Optimization`] picked at construction decides how tall the trees of
/// the forest are allowed to grow.
#[derive(Clone, Debug)]
pub struct DisjointSet<E: Eq + Hash> {
    slots: AHashMap<E, usize>,
    elements: Box<[E]>,
    forest: Forest
}

impl<E: Eq + Hash + Clone> DisjointSet<E> {
    /// Puts every element in its own set. Repeated elements are only kept once.
    pub fn new(elements: impl IntoIterator<Item = E>, optimization: Optimization) -> DisjointSet<E> {
        let mut slots = AHashMap::new();
        let mut list = Vec::new();

        for elem in elements {
            if !slots.contains_key(&elem) {
                slots.insert(elem.clone(), list.len());
                list.push(elem);
            }
        }

        debug!("Built disjoint set of {} elements ({})", list.len(), optimization);
        let forest = Forest::new(list.len(), optimization);
        DisjointSet { slots, elements: list.into_boxed_slice(), forest }
    }

    pub fn naive(elements: impl IntoIterator<Item = E>) -> DisjointSet<E> {
        DisjointSet::new(elements, Optimization::Naive)
    }

    pub fn union_by_rank(elements: impl IntoIterator<Item = E>) -> DisjointSet<E> {
        DisjointSet::new(elements, Optimization::UnionByRank)
    }

    pub fn full(elements: impl IntoIterator<Item = E>) -> DisjointSet<E> {
        DisjointSet::new(elements, Optimization::Full)
    }
}

impl<E: Eq + Hash> DisjointSet<E> {
    pub fn len(&self) -> usize { self.elements.len() }

    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    pub fn contains(&self, x: &E) -> bool { self.slots.contains_key(x) }

    pub fn optimization(&self) -> Optimization { self.forest.optimization() }

    pub fn set_count(&self) -> usize { self.forest.set_count() }

    /// The elements in the order they were first given.
    pub fn elements(&self) -> &[E] { &self.elements }

    /// Returns the representative of the set containing `x`.
    pub fn find(&mut self, x: &E) -> Result<&E> {
        let slot = self.slot(x)?;
        let root = self.forest.find(slot)?;
        Ok(&self.elements[root])
    }

    /// Merges the sets containing `a` and `b`, doing nothing if they are already the same.
    pub fn union(&mut self, a: &E, b: &E) -> Result<()> {
        let i = self.slot(a)?;
        let j = self.slot(b)?;
        self.forest.union(i, j)?;
        Ok(())
    }

    pub fn same_set(&mut self, a: &E, b: &E) -> Result<bool> {
        let i = self.slot(a)?;
        let j = self.slot(b)?;
        self.forest.same_set(i, j)
    }

    /// Parent hops from `x` to its representative.
    pub fn depth(&self, x: &E) -> Result<usize> {
        self.forest.depth(self.slot(x)?)
    }

    /// The current partition, members in insertion order.
    pub fn groups(&self) -> Vec<Vec<&E>> {
        self.forest.groups().into_iter()
            .map(|g| g.into_iter().map(|i| &self.elements[i]).collect())
            .collect()
    }

    fn slot(&self, x: &E) -> Result<usize> {
        self.slots.get(x).copied().ok_or(Error::UnknownElement)
    }
}

impl<E: Eq + Hash + Clone> FromIterator<E> for DisjointSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> DisjointSet<E> {
        DisjointSet::new(iter, Optimization::default())
    }
}
