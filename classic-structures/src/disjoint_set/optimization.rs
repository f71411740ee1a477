//------------------------------------------------------------------------------
// optimization.rs
//------------------------------------------------------------------------------
// Provides the enum that selects how the disjoint set forest bounds the
// height of its trees
//------------------------------------------------------------------------------

use crate::derive_more::*;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Optimization {
    // Links the first argument under the second, trees can grow to O(n) height
    #[display(fmt = "naive")]
    Naive,

    // Union by rank, O(log n) height
    #[display(fmt = "union by rank")]
    UnionByRank,

    // Union by rank and path compression, amortized inverse Ackermann
    #[display(fmt = "union by rank with path compression")]
    Full
}

impl Optimization {
    pub const ALL: [Optimization; 3] = [Optimization::Naive, Optimization::UnionByRank, Optimization::Full];

    pub fn uses_rank(self) -> bool {
        match self {
            Optimization::Naive => false,
            Optimization::UnionByRank | Optimization::Full => true
        }
    }

    pub fn compresses_paths(self) -> bool {
        match self {
            Optimization::Full => true,
            Optimization::Naive | Optimization::UnionByRank => false
        }
    }
}

impl Default for Optimization {
    fn default() -> Optimization { Optimization::Full }
}
