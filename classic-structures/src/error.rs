//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// The errors reported by the range minimum tree and the disjoint sets
//--------------------------------------------------------------------

use crate::derive_more::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Error {
    #[display(fmt = "cannot build a range minimum tree from an empty sequence")]
    EmptyInput,

    #[display(fmt = "invalid range [{}, {}] for a sequence of length {}", start, end, len)]
    InvalidRange { start: usize, end: usize, len: usize },

    #[display(fmt = "index {} is out of bounds for a sequence of length {}", index, len)]
    IndexOutOfBounds { index: usize, len: usize },

    #[display(fmt = "element is not part of the disjoint set")]
    UnknownElement
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
