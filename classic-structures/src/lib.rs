//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate ahash;
extern crate derive_more;
extern crate log;

mod error;
mod range_min;
mod disjoint_set;

pub use error::*;
pub use range_min::*;
pub use disjoint_set::*;
