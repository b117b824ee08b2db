//! Safety and algorithmic primitives: monadic helpers over `Option`/`Result`,
//! negative-index sequence access, overflow-aware arithmetic, and a few
//! fixed-size indexed structures.

pub mod dset;
pub mod error;
pub mod fatal;
pub mod math;
pub mod num_mod_static;
pub mod option;
pub mod result;
pub mod slice_utils;
pub mod tree;

pub use dset::DisjointSet;
pub use error::{Error, Result};
pub use fatal::fatal;
pub use math::factorial::FactorialTable;
pub use num_mod_static::{ModInt, Mint, DEFAULT_MODULUS};
pub use option::OptionExt;
pub use result::ResultExt;
pub use slice_utils::{char_at, get_at, get_or, normalize_index, nth_at, SliceExt};
pub use tree::fenwick::FenwickTree;
