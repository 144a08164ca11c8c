//! Ordered set of `u64` keys, using [left-leaning-red-black][llrb] tree.
//!
//! ```
//! use llrb_set::Llrb;
//!
//! let mut llrb = Llrb::new("example");
//! llrb.replace_or_insert_bulk(vec![4, 6, 1, 3]);
//!
//! let mut keys = vec![];
//! llrb.ascend_greater_or_equal(2, |key| {
//!     keys.push(key);
//!     true
//! });
//! assert_eq!(keys, vec![3, 4, 6]);
//! assert_eq!(llrb.range(..4).collect::<Vec<u64>>(), vec![1, 3]);
//! ```
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

mod avgvar;
mod depth;
mod error;
mod iter;
mod llrb;

pub use crate::avgvar::AvgVar;
pub use crate::depth::Depth;
pub use crate::error::{Error, Result};
pub use crate::iter::{Iter, Range, Reverse};
pub use crate::llrb::{Llrb, Node, Stats};

#[cfg(test)]
mod proptests;
