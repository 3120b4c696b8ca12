//! Iterator helpers.
//!
//! ```
//! use ornate_seq::{SeqExt, range_step};
//!
//! let ranks = [("Alice", 10), ("Bob", 5), ("Charlie", 5)];
//! let by_rank = ranks.iter().group_to_map_with(|(_, rank)| *rank, |(name, _)| *name);
//! assert_eq!(by_rank[&5], ["Bob", "Charlie"]);
//!
//! assert_eq!([0, 1, 1].into_iter().arg_max(), Some(1));
//! assert_eq!(range_step(0, 16, 5).unwrap().collect::<Vec<_>>(), [0, 5, 10, 15]);
//! ```

mod error;
mod ext;
mod par;
mod range;
mod times;

pub use error::{Result, SeqError};
pub use ext::SeqExt;
pub use par::{for_each_parallel, try_for_each_parallel};
pub use range::{Steps, range, range_from, range_step};
pub use times::{times, times_collect, times_collect_indexed, times_indexed};
