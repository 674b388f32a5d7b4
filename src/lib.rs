//! # intseq
//!
//! A self-managed, exclusively-owned sequence of `i32` values with in-place
//! partition sort, sortedness detection, direction-aware binary search, and
//! an ordered merge of two sequences.
//!
//! ## Overview
//!
//! - **Storage**: [`IntSequence`](sequence::IntSequence) owns a buffer whose
//!   capacity always equals its logical length. Resizing preserves the common
//!   prefix and zero-fills new slots.
//! - **Order analysis**: [`SortedState`](sequence::SortedState) classifies
//!   the current order as ascending, descending, or unsorted.
//! - **Ordering**: Lomuto-partition quicksort over the whole sequence or a
//!   leniently corrected sub-range.
//! - **Lookup**: binary search that sorts unsorted input first and follows
//!   the order it finds.
//! - **Combination**: merge two sequences into one ordered sequence.
//!
//! ## Feature Flags
//!
//! - `io` (default): whitespace-token reader and space-separated writer
//! - `serde`: `Serialize`/`Deserialize` for `IntSequence`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use intseq::prelude::*;
//!
//! let mut sequence = IntSequence::from(vec![5, 3, 1]);
//! let other = IntSequence::from(vec![2, 4]);
//!
//! sequence.merge(&other, SortDirection::Ascending);
//! assert_eq!(sequence.as_slice(), &[1, 2, 3, 4, 5]);
//! assert_eq!(sequence.search(4), Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use intseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "io")]
    pub use crate::io::*;
}

pub mod sequence;

#[cfg(feature = "io")]
pub mod io;
