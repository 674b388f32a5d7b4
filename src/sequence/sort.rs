//! In-place partition sort (Lomuto quicksort).
//!
//! The recursion of the textbook algorithm is replaced by an explicit work
//! stack of pending ranges, so degenerate pivots (already sorted or reverse
//! sorted input) cost O(N²) time but never deep call stacks.

use smallvec::SmallVec;

use super::{IntSequence, SortDirection};

/// Inline capacity of the pending-range stack before it spills to the heap.
const INLINE_PENDING_RANGES: usize = 32;

/// The range a sort was asked to cover.
///
/// Whether the caller supplied a range and whether that range is usable are
/// kept apart: [`SortRange::resolve`] performs the correction against the
/// current length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortRange {
    /// The whole sequence.
    Whole,
    /// An inclusive range exactly as the caller supplied it.
    Explicit { from: isize, to: isize },
}

impl SortRange {
    /// Corrects the range against `length`.
    ///
    /// A negative bound on either side falls back to the whole sequence and
    /// `to` is clamped to the last index. Returns `None` when the corrected
    /// range holds fewer than two elements.
    pub(crate) fn resolve(self, length: usize) -> Option<(usize, usize)> {
        let last = length.checked_sub(1)?;
        let (from, to) = match self {
            Self::Whole => (0, last),
            Self::Explicit { from, to } => match (usize::try_from(from), usize::try_from(to)) {
                (Ok(from), Ok(to)) => (from, to.min(last)),
                _ => (0, last),
            },
        };
        (from < to).then_some((from, to))
    }
}

impl IntSequence {
    /// Sorts the whole sequence in place in the given direction.
    ///
    /// The sort is not stable; equal elements may be reordered relative to
    /// each other.
    ///
    /// # Complexity
    ///
    /// O(N log N) on average, O(N²) when every pivot is an extreme value
    /// (for example already-sorted input).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::{IntSequence, SortDirection};
    ///
    /// let mut sequence = IntSequence::from(vec![3, 1, 2]);
    /// sequence.sort(SortDirection::Ascending);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    ///
    /// sequence.sort(SortDirection::Descending);
    /// assert_eq!(sequence.as_slice(), &[3, 2, 1]);
    /// ```
    pub fn sort(&mut self, direction: SortDirection) {
        self.sort_within(direction, SortRange::Whole);
    }

    /// Sorts the inclusive index range `[from, to]` in place.
    ///
    /// Out-of-range bounds are corrected rather than rejected:
    ///
    /// - if either bound is negative, the whole sequence is sorted;
    /// - `to` past the last index is clamped to the last index;
    /// - a range with `to <= from` after correction is left as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::{IntSequence, SortDirection};
    ///
    /// let mut sequence = IntSequence::from(vec![9, 5, 4, 3, 8]);
    /// sequence.sort_range(SortDirection::Ascending, 1, 3);
    /// assert_eq!(sequence.as_slice(), &[9, 3, 4, 5, 8]);
    ///
    /// // `to` beyond the end is clamped
    /// sequence.sort_range(SortDirection::Descending, 2, 100);
    /// assert_eq!(sequence.as_slice(), &[9, 3, 8, 5, 4]);
    ///
    /// // A negative bound sorts everything
    /// sequence.sort_range(SortDirection::Ascending, -1, 2);
    /// assert_eq!(sequence.as_slice(), &[3, 4, 5, 8, 9]);
    /// ```
    pub fn sort_range(&mut self, direction: SortDirection, from: isize, to: isize) {
        self.sort_within(direction, SortRange::Explicit { from, to });
    }

    fn sort_within(&mut self, direction: SortDirection, range: SortRange) {
        let Some((low, high)) = range.resolve(self.len()) else {
            tracing::trace!(?range, length = self.len(), "sort range holds no work");
            return;
        };
        if let SortRange::Explicit { from, to } = range
            && (usize::try_from(from) != Ok(low) || usize::try_from(to) != Ok(high))
        {
            tracing::debug!(from, to, low, high, "corrected sort range");
        }

        let mut pending: SmallVec<[(usize, usize); INLINE_PENDING_RANGES]> = SmallVec::new();
        pending.push((low, high));

        while let Some((from, to)) = pending.pop() {
            let boundary = partition(&mut self.data, direction, from, to);

            // Right half is pushed first so the left half is processed first.
            if boundary + 1 < to {
                pending.push((boundary + 1, to));
            }
            if boundary > from + 1 {
                pending.push((from, boundary - 1));
            }
        }
    }
}

/// Partitions `data[from..=to]` around the pivot `data[to]`.
///
/// Elements that strictly precede the pivot in `direction` are moved to the
/// front of the range; the pivot is then swapped into the slot after them.
/// Returns the pivot's final index.
fn partition(data: &mut [i32], direction: SortDirection, from: usize, to: usize) -> usize {
    let pivot = data[to];
    let mut boundary = from;

    for index in from..to {
        if direction.precedes(data[index], pivot) {
            data.swap(boundary, index);
            boundary += 1;
        }
    }

    data.swap(boundary, to);
    boundary
}
