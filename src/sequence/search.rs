//! Direction-aware binary search.

use std::cmp::Ordering;

use super::{IntSequence, SortDirection};

impl IntSequence {
    /// Returns the index of some occurrence of `element`, or `None`.
    ///
    /// The search needs ordered data. An ascending or descending sequence is
    /// searched as is, with the step direction following its order. An
    /// [`Unsorted`](super::SortedState::Unsorted) sequence is first sorted
    /// ascending **in place**, so searching reorders unsorted input
    /// permanently.
    ///
    /// When `element` occurs more than once, which index is returned is
    /// unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let mut descending = IntSequence::from(vec![9, 7, 4, 1]);
    /// assert_eq!(descending.search(4), Some(2));
    /// assert_eq!(descending.search(5), None);
    /// assert_eq!(descending.as_slice(), &[9, 7, 4, 1]);
    ///
    /// let mut unsorted = IntSequence::from(vec![7, 2, 9]);
    /// assert_eq!(unsorted.search(2), Some(0));
    /// assert_eq!(unsorted.as_slice(), &[2, 7, 9]);
    /// ```
    pub fn search(&mut self, element: i32) -> Option<usize> {
        let direction = match self.sorted_state().direction() {
            Some(direction) => direction,
            None => {
                tracing::debug!(length = self.len(), "sorting unsorted sequence before search");
                self.sort(SortDirection::Ascending);
                SortDirection::Ascending
            }
        };
        binary_search(&self.data, element, direction)
    }
}

/// Binary search over data ordered in `direction`.
///
/// The window is `[left, right)`; the probe is the lower midpoint of the
/// inclusive window `[left, right - 1]`.
fn binary_search(data: &[i32], element: i32, direction: SortDirection) -> Option<usize> {
    let mut left = 0;
    let mut right = data.len();

    while left < right {
        let middle = left + (right - 1 - left) / 2;
        let ordering = match direction {
            SortDirection::Ascending => data[middle].cmp(&element),
            SortDirection::Descending => element.cmp(&data[middle]),
        };
        match ordering {
            Ordering::Equal => return Some(middle),
            Ordering::Greater => right = middle,
            Ordering::Less => left = middle + 1,
        }
    }
    None
}
