//! Ordered combination of two sequences.

use super::{IntSequence, SortDirection};

impl IntSequence {
    /// Replaces `self` with every element of `self` and `other`, ordered in
    /// `direction`.
    ///
    /// Both inputs are copied and each copy is sorted into `direction` unless
    /// it is already in that order; the copies are then merged front to
    /// front. On equal fronts the element from `other` goes first. `other`
    /// is never modified.
    ///
    /// If **either** sequence is empty this is a no-op: `self` keeps its
    /// contents, and an empty `self` stays empty even when `other` is not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::{IntSequence, SortDirection};
    ///
    /// let mut sequence = IntSequence::from(vec![5, 3, 1]);
    /// let other = IntSequence::from(vec![2, 4]);
    /// sequence.merge(&other, SortDirection::Ascending);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3, 4, 5]);
    /// assert_eq!(other.as_slice(), &[2, 4]);
    ///
    /// // Merging into an empty sequence does nothing
    /// let mut empty = IntSequence::new();
    /// empty.merge(&other, SortDirection::Ascending);
    /// assert!(empty.is_empty());
    /// ```
    pub fn merge(&mut self, other: &Self, direction: SortDirection) {
        if self.is_empty() || other.is_empty() {
            tracing::debug!(
                length = self.len(),
                other_length = other.len(),
                "merge with an empty operand is a no-op"
            );
            return;
        }

        let first = self.clone().into_sorted(direction);
        let second = other.clone().into_sorted(direction);

        let mut output = Self::with_length(first.len() + second.len());
        let (mut first_index, mut second_index) = (0, 0);
        for slot in output.data.iter_mut() {
            let take_first = match (first.get(first_index), second.get(second_index)) {
                (Some(left), Some(right)) => direction.precedes(left, right),
                (Some(_), None) => true,
                (None, _) => false,
            };
            if take_first {
                *slot = first.data[first_index];
                first_index += 1;
            } else {
                *slot = second.data[second_index];
                second_index += 1;
            }
        }

        tracing::trace!(length = output.len(), %direction, "merged sequences");
        *self = output;
    }

    /// Sorts into `direction` unless already in that order.
    fn into_sorted(mut self, direction: SortDirection) -> Self {
        if !self.sorted_state().matches(direction) {
            self.sort(direction);
        }
        self
    }
}
