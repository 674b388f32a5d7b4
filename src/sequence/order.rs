//! Order analysis: sortedness classification and sort directions.

use std::fmt;

use super::IntSequence;

// =============================================================================
// SortDirection
// =============================================================================

/// The order requested from [`IntSequence::sort`] and [`IntSequence::merge`].
///
/// `From<bool>` maps `true` to [`SortDirection::Ascending`], matching the
/// common `ascending: bool` flag.
///
/// # Examples
///
/// ```rust
/// use intseq::sequence::SortDirection;
///
/// assert_eq!(SortDirection::from(true), SortDirection::Ascending);
/// assert!(SortDirection::Descending.precedes(3, 1));
/// assert!(!SortDirection::Descending.precedes(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest element first.
    #[default]
    Ascending,
    /// Largest element first.
    Descending,
}

impl SortDirection {
    /// Returns `true` if `left` belongs strictly before `right` in this order.
    ///
    /// Equal values never precede each other.
    #[inline]
    #[must_use]
    pub const fn precedes(self, left: i32, right: i32) -> bool {
        match self {
            Self::Ascending => left < right,
            Self::Descending => left > right,
        }
    }
}

impl From<bool> for SortDirection {
    #[inline]
    fn from(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => formatter.write_str("ascending"),
            Self::Descending => formatter.write_str("descending"),
        }
    }
}

// =============================================================================
// SortedState
// =============================================================================

/// Classification of a sequence's current order.
///
/// Sequences shorter than two elements are [`SortedState::Unsorted`];
/// sequences whose elements are all equal are [`SortedState::Ascending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortedState {
    /// Every adjacent pair is non-decreasing.
    Ascending,
    /// Neither ascending nor descending, or too short to tell.
    Unsorted,
    /// Every adjacent pair is non-increasing, with at least one strict drop.
    Descending,
}

impl SortedState {
    /// Returns `true` if this state already satisfies `direction`.
    ///
    /// [`SortedState::Unsorted`] never matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::{SortDirection, SortedState};
    ///
    /// assert!(SortedState::Ascending.matches(SortDirection::Ascending));
    /// assert!(!SortedState::Ascending.matches(SortDirection::Descending));
    /// assert!(!SortedState::Unsorted.matches(SortDirection::Ascending));
    /// ```
    #[inline]
    #[must_use]
    pub const fn matches(self, direction: SortDirection) -> bool {
        matches!(
            (self, direction),
            (Self::Ascending, SortDirection::Ascending)
                | (Self::Descending, SortDirection::Descending)
        )
    }

    /// Returns the direction of a sorted state, or `None` for `Unsorted`.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> Option<SortDirection> {
        match self {
            Self::Ascending => Some(SortDirection::Ascending),
            Self::Descending => Some(SortDirection::Descending),
            Self::Unsorted => None,
        }
    }
}

impl fmt::Display for SortedState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => formatter.write_str("ascending"),
            Self::Unsorted => formatter.write_str("unsorted"),
            Self::Descending => formatter.write_str("descending"),
        }
    }
}

impl IntSequence {
    /// Classifies the current order of the sequence.
    ///
    /// Scans adjacent pairs once, left to right. The first strict step fixes
    /// the observed direction; any later step against it returns
    /// [`SortedState::Unsorted`] immediately. Equal neighbours are ignored,
    /// so an all-equal sequence is [`SortedState::Ascending`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::{IntSequence, SortedState};
    ///
    /// assert_eq!(IntSequence::from(vec![1, 1, 2]).sorted_state(), SortedState::Ascending);
    /// assert_eq!(IntSequence::from(vec![3, 3, 1]).sorted_state(), SortedState::Descending);
    /// assert_eq!(IntSequence::from(vec![1, 3, 2]).sorted_state(), SortedState::Unsorted);
    /// assert_eq!(IntSequence::from(vec![5, 5]).sorted_state(), SortedState::Ascending);
    /// assert_eq!(IntSequence::from(vec![5]).sorted_state(), SortedState::Unsorted);
    /// ```
    #[must_use]
    pub fn sorted_state(&self) -> SortedState {
        if self.len() < 2 {
            return SortedState::Unsorted;
        }

        let mut observed: Option<SortDirection> = None;
        for pair in self.data.windows(2) {
            let step = if pair[0] < pair[1] {
                SortDirection::Ascending
            } else if pair[0] > pair[1] {
                SortDirection::Descending
            } else {
                continue;
            };

            match observed {
                Some(direction) if direction != step => return SortedState::Unsorted,
                _ => observed = Some(step),
            }
        }

        match observed {
            Some(SortDirection::Descending) => SortedState::Descending,
            Some(SortDirection::Ascending) | None => SortedState::Ascending,
        }
    }
}
