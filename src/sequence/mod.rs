//! Self-managed integer sequence.
//!
//! This module provides [`IntSequence`], a growable container of `i32`
//! values that owns exactly as much storage as it has elements, together
//! with the order-aware operations built on top of it:
//!
//! - [`IntSequence::reallocate`] / [`IntSequence::push_back`]: storage management
//! - [`IntSequence::sorted_state`]: ascending / descending / unsorted classification
//! - [`IntSequence::sort`] / [`IntSequence::sort_range`]: in-place partition sort
//! - [`IntSequence::search`]: direction-aware binary search
//! - [`IntSequence::merge`]: ordered combination of two sequences
//!
//! # Ownership
//!
//! An `IntSequence` is never shared. [`Clone`] produces a deep copy of the
//! buffer, and [`IntSequence::take`] moves the contents out, leaving the
//! source empty.
//!
//! # Examples
//!
//! ```rust
//! use intseq::sequence::{IntSequence, SortDirection, SortedState};
//!
//! let mut sequence = IntSequence::new();
//! sequence.push_back(7);
//! sequence.push_back(2);
//! sequence.push_back(9);
//! assert_eq!(sequence.sorted_state(), SortedState::Unsorted);
//!
//! // Searching an unsorted sequence sorts it ascending first
//! assert_eq!(sequence.search(2), Some(0));
//! assert_eq!(sequence.as_slice(), &[2, 7, 9]);
//!
//! sequence.sort(SortDirection::Descending);
//! assert_eq!(sequence.as_slice(), &[9, 7, 2]);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

mod error;
mod merge;
mod order;
mod search;
mod sort;
mod storage;

pub use error::SequenceError;
pub use order::{SortDirection, SortedState};

// =============================================================================
// IntSequence Definition
// =============================================================================

/// A growable sequence of `i32` values with an exactly-sized owned buffer.
///
/// The logical length and the buffer capacity are the same number: every
/// resize allocates a fresh buffer of the requested size. An empty sequence
/// holds a zero-length slice, never an absent buffer.
///
/// # Time Complexity
///
/// | Operation      | Complexity                   |
/// |----------------|------------------------------|
/// | `new`          | O(1)                         |
/// | `get`          | O(1)                         |
/// | `reallocate`   | O(N)                         |
/// | `push_back`    | O(N) (reallocates every call) |
/// | `sorted_state` | O(N)                         |
/// | `sort`         | O(N log N) average, O(N²) worst |
/// | `search`       | O(log N) if sorted, plus sort otherwise |
/// | `merge`        | O((M + N) log (M + N))       |
///
/// # Examples
///
/// ```rust
/// use intseq::sequence::IntSequence;
///
/// let sequence: IntSequence = (1..=5).collect();
/// assert_eq!(sequence.len(), 5);
/// assert_eq!(sequence.get(2), Some(3));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSequence {
    /// Owned elements; `data.len()` is the logical length
    data: Box<[i32]>,
}

static_assertions::assert_impl_all!(IntSequence: Send, Sync, Clone, Default);

impl IntSequence {
    /// Creates a new empty sequence.
    ///
    /// No buffer is allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let sequence = IntSequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let sequence = IntSequence::from(vec![10, 20]);
    /// assert_eq!(sequence.get(1), Some(20));
    /// assert_eq!(sequence.get(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.data.get(index).copied()
    }

    /// Returns a mutable reference to the element at `index`, or `None` if it
    /// is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.data.get_mut(index)
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.data.first().copied()
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.data.last().copied()
    }

    /// Returns the elements as a slice in index order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Returns an iterator over the elements in index order.
    ///
    /// This is the print collaborator's view of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let sequence = IntSequence::from(vec![1, 2, 3]);
    /// let doubled: Vec<i32> = sequence.iter().map(|element| element * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i32>> {
        self.data.iter().copied()
    }

    /// Consumes the sequence and returns its elements as a `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<i32> {
        self.data.into_vec()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl From<Vec<i32>> for IntSequence {
    #[inline]
    fn from(elements: Vec<i32>) -> Self {
        Self {
            data: elements.into_boxed_slice(),
        }
    }
}

impl From<&[i32]> for IntSequence {
    #[inline]
    fn from(elements: &[i32]) -> Self {
        Self {
            data: Box::from(elements),
        }
    }
}

impl<const N: usize> From<[i32; N]> for IntSequence {
    #[inline]
    fn from(elements: [i32; N]) -> Self {
        Self {
            data: Box::from(elements),
        }
    }
}

impl From<IntSequence> for Vec<i32> {
    #[inline]
    fn from(sequence: IntSequence) -> Self {
        sequence.into_vec()
    }
}

impl FromIterator<i32> for IntSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for IntSequence {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a IntSequence {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[i32]> for IntSequence {
    #[inline]
    fn as_ref(&self) -> &[i32] {
        &self.data
    }
}

impl Index<usize> for IntSequence {
    type Output = i32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for IntSequence {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl fmt::Debug for IntSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.data.iter()).finish()
    }
}

impl fmt::Display for IntSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for IntSequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct IntSequenceVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for IntSequenceVisitor {
    type Value = IntSequence;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of 32-bit integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(IntSequence::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntSequenceVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display / Debug Tests
    // =========================================================================

    #[rstest]
    #[case(vec![], "[]")]
    #[case(vec![42], "[42]")]
    #[case(vec![1, -2, 3], "[1, -2, 3]")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        let sequence = IntSequence::from(elements);
        assert_eq!(format!("{sequence}"), expected);
    }

    #[rstest]
    fn test_debug_formats_as_list() {
        let sequence = IntSequence::from(vec![1, 2]);
        assert_eq!(format!("{sequence:?}"), "[1, 2]");
    }

    // =========================================================================
    // Construction and Access
    // =========================================================================

    #[rstest]
    fn test_new_is_empty() {
        let sequence = IntSequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert_eq!(sequence.first(), None);
        assert_eq!(sequence.last(), None);
    }

    #[rstest]
    fn test_default_equals_new() {
        assert_eq!(IntSequence::default(), IntSequence::new());
    }

    #[rstest]
    fn test_from_array_and_slice_agree() {
        let from_array = IntSequence::from([3, 1, 2]);
        let from_slice = IntSequence::from(&[3, 1, 2][..]);
        assert_eq!(from_array, from_slice);
        assert_eq!(from_array.first(), Some(3));
        assert_eq!(from_array.last(), Some(2));
    }

    #[rstest]
    fn test_collect_from_iterator() {
        let sequence: IntSequence = (0..4).collect();
        assert_eq!(sequence.as_slice(), &[0, 1, 2, 3]);
    }

    #[rstest]
    fn test_index_and_index_mut() {
        let mut sequence = IntSequence::from(vec![1, 2, 3]);
        sequence[1] = 20;
        assert_eq!(sequence[1], 20);
        if let Some(element) = sequence.get_mut(2) {
            *element = 30;
        }
        assert_eq!(sequence.as_slice(), &[1, 20, 30]);
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let sequence = IntSequence::from(vec![1]);
        let _element: i32 = sequence[1];
    }

    #[rstest]
    fn test_get_mut_out_of_bounds_is_none() {
        let mut sequence = IntSequence::from(vec![1]);
        assert!(sequence.get_mut(1).is_none());
    }

    #[rstest]
    fn test_into_iter_yields_index_order() {
        let sequence = IntSequence::from(vec![4, 5, 6]);
        let borrowed: Vec<i32> = (&sequence).into_iter().collect();
        let owned: Vec<i32> = sequence.into_iter().collect();
        assert_eq!(borrowed, vec![4, 5, 6]);
        assert_eq!(owned, vec![4, 5, 6]);
    }

    #[rstest]
    fn test_clone_is_deep() {
        let original = IntSequence::from(vec![1, 2, 3]);
        let mut copy = original.clone();
        copy[0] = 100;
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[100, 2, 3]);
    }

    #[rstest]
    fn test_clone_from_replaces_contents() {
        let source = IntSequence::from(vec![9, 8]);
        let mut target = IntSequence::from(vec![1, 2, 3, 4]);
        target.clone_from(&source);
        assert_eq!(target, source);
    }

    #[rstest]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(IntSequence::from(vec![1, 2]));
        assert!(set.contains(&IntSequence::from(vec![1, 2])));
        assert!(!set.contains(&IntSequence::from(vec![2, 1])));
    }
}
