//! Storage management: construction with a length, resizing, and append.

use super::{IntSequence, SequenceError};

impl IntSequence {
    /// Creates a sequence of `length` zeroes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let sequence = IntSequence::with_length(3);
    /// assert_eq!(sequence.as_slice(), &[0, 0, 0]);
    /// ```
    #[must_use]
    pub fn with_length(length: usize) -> Self {
        Self {
            data: vec![0; length].into_boxed_slice(),
        }
    }

    /// Creates a sequence of `requested` zeroes, validating the length first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NegativeLength`] if `requested` is negative,
    /// or [`SequenceError::LengthTooLarge`] if it cannot be addressed.
    pub fn try_with_length(requested: i64) -> Result<Self, SequenceError> {
        let length = SequenceError::check_length(requested)?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(length)
            .map_err(|_| SequenceError::LengthTooLarge { requested })?;
        buffer.resize(length, 0);
        Ok(Self {
            data: buffer.into_boxed_slice(),
        })
    }

    /// Resizes the sequence to exactly `new_length` elements.
    ///
    /// A fresh zeroed buffer is allocated, the common prefix
    /// `[0, min(len, new_length))` is copied over, and the old buffer is
    /// released. Growing zero-fills the new slots; shrinking discards the
    /// truncated elements.
    ///
    /// # Complexity
    ///
    /// O(max(len, `new_length`))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let mut sequence = IntSequence::from(vec![1, 2, 3]);
    /// sequence.reallocate(5);
    /// assert_eq!(sequence.as_slice(), &[1, 2, 3, 0, 0]);
    ///
    /// sequence.reallocate(2);
    /// assert_eq!(sequence.as_slice(), &[1, 2]);
    ///
    /// sequence.reallocate(0);
    /// assert!(sequence.is_empty());
    /// ```
    pub fn reallocate(&mut self, new_length: usize) {
        self.replace_preserving_prefix(Self::with_length(new_length));
    }

    /// Resizes the sequence to `requested` elements after validating the length.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NegativeLength`] if `requested` is negative,
    /// or [`SequenceError::LengthTooLarge`] if it cannot be addressed. The
    /// sequence is unchanged on error.
    pub fn try_reallocate(&mut self, requested: i64) -> Result<(), SequenceError> {
        let resized = Self::try_with_length(requested)?;
        self.replace_preserving_prefix(resized);
        Ok(())
    }

    /// Copies the common prefix into the zeroed `resized` buffer and adopts it.
    fn replace_preserving_prefix(&mut self, mut resized: Self) {
        let preserved = self.len().min(resized.len());
        resized.data[..preserved].copy_from_slice(&self.data[..preserved]);

        tracing::trace!(
            old_length = self.len(),
            new_length = resized.len(),
            preserved,
            "reallocated sequence"
        );
        *self = resized;
    }

    /// Appends `value` as the new last element.
    ///
    /// Every call reallocates the buffer to exactly one more slot, so a push
    /// costs O(N). Use [`FromIterator`] or [`IntSequence::reallocate`] to
    /// build large sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let mut sequence = IntSequence::new();
    /// sequence.push_back(7);
    /// sequence.push_back(2);
    /// assert_eq!(sequence.as_slice(), &[7, 2]);
    /// ```
    pub fn push_back(&mut self, value: i32) {
        let new_length = self.len() + 1;
        self.reallocate(new_length);
        self.data[new_length - 1] = value;
    }

    /// Moves the contents out, leaving this sequence empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let mut source = IntSequence::from(vec![1, 2]);
    /// let target = source.take();
    /// assert_eq!(target.as_slice(), &[1, 2]);
    /// assert!(source.is_empty());
    /// ```
    #[must_use = "the taken contents are dropped if unused; use `clear` to discard them"]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Releases the buffer, leaving the sequence empty.
    pub fn clear(&mut self) {
        self.data = Box::default();
    }
}

impl Extend<i32> for IntSequence {
    /// Appends every element of `iter` with a single reallocation.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let appended: Vec<i32> = iter.into_iter().collect();
        if appended.is_empty() {
            return;
        }
        let offset = self.len();
        self.reallocate(offset + appended.len());
        self.data[offset..].copy_from_slice(&appended);
    }
}
