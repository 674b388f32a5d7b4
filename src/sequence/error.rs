//! Error types for sequence storage management.

/// Represents a rejected resize request.
///
/// Lengths arriving from untrusted sources (for example a count token read
/// from text) are signed; they are validated before any buffer is allocated.
///
/// # Examples
///
/// ```rust
/// use intseq::sequence::{IntSequence, SequenceError};
///
/// let mut sequence = IntSequence::from(vec![1, 2, 3]);
/// let error = sequence.try_reallocate(-4).unwrap_err();
/// assert_eq!(error, SequenceError::NegativeLength { requested: -4 });
/// assert_eq!(
///     format!("{error}"),
///     "cannot resize sequence to negative length -4"
/// );
/// // The sequence is left untouched.
/// assert_eq!(sequence.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested length was below zero.
    NegativeLength {
        /// The length that was requested.
        requested: i64,
    },
    /// The requested length does not fit in this platform's address space.
    LengthTooLarge {
        /// The length that was requested.
        requested: i64,
    },
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeLength { requested } => {
                write!(formatter, "cannot resize sequence to negative length {requested}")
            }
            Self::LengthTooLarge { requested } => {
                write!(
                    formatter,
                    "cannot resize sequence to length {requested}: exceeds addressable size"
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}

impl SequenceError {
    /// Validates a signed length request.
    ///
    /// A length is accepted only if its buffer size in bytes fits in
    /// `isize::MAX`, the largest allocation the platform permits.
    pub(crate) fn check_length(requested: i64) -> Result<usize, Self> {
        if requested < 0 {
            return Err(Self::NegativeLength { requested });
        }
        usize::try_from(requested)
            .ok()
            .filter(|&length| {
                length
                    .checked_mul(size_of::<i32>())
                    .is_some_and(|bytes| isize::try_from(bytes).is_ok())
            })
            .ok_or(Self::LengthTooLarge { requested })
    }
}
