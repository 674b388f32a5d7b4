//! Text reading and writing for [`IntSequence`].
//!
//! The text format is a count followed by that many integers, all as
//! whitespace-separated tokens. Line breaks carry no meaning, and several
//! sequences can be read back to back from one stream.
//!
//! Output is every element followed by a single space.
//!
//! # Examples
//!
//! ```rust
//! use intseq::io::IntegerTokens;
//! use intseq::sequence::{IntSequence, SortDirection};
//!
//! let input = "3\n5 3 1\n2\n2 4\n";
//! let mut tokens = IntegerTokens::new(input.as_bytes());
//!
//! let mut first = IntSequence::new();
//! let mut second = IntSequence::new();
//! first.read_from(&mut tokens).unwrap();
//! second.read_from(&mut tokens).unwrap();
//!
//! first.merge(&second, SortDirection::Ascending);
//!
//! let mut output = Vec::new();
//! first.write_to(&mut output).unwrap();
//! assert_eq!(output, b"1 2 3 4 5 ");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::sequence::{IntSequence, SequenceError};

/// Upper bound on slots reserved up front for an announced count; the rest
/// grows as elements actually arrive.
const MAX_PREALLOCATE: usize = 4096;

// =============================================================================
// ReadError
// =============================================================================

/// Represents a failure to read a sequence from text.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The stream ended before the element count.
    MissingLength,
    /// A token could not be parsed as an integer of the expected width.
    InvalidToken {
        /// The offending token.
        token: String,
        /// One-based position of the token in the stream.
        position: usize,
    },
    /// The stream ended before all announced elements were read.
    UnexpectedEnd {
        /// Number of elements announced by the count.
        expected: usize,
        /// Number of elements actually read.
        found: usize,
    },
    /// The announced count is not a valid length.
    Length(SequenceError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "failed to read input: {error}"),
            Self::MissingLength => write!(formatter, "input ended before the element count"),
            Self::InvalidToken { token, position } => {
                write!(formatter, "token {position} is not an integer: {token:?}")
            }
            Self::UnexpectedEnd { expected, found } => {
                write!(formatter, "input ended after {found} of {expected} elements")
            }
            Self::Length(error) => write!(formatter, "invalid element count: {error}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Length(error) => Some(error),
            Self::MissingLength | Self::InvalidToken { .. } | Self::UnexpectedEnd { .. } => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<SequenceError> for ReadError {
    fn from(error: SequenceError) -> Self {
        Self::Length(error)
    }
}

// =============================================================================
// IntegerTokens
// =============================================================================

/// A stream of whitespace-separated integer tokens.
///
/// Lines are pulled from the underlying reader only when the buffered tokens
/// run out, so the remainder of the stream stays available for the next
/// read.
pub struct IntegerTokens<R> {
    reader: R,
    pending: VecDeque<String>,
    /// Number of tokens handed out so far
    position: usize,
}

impl<R: BufRead> IntegerTokens<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Returns the next raw token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the underlying reader fails.
    pub fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        self.position += 1;
        Ok(self.pending.pop_front())
    }

    /// Parses the next token as `T`, or returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidToken`] if the token does not parse, or
    /// [`ReadError::Io`] if the underlying reader fails.
    pub fn next_integer<T: std::str::FromStr>(&mut self) -> Result<Option<T>, ReadError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        token.parse().map(Some).map_err(|_| ReadError::InvalidToken {
            token,
            position: self.position,
        })
    }

    /// Returns the number of tokens consumed so far.
    pub const fn position(&self) -> usize {
        self.position
    }
}

// =============================================================================
// IntSequence read / write
// =============================================================================

impl IntSequence {
    /// Reads a count and then that many elements, replacing all contents.
    ///
    /// The new contents are assembled separately and committed only when the
    /// whole sequence was read, so on error `self` is unchanged. Storage is
    /// reserved for at most a bounded number of slots before the elements
    /// themselves arrive.
    ///
    /// # Errors
    ///
    /// - [`ReadError::MissingLength`] if the stream is exhausted
    /// - [`ReadError::Length`] if the count is negative or too large to allocate
    /// - [`ReadError::InvalidToken`] if a token is not an integer
    /// - [`ReadError::UnexpectedEnd`] if fewer elements than announced follow
    /// - [`ReadError::Io`] if the underlying reader fails
    pub fn read_from<R: BufRead>(
        &mut self,
        tokens: &mut IntegerTokens<R>,
    ) -> Result<(), ReadError> {
        let requested: i64 = tokens.next_integer()?.ok_or(ReadError::MissingLength)?;
        let expected = SequenceError::check_length(requested)?;

        let mut incoming: Vec<i32> = Vec::with_capacity(expected.min(MAX_PREALLOCATE));
        while incoming.len() < expected {
            let element = tokens
                .next_integer()?
                .ok_or_else(|| ReadError::UnexpectedEnd {
                    expected,
                    found: incoming.len(),
                })?;
            incoming.push(element);
        }

        tracing::debug!(length = expected, "read sequence");
        *self = Self::from(incoming);
        Ok(())
    }

    /// Writes every element followed by a single space.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `writer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intseq::sequence::IntSequence;
    ///
    /// let mut output = Vec::new();
    /// IntSequence::from(vec![3, -1]).write_to(&mut output).unwrap();
    /// assert_eq!(String::from_utf8(output).unwrap(), "3 -1 ");
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for element in self {
            write!(writer, "{element} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(input: &str) -> IntegerTokens<&[u8]> {
        IntegerTokens::new(input.as_bytes())
    }

    #[rstest]
    fn test_next_token_spans_lines() {
        let mut stream = tokens("1 2\n\n  3\n");
        assert_eq!(stream.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(stream.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(stream.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(stream.next_token().unwrap(), None);
        assert_eq!(stream.position(), 3);
    }

    #[rstest]
    fn test_next_integer_rejects_garbage() {
        let mut stream = tokens("4 x");
        assert_eq!(stream.next_integer::<i32>().unwrap(), Some(4));
        let error = stream.next_integer::<i32>().unwrap_err();
        assert!(matches!(
            error,
            ReadError::InvalidToken { ref token, position: 2 } if token == "x"
        ));
    }

    #[rstest]
    fn test_read_replaces_contents() {
        let mut sequence = IntSequence::from(vec![9, 9, 9, 9]);
        sequence.read_from(&mut tokens("2 5 6")).unwrap();
        assert_eq!(sequence.as_slice(), &[5, 6]);
    }

    #[rstest]
    fn test_read_zero_count_empties() {
        let mut sequence = IntSequence::from(vec![1]);
        sequence.read_from(&mut tokens("0")).unwrap();
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_read_two_sequences_from_one_stream() {
        let mut stream = tokens("2\n1 2\n3\n4 5 6\n");
        let mut first = IntSequence::new();
        let mut second = IntSequence::new();
        first.read_from(&mut stream).unwrap();
        second.read_from(&mut stream).unwrap();
        assert_eq!(first.as_slice(), &[1, 2]);
        assert_eq!(second.as_slice(), &[4, 5, 6]);
    }

    #[rstest]
    fn test_read_empty_input_is_missing_length() {
        let mut sequence = IntSequence::new();
        let error = sequence.read_from(&mut tokens("  \n")).unwrap_err();
        assert!(matches!(error, ReadError::MissingLength));
    }

    #[rstest]
    fn test_read_negative_count_is_rejected() {
        let mut sequence = IntSequence::from(vec![1, 2]);
        let error = sequence.read_from(&mut tokens("-3 1 2 3")).unwrap_err();
        assert!(matches!(
            error,
            ReadError::Length(SequenceError::NegativeLength { requested: -3 })
        ));
        assert_eq!(sequence.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_read_unaddressable_count_is_rejected() {
        let mut sequence = IntSequence::from(vec![4]);
        let error = sequence
            .read_from(&mut tokens("9223372036854775807 1"))
            .unwrap_err();
        assert!(matches!(
            error,
            ReadError::Length(SequenceError::LengthTooLarge {
                requested: i64::MAX
            })
        ));
        assert_eq!(sequence.as_slice(), &[4]);
    }

    #[rstest]
    fn test_read_short_input_leaves_sequence_unchanged() {
        let mut sequence = IntSequence::from(vec![7]);
        let error = sequence.read_from(&mut tokens("3 1 2")).unwrap_err();
        assert!(matches!(
            error,
            ReadError::UnexpectedEnd {
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(sequence.as_slice(), &[7]);
    }

    #[rstest]
    fn test_read_huge_count_with_short_input_fails_without_allocating() {
        let mut sequence = IntSequence::new();
        let error = sequence
            .read_from(&mut tokens("1000000000000 1"))
            .unwrap_err();
        assert!(matches!(
            error,
            ReadError::UnexpectedEnd {
                expected: 1_000_000_000_000,
                found: 1
            }
        ));
    }

    #[rstest]
    fn test_read_out_of_range_element_is_invalid() {
        let mut sequence = IntSequence::new();
        let error = sequence.read_from(&mut tokens("1 4294967296")).unwrap_err();
        assert!(matches!(error, ReadError::InvalidToken { position: 2, .. }));
    }

    #[rstest]
    fn test_write_to_trailing_space() {
        let mut output = Vec::new();
        IntSequence::from(vec![1, 2, 3]).write_to(&mut output).unwrap();
        assert_eq!(output, b"1 2 3 ");
    }

    #[rstest]
    fn test_write_empty_writes_nothing() {
        let mut output = Vec::new();
        IntSequence::new().write_to(&mut output).unwrap();
        assert!(output.is_empty());
    }

    #[rstest]
    fn test_read_error_display_and_source() {
        use std::error::Error;

        let error = ReadError::from(SequenceError::NegativeLength { requested: -1 });
        assert_eq!(
            error.to_string(),
            "invalid element count: cannot resize sequence to negative length -1"
        );
        assert!(error.source().is_some());

        let error = ReadError::UnexpectedEnd {
            expected: 3,
            found: 1,
        };
        assert_eq!(error.to_string(), "input ended after 1 of 3 elements");
        assert!(error.source().is_none());
    }
}
