//! Error types for big-integer arithmetic, parsing and stream input.
//!
//! Arithmetic failures are raised at the point of violation and leave
//! the receiver untouched; nothing inside the engine retries or recovers.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from arithmetic and narrowing operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithError {
    /// The divisor of a division or remainder was the zero value.
    DivisionByZero,
    /// A subtraction would have produced a negative result.
    Underflow,
    /// A multi-block value was narrowed to a single native word.
    Overflow {
        /// Number of blocks the value actually occupies.
        blocks: usize,
    },
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Underflow => write!(f, "subtraction result would be negative"),
            Self::Overflow { blocks } => {
                write!(f, "value spans {blocks} blocks and does not fit one word")
            }
        }
    }
}

impl Error for ArithError {}

/// Errors from decimal string construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no digits.
    Empty,
    /// A byte that is not an ASCII decimal digit.
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse integer from empty string"),
            Self::InvalidDigit { index, byte } => {
                write!(
                    f,
                    "invalid digit {:?} at byte {index}",
                    char::from(*byte)
                )
            }
        }
    }
}

impl Error for ParseError {}

/// Errors from reading a value out of a byte stream.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The stream ended before any non-whitespace byte was found.
    UnexpectedEof,
    /// The token read from the stream is not a decimal integer.
    Parse(ParseError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "unexpected end of stream"),
            Self::Parse(e) => write!(f, "malformed token: {e}"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::UnexpectedEof => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseError> for ReadError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message_names_block_count() {
        let e = ArithError::Overflow { blocks: 3 };
        assert_eq!(e.to_string(), "value spans 3 blocks and does not fit one word");
    }

    #[test]
    fn invalid_digit_message_shows_char() {
        let e = ParseError::InvalidDigit { index: 4, byte: b'x' };
        assert_eq!(e.to_string(), "invalid digit 'x' at byte 4");
    }

    #[test]
    fn read_error_chains_source() {
        let e = ReadError::from(ParseError::Empty);
        let source = e.source().expect("parse errors carry a source");
        assert_eq!(source.to_string(), ParseError::Empty.to_string());
        assert!(ReadError::UnexpectedEof.source().is_none());
    }

    #[test]
    fn io_error_converts() {
        let e: ReadError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(e, ReadError::Io(_)));
    }
}
