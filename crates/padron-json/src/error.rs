//! Serializer error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while encoding into a bounded buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The next write does not fit in the remaining buffer capacity.
    ///
    /// Bytes written by earlier steps remain in the buffer; only the
    /// returned error is authoritative about the call's outcome.
    BufferTooSmall {
        /// Bytes the failing write required.
        needed: usize,
        /// Bytes that were still available.
        remaining: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, remaining } => {
                write!(
                    f,
                    "buffer too small: next write needs {needed} bytes, {remaining} remaining"
                )
            }
        }
    }
}

impl Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reports_both_sizes() {
        let err = EncodeError::BufferTooSmall {
            needed: 10,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "buffer too small: next write needs 10 bytes, 3 remaining"
        );
    }
}
