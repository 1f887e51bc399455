//! Bounded write cursor over a caller-owned byte buffer.
//!
//! [`WriteCursor`] replaces raw pointer-plus-remaining-length
//! bookkeeping with a checked span: each primitive either copies its
//! bytes in full or fails with [`EncodeError::BufferTooSmall`] without
//! touching the buffer. The cursor never retains the buffer past the
//! borrow and never writes beyond its end.

use crate::error::EncodeError;

/// Incremental writer into a fixed-capacity byte span.
///
/// Tracks bytes written and bytes remaining for one encoding call.
/// Writes are all-or-nothing at the granularity of each `put_*` call;
/// bytes committed by earlier calls stay in place when a later call
/// fails.
pub struct WriteCursor<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> WriteCursor<'a> {
    /// Create a cursor over `buf`, starting at offset zero.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, written: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.written
    }

    /// Append `bytes` in full, or fail without writing.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let remaining = self.remaining();
        if bytes.len() > remaining {
            return Err(EncodeError::BufferTooSmall {
                needed: bytes.len(),
                remaining,
            });
        }
        self.buf[self.written..self.written + bytes.len()].copy_from_slice(bytes);
        self.written += bytes.len();
        Ok(())
    }

    /// Append a single byte.
    pub fn put_byte(&mut self, byte: u8) -> Result<(), EncodeError> {
        self.put_bytes(&[byte])
    }

    /// Append the UTF-8 bytes of `text`.
    pub fn put_str(&mut self, text: &str) -> Result<(), EncodeError> {
        self.put_bytes(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_advance_the_cursor() {
        let mut buf = [0u8; 8];
        let mut cur = WriteCursor::new(&mut buf);
        cur.put_str("ab").unwrap();
        cur.put_byte(b'c').unwrap();
        assert_eq!(cur.written(), 3);
        assert_eq!(cur.remaining(), 5);
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn exact_fit_succeeds() {
        let mut buf = [0u8; 4];
        let mut cur = WriteCursor::new(&mut buf);
        cur.put_bytes(b"abcd").unwrap();
        assert_eq!(cur.remaining(), 0);
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn overflow_fails_without_partial_write() {
        let mut buf = [0u8; 3];
        let mut cur = WriteCursor::new(&mut buf);
        cur.put_str("ab").unwrap();
        let err = cur.put_str("cd").unwrap_err();
        assert_eq!(
            err,
            EncodeError::BufferTooSmall {
                needed: 2,
                remaining: 1,
            }
        );
        // The failing call wrote nothing; earlier bytes remain.
        assert_eq!(cur.written(), 2);
        assert_eq!(&buf[..2], b"ab");
        assert_eq!(buf[2], 0);
    }

    #[test]
    fn empty_write_always_fits() {
        let mut buf = [0u8; 0];
        let mut cur = WriteCursor::new(&mut buf);
        cur.put_bytes(b"").unwrap();
        assert_eq!(cur.written(), 0);
    }

    #[test]
    fn cursor_can_keep_writing_after_failure() {
        let mut buf = [0u8; 3];
        let mut cur = WriteCursor::new(&mut buf);
        cur.put_str("ab").unwrap();
        assert!(cur.put_str("cd").is_err());
        // A smaller write still fits in the space the failure left.
        cur.put_byte(b'x').unwrap();
        assert_eq!(&buf, b"abx");
    }
}
