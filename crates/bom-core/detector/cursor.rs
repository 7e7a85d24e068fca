//! Buffered reader with non-destructive lookahead
//!
//! `std::io::BufReader` cannot be asked to hold *at least* `n` bytes
//! without consuming them, which BOM probing needs. `StreamCursor` is a
//! small buffered reader that can.

use crate::registry::MAX_SIGNATURE_LEN;
use std::{
    fmt,
    io::{self, BufRead, Read},
};

/// Default buffer size for a new cursor
pub const DEFAULT_CAPACITY: usize = 8 * 1024;

/// Buffered reader supporting `peek(n)`
///
/// Once a reader is wrapped, all further reads must go through the cursor:
/// it may already hold bytes the wrapped reader has handed over.
pub struct StreamCursor<R> {
    /// Wrapped byte source
    inner: R,
    /// Backing storage, never shorter than the widest BOM window
    buf: Box<[u8]>,
    /// Start of unread data in `buf`
    pos: usize,
    /// End of valid data in `buf`
    filled: usize,
}

impl<R: Read> StreamCursor<R> {
    /// Wrap `inner` with the default capacity
    pub fn new(inner: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Wrap `inner` with a buffer of `capacity` bytes
    ///
    /// Capacities smaller than the longest BOM are rounded up so a full
    /// signature can always be peeked.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        let capacity = capacity.max(MAX_SIGNATURE_LEN);
        Self {
            inner,
            buf: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            filled: 0,
        }
    }

    /// Return the next `n` bytes without consuming them
    ///
    /// Reads from the wrapped reader until `n` bytes are buffered.
    ///
    /// # Errors
    ///
    /// `ErrorKind::UnexpectedEof` if the stream ends first; the bytes read
    /// so far stay buffered. `ErrorKind::InvalidInput` if `n` exceeds the
    /// capacity. Any other error from the wrapped reader is returned as is.
    pub fn peek(&mut self, n: usize) -> io::Result<&[u8]> {
        if n > self.buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("peek of {n} bytes exceeds capacity {}", self.buf.len()),
            ));
        }

        if self.filled - self.pos < n {
            self.buf.copy_within(self.pos..self.filled, 0);
            self.filled -= self.pos;
            self.pos = 0;

            while self.filled < n {
                match self.inner.read(&mut self.buf[self.filled..]) {
                    Ok(0) => {
                        return Err(io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            format!("stream ended after {} of {n} bytes", self.filled),
                        ));
                    }
                    Ok(read) => self.filled += read,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(&self.buf[self.pos..self.pos + n])
    }
}

impl<R> StreamCursor<R> {
    /// Bytes buffered but not yet consumed
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buf[self.pos..self.filled]
    }

    /// Size of the internal buffer
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reference to the wrapped reader
    #[must_use]
    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutable reference to the wrapped reader
    ///
    /// Reading from it directly skips over whatever the cursor has buffered.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the reader, discarding buffered bytes
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for StreamCursor<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        // Large reads on an empty buffer go straight to the source.
        if self.pos == self.filled && out.len() >= self.buf.len() {
            return self.inner.read(out);
        }

        let copied = {
            let available = self.fill_buf()?;
            let copied = available.len().min(out.len());
            out[..copied].copy_from_slice(&available[..copied]);
            copied
        };
        self.consume(copied);
        Ok(copied)
    }
}

impl<R: Read> BufRead for StreamCursor<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.filled {
            self.pos = 0;
            self.filled = 0;
            loop {
                match self.inner.read(&mut self.buf) {
                    Ok(read) => {
                        self.filled = read;
                        break;
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(&self.buf[self.pos..self.filled])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.filled);
    }
}

impl<R: fmt::Debug> fmt::Debug for StreamCursor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor")
            .field("inner", &self.inner)
            .field("buffer", &format_args!("{}/{}", self.filled - self.pos, self.buf.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Reader handing out one byte per call
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match (self.0.split_first(), out.first_mut()) {
                (Some((&byte, rest)), Some(slot)) => {
                    *slot = byte;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = StreamCursor::new(&b"abcdef"[..]);
        assert_eq!(cursor.peek(3).unwrap(), b"abc");
        assert_eq!(cursor.peek(2).unwrap(), b"ab");

        let mut rest = Vec::new();
        cursor.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"abcdef");
    }

    #[test]
    fn peek_accumulates_short_reads() {
        let mut cursor = StreamCursor::new(Trickle(b"wxyz!"));
        assert_eq!(cursor.peek(4).unwrap(), b"wxyz");
        assert_eq!(cursor.buffer(), b"wxyz");
    }

    #[test]
    fn peek_past_end_keeps_bytes() {
        let mut cursor = StreamCursor::new(&b"ab"[..]);
        let err = cursor.peek(4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(cursor.buffer(), b"ab");
        assert_eq!(cursor.peek(2).unwrap(), b"ab");
    }

    #[test]
    fn peek_after_partial_consume_compacts() {
        let mut cursor = StreamCursor::with_capacity(4, &b"123456"[..]);
        assert_eq!(cursor.capacity(), 4);
        assert_eq!(cursor.peek(4).unwrap(), b"1234");
        cursor.consume(3);
        assert_eq!(cursor.peek(3).unwrap(), b"456");
    }

    #[test]
    fn peek_beyond_capacity_is_rejected() {
        let mut cursor = StreamCursor::with_capacity(4, &b"123456"[..]);
        let err = cursor.peek(5).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn tiny_capacity_rounds_up() {
        let cursor = StreamCursor::with_capacity(1, io::empty());
        assert_eq!(cursor.capacity(), MAX_SIGNATURE_LEN);
    }

    #[test]
    fn large_reads_bypass_buffer() {
        let data = vec![7u8; 64];
        let mut cursor = StreamCursor::with_capacity(8, &data[..]);
        let mut out = [0u8; 32];
        assert_eq!(cursor.read(&mut out).unwrap(), 32);
        assert!(cursor.buffer().is_empty());
    }

    #[test]
    fn buffered_lines() {
        let cursor = StreamCursor::with_capacity(4, &b"one\ntwo\n"[..]);
        let lines: Vec<String> = cursor.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn debug_shows_fill_level() {
        let mut cursor = StreamCursor::with_capacity(4, &b"ab"[..]);
        let _ = cursor.peek(2);
        let debug = format!("{cursor:?}");
        assert!(debug.contains("2/4"));
    }
}
