//! BOM detection and skipping on byte streams
//!
//! [`skip`] wraps a reader in a [`StreamCursor`], probes the head of the
//! stream for a known signature and consumes it if found. The returned
//! cursor is positioned right after the BOM, or at the very start of the
//! stream when there was none.
//!
//! Probing tries the widest window first (4 bytes) and narrows to 3 and
//! then 2 only when the stream is too short. A 2-byte probe alone would
//! report `FF FE 00 00` as UTF-16LE.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Read;
//! use bom_core::{detector::skip, registry::UTF8};
//!
//! let input: &[u8] = b"\xEF\xBB\xBFHello";
//! let (encoding, mut cursor) = skip(input)?;
//! assert_eq!(encoding, UTF8);
//!
//! let mut rest = String::new();
//! cursor.read_to_string(&mut rest)?;
//! assert_eq!(rest, "Hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cursor;
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod nonblocking;

pub use cursor::{StreamCursor, DEFAULT_CAPACITY};

use crate::{
    registry::{match_signature, Signature, MAX_SIGNATURE_LEN, MIN_SIGNATURE_LEN, NO_BOM},
    utils::errors::{BomError, Result},
};
use log::{debug, trace};
use std::{
    fmt,
    io::{self, Read},
};

/// Outcome of probing a stream for a BOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Matched signature or the `NO_BOM` sentinel
    signature: Signature,
    /// Size of the lookahead window that was examined
    examined: usize,
}

impl Detection {
    /// Detected signature, `NO_BOM` if none matched
    #[must_use]
    pub const fn signature(&self) -> Signature {
        self.signature
    }

    /// Number of leading bytes the match was run against
    ///
    /// Zero when the stream held fewer bytes than the shortest BOM.
    #[must_use]
    pub const fn examined(&self) -> usize {
        self.examined
    }

    /// True when the stream was too short to hold any BOM
    ///
    /// Such streams still report `NO_BOM`; this only tells them apart
    /// from streams whose head was examined and found BOM-free.
    #[must_use]
    pub const fn was_inconclusive(&self) -> bool {
        self.examined == 0
    }
}

impl<R: Read> StreamCursor<R> {
    /// Detect a BOM at the current position and consume it
    ///
    /// Without a match nothing is consumed and every peeked byte remains
    /// available to later reads.
    ///
    /// # Errors
    ///
    /// Returns [`BomError::Io`] for reader failures other than end of
    /// input, and [`BomError::Truncated`] if consuming the matched BOM
    /// yields fewer bytes than were peeked.
    pub fn skip_bom(&mut self) -> Result<Detection> {
        for window in (MIN_SIGNATURE_LEN..=MAX_SIGNATURE_LEN).rev() {
            let signature = match self.peek(window) {
                Ok(probe) => match_signature(probe),
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    trace!("stream shorter than {window} bytes, narrowing window");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if !signature.is_bom() {
                debug!("no BOM in leading {window} bytes");
                return Ok(Detection {
                    signature: NO_BOM,
                    examined: window,
                });
            }

            let mut bom = [0u8; MAX_SIGNATURE_LEN];
            let bom = &mut bom[..signature.len()];
            let read = self.read(bom)?;
            if read != signature.len() {
                return Err(BomError::truncated(signature.len(), read));
            }

            debug!("skipped {signature} BOM ({read} bytes)");
            return Ok(Detection {
                signature,
                examined: window,
            });
        }

        debug!("fewer than {MIN_SIGNATURE_LEN} bytes available, no BOM");
        Ok(Detection {
            signature: NO_BOM,
            examined: 0,
        })
    }
}

/// Result of [`skip`]: the encoding and the cursor, or the error and the cursor
pub type SkipResult<R> =
    core::result::Result<(Signature, StreamCursor<R>), SkipError<StreamCursor<R>>>;

/// Detect and skip a BOM at the head of `reader`
///
/// Returns the detected encoding (`NO_BOM` if none) and a cursor
/// positioned after the BOM.
///
/// # Errors
///
/// On a read failure the cursor is handed back inside [`SkipError`]; the
/// encoding is indeterminate in that case.
pub fn skip<R: Read>(reader: R) -> SkipResult<R> {
    skip_with_capacity(DEFAULT_CAPACITY, reader)
}

/// Like [`skip`], with a cursor buffer of `capacity` bytes
///
/// # Errors
///
/// Same as [`skip`].
pub fn skip_with_capacity<R: Read>(capacity: usize, reader: R) -> SkipResult<R> {
    let mut cursor = StreamCursor::with_capacity(capacity, reader);
    match cursor.skip_bom() {
        Ok(detection) => Ok((detection.signature(), cursor)),
        Err(error) => Err(SkipError::new(error, cursor)),
    }
}

/// A failed skip, carrying the cursor so the caller keeps the stream
pub struct SkipError<C> {
    /// What went wrong
    error: BomError,
    /// The cursor in whatever state the failure left it
    cursor: C,
}

impl<C> SkipError<C> {
    pub(crate) const fn new(error: BomError, cursor: C) -> Self {
        Self { error, cursor }
    }

    /// The underlying error
    #[must_use]
    pub const fn error(&self) -> &BomError {
        &self.error
    }

    /// Encoding to report for a failed skip, always `NO_BOM`
    #[must_use]
    pub const fn encoding(&self) -> Signature {
        NO_BOM
    }

    /// Recover the cursor, dropping the error
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Split into the error and the cursor
    pub fn into_parts(self) -> (BomError, C) {
        (self.error, self.cursor)
    }
}

impl<C> fmt::Debug for SkipError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<C> fmt::Display for SkipError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<C> std::error::Error for SkipError<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<C> From<SkipError<C>> for BomError {
    fn from(err: SkipError<C>) -> Self {
        err.error
    }
}

impl<C> From<SkipError<C>> for io::Error {
    fn from(err: SkipError<C>) -> Self {
        err.error.into()
    }
}
