//! Tokio flavour of [`skip`](super::skip)
//!
//! Async readers have no portable peek, so the head of the stream is read
//! into a small array and whatever is not part of the BOM is replayed in
//! front of the remaining stream.
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bom_core::{detector::nonblocking::skip, registry::UTF16_LE};
//! use tokio::io::AsyncReadExt;
//!
//! let input: &[u8] = &[0xFF, 0xFE, 0x0D, 0x67];
//! let (encoding, mut reader) = skip(input).await?;
//! assert_eq!(encoding, UTF16_LE);
//!
//! let mut rest = Vec::new();
//! reader.read_to_end(&mut rest).await?;
//! assert_eq!(rest, [0x0D, 0x67]);
//! # Ok(())
//! # }
//! ```

use super::SkipError;
use crate::registry::{match_signature, Signature, MAX_SIGNATURE_LEN, MIN_SIGNATURE_LEN, NO_BOM};
use log::{debug, trace};
use std::io::{self, Cursor};
use tokio::io::{AsyncRead, AsyncReadExt, Chain};

/// Reader returned by [`skip`]: unconsumed lookahead followed by the rest
pub type Replay<R> = Chain<Cursor<Vec<u8>>, R>;

/// Result of [`skip`]
pub type SkipResult<R> = core::result::Result<(Signature, Replay<R>), SkipError<Replay<R>>>;

/// Detect and skip a BOM at the head of an async reader
///
/// # Errors
///
/// On a read failure the replay reader, holding every byte read so far,
/// is handed back inside [`SkipError`].
pub async fn skip<R: AsyncRead + Unpin>(mut reader: R) -> SkipResult<R> {
    let mut head = [0u8; MAX_SIGNATURE_LEN];
    let mut filled = 0;

    while filled < head.len() {
        match reader.read(&mut head[filled..]).await {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                let replay = Cursor::new(head[..filled].to_vec()).chain(reader);
                return Err(SkipError::new(err.into(), replay));
            }
        }
    }

    // The widest window the stream could fill is the only one matched.
    let signature = if filled >= MIN_SIGNATURE_LEN {
        trace!("probing {filled}-byte window");
        match_signature(&head[..filled])
    } else {
        trace!("stream shorter than {MIN_SIGNATURE_LEN} bytes");
        NO_BOM
    };

    if signature.is_bom() {
        debug!("skipped {signature} BOM ({} bytes)", signature.len());
    } else {
        debug!("no BOM in leading {filled} bytes");
    }

    let replay = Cursor::new(head[signature.len()..filled].to_vec()).chain(reader);
    Ok((signature, replay))
}
