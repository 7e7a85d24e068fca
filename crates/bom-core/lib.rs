//! # bom-core
//!
//! Byte Order Mark detection for byte streams. Identifies which Unicode
//! encoding a leading BOM announces and hands back a reader positioned
//! just past it, ready for decoding.
//!
//! ## Features
//!
//! - **Fixed catalog**: UTF-32BE/LE, UTF-8, UTF-16BE/LE, matched longest first
//! - **Lossless lookahead**: without a BOM every peeked byte is still readable
//! - **Short streams**: 2 and 3 byte inputs can still carry a full short BOM
//! - **Async**: tokio readers behind the `async` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Read;
//! use bom_core::{skip, UTF16_BE};
//!
//! let input: &[u8] = &[0xFE, 0xFF, 0x67, 0x0D, 0x52, 0xA1];
//! let (encoding, mut reader) = skip(input)?;
//! assert_eq!(encoding, UTF16_BE);
//! assert_eq!(encoding.name(), "UTF-16, big-endian");
//!
//! let mut rest = Vec::new();
//! reader.read_to_end(&mut rest)?;
//! assert_eq!(rest, [0x67, 0x0D, 0x52, 0xA1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Detection never fails for lack of a BOM; that outcome is the
//! [`NO_BOM`] sentinel. Errors are reserved for failing readers.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod registry;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod detector;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod utils;

pub use registry::{
    all_signatures, match_signature, strip_bom, Signature, NO_BOM, UTF16_BE, UTF16_LE, UTF32_BE,
    UTF32_LE, UTF8,
};

#[cfg(feature = "std")]
pub use detector::{skip, skip_with_capacity, Detection, SkipError, StreamCursor};

#[cfg(feature = "std")]
pub use utils::{BomError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
