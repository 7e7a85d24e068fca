//! Error types for BOM detection and skipping
//!
//! Only genuine failures surface here. A stream without a BOM, or one too
//! short to hold one, is a successful outcome carrying the `NO_BOM`
//! sentinel and never produces a `BomError`.
//!
//! # Examples
//!
//! ```rust
//! use bom_core::utils::errors::{BomError, ErrorCategory};
//!
//! let err = BomError::truncated(4, 1);
//! assert_eq!(err.category(), ErrorCategory::Consistency);
//! assert!(err.to_string().contains("expected 4"));
//! ```

mod category;

pub use category::ErrorCategory;

use std::io;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, BomError>;

/// Failure while detecting or skipping a BOM
#[derive(Debug, Error)]
pub enum BomError {
    /// The underlying reader failed with something other than end-of-input
    #[error("I/O error while probing for BOM: {0}")]
    Io(#[from] io::Error),

    /// The consuming read after a match returned fewer bytes than the BOM
    #[error("BOM read truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Length of the matched signature
        expected: usize,
        /// Bytes the reader actually produced
        actual: usize,
    },
}

impl BomError {
    /// Create a truncation error for a short consuming read
    #[must_use]
    pub const fn truncated(expected: usize, actual: usize) -> Self {
        Self::Truncated { expected, actual }
    }

    /// Get the category this error belongs to
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) => ErrorCategory::Io,
            Self::Truncated { .. } => ErrorCategory::Consistency,
        }
    }

    /// The `io::ErrorKind` behind this error, if it came from the reader
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind()),
            Self::Truncated { .. } => None,
        }
    }
}

impl From<BomError> for io::Error {
    fn from(err: BomError) -> Self {
        match err {
            BomError::Io(inner) => inner,
            truncated @ BomError::Truncated { .. } => {
                Self::new(io::ErrorKind::UnexpectedEof, truncated)
            }
        }
    }
}
