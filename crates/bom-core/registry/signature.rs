//! Immutable BOM signature record

use core::{
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(feature = "std")]
use std::io;

/// A known Byte Order Mark: display name plus exact byte sequence
///
/// Identity is the byte sequence; the name is only a label. Two
/// signatures with equal bytes compare equal regardless of name.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signature {
    /// Human readable encoding name
    name: &'static str,
    /// Exact BOM bytes, empty for the sentinel
    bytes: &'static [u8],
}

impl Signature {
    /// Build a signature record
    pub(crate) const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }

    /// Get the display name of the encoding
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the BOM bytes
    #[must_use]
    pub const fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Number of bytes the BOM occupies at the head of a stream
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True only for the `NO_BOM` sentinel
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when this is a real catalog entry rather than the sentinel
    #[must_use]
    pub const fn is_bom(&self) -> bool {
        !self.is_empty()
    }

    /// Write the BOM bytes to `writer`
    ///
    /// Writing the sentinel writes nothing.
    ///
    /// # Errors
    ///
    /// Propagates any error from the writer.
    #[cfg(feature = "std")]
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.bytes)
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}
