//! Catalog of known Byte Order Mark signatures
//!
//! The catalog is a fixed, ordered table consulted by plain prefix
//! comparison. Entries that share a prefix are listed longest first:
//! UTF-32LE (`FF FE 00 00`) must precede UTF-16LE (`FF FE`), otherwise a
//! UTF-32LE stream would be reported as UTF-16LE.
//!
//! # Examples
//!
//! ```rust
//! use bom_core::registry::{match_signature, strip_bom, NO_BOM, UTF32_LE, UTF8};
//!
//! assert_eq!(match_signature(&[0xFF, 0xFE, 0x00, 0x00]), UTF32_LE);
//! assert_eq!(match_signature(b"plain text"), NO_BOM);
//!
//! let (signature, rest) = strip_bom(b"\xEF\xBB\xBFHello");
//! assert_eq!(signature, UTF8);
//! assert_eq!(rest, b"Hello");
//! ```

mod signature;

pub use signature::Signature;

/// BOM of UTF-32, big-endian
pub const UTF32_BE: Signature = Signature::new("UTF-32, big-endian", &[0x00, 0x00, 0xFE, 0xFF]);
/// BOM of UTF-32, little-endian
pub const UTF32_LE: Signature =
    Signature::new("UTF-32, little-endian", &[0xFF, 0xFE, 0x00, 0x00]);
/// BOM of UTF-8
pub const UTF8: Signature = Signature::new("UTF-8", &[0xEF, 0xBB, 0xBF]);
/// BOM of UTF-16, big-endian
pub const UTF16_BE: Signature = Signature::new("UTF-16, big-endian", &[0xFE, 0xFF]);
/// BOM of UTF-16, little-endian
pub const UTF16_LE: Signature = Signature::new("UTF-16, little-endian", &[0xFF, 0xFE]);

/// Sentinel returned when no known signature matched
///
/// Carries an empty byte sequence so callers can inspect `name()` and
/// `len()` uniformly without an `Option`.
pub const NO_BOM: Signature = Signature::new("No BOM", &[]);

/// Catalog entries in match priority order
const SIGNATURES: [Signature; 5] = [UTF32_BE, UTF32_LE, UTF8, UTF16_BE, UTF16_LE];

/// Process-wide catalog, never mutated
static CATALOG: [Signature; 5] = SIGNATURES;

/// Length of the longest catalog signature, the detector's widest window
pub const MAX_SIGNATURE_LEN: usize = longest(&SIGNATURES);

/// Length of the shortest catalog signature, the detector's narrowest window
pub const MIN_SIGNATURE_LEN: usize = shortest(&SIGNATURES);

const fn longest(signatures: &[Signature]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < signatures.len() {
        if signatures[i].len() > max {
            max = signatures[i].len();
        }
        i += 1;
    }
    max
}

const fn shortest(signatures: &[Signature]) -> usize {
    let mut min = usize::MAX;
    let mut i = 0;
    while i < signatures.len() {
        if signatures[i].len() < min {
            min = signatures[i].len();
        }
        i += 1;
    }
    min
}

/// Get every known signature in match priority order
///
/// The sentinel [`NO_BOM`] is not part of the catalog.
#[must_use]
pub fn all_signatures() -> &'static [Signature] {
    &CATALOG
}

/// Find the first catalog entry whose bytes prefix `buf`
///
/// `buf` may be longer than any signature; only its leading bytes are
/// compared. Returns [`NO_BOM`] when nothing matches.
#[must_use]
pub fn match_signature(buf: &[u8]) -> Signature {
    CATALOG
        .iter()
        .copied()
        .find(|signature| buf.starts_with(signature.bytes()))
        .unwrap_or(NO_BOM)
}

/// Detect and strip a BOM from an in-memory buffer
///
/// Returns the detected signature and the bytes following it. Without a
/// BOM the whole buffer is returned untouched.
#[must_use]
pub fn strip_bom(buf: &[u8]) -> (Signature, &[u8]) {
    let signature = match_signature(buf);
    (signature, &buf[signature.len()..])
}

/// Look up a catalog entry by its display name
///
/// Comparison ignores ASCII case. The sentinel is matched by its own name.
#[must_use]
pub fn signature_by_name(name: &str) -> Option<Signature> {
    CATALOG
        .iter()
        .chain(core::iter::once(&NO_BOM))
        .copied()
        .find(|signature| signature.name().eq_ignore_ascii_case(name))
}
