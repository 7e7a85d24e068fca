//! Error categorization for BOM failures

use core::fmt;

/// Error category for filtering and reporting
///
/// # Examples
///
/// ```rust
/// use bom_core::utils::errors::ErrorCategory;
///
/// assert_eq!(ErrorCategory::Io.to_string(), "io");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The underlying byte source failed
    ///
    /// The detected encoding is indeterminate and should not be trusted.
    Io,

    /// The cursor produced fewer bytes than it had already buffered
    ///
    /// Indicates a misbehaving reader rather than bad input.
    Consistency,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Io => "io",
            Self::Consistency => "consistency",
        };
        write!(f, "{name}")
    }
}
