//! Utility types shared by the registry and the detector
//!
//! Currently holds the error taxonomy. Everything here requires `std`
//! because the detector reports failures from `std::io` readers.

pub mod errors;

pub use errors::{BomError, ErrorCategory, Result};
