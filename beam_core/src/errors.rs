//! # Error Types
//!
//! Structured error types for beam_core. Every failure a caller can hit is a
//! variant here, carrying the offending values so a front end can re-prompt
//! with something more useful than a bare message.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn check_span(length: f64) -> BeamResult<()> {
//!     if !(length > 0.0) {
//!         return Err(BeamError::DegenerateBeam { length });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_span(4.0).is_ok());
//! assert_eq!(check_span(0.0).unwrap_err().error_code(), "DEGENERATE_BEAM");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Error type for beam model edits and analysis.
///
/// Edits that fail leave the model untouched, so every variant except
/// [`BeamError::DegenerateBeam`] can be recovered from by correcting the input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// The beam length is zero, negative or not finite; nothing can be solved.
    #[error("Degenerate beam: length {length} must be positive and finite")]
    DegenerateBeam { length: f64 },

    /// A distributed load was given bounds with `start >= end`.
    #[error("Invalid range: start {start} must be strictly less than end {end}")]
    InvalidRange { start: f64, end: f64 },

    /// Reactions were requested but the solver has no load to balance.
    #[error("No loads to react: reactions are undefined for an empty load set")]
    EmptyLoadSet,
}

impl BeamError {
    /// Create an InvalidRange error
    pub fn invalid_range(start: f64, end: f64) -> Self {
        BeamError::InvalidRange { start, end }
    }

    /// Create a DegenerateBeam error
    pub fn degenerate(length: f64) -> Self {
        BeamError::DegenerateBeam { length }
    }

    /// Whether the caller can fix the input and try again
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BeamError::DegenerateBeam { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::DegenerateBeam { .. } => "DEGENERATE_BEAM",
            BeamError::InvalidRange { .. } => "INVALID_RANGE",
            BeamError::EmptyLoadSet => "EMPTY_LOAD_SET",
        }
    }
}
