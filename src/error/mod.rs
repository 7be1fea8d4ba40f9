//! Error types for duration resolution.
//!
//! A single [`DeltaTimeError`] enum covers the three failure kinds:
//! - [`DeltaTimeError::InvalidOutputUnit`]: the requested output unit is not
//!   in the unit table (raised in every mode)
//! - [`DeltaTimeError::MalformedInput`]: strict mode only, the input string
//!   is structurally invalid
//! - [`DeltaTimeError::UnsupportedUnit`]: strict mode only, a well-formed
//!   token carries an unknown unit spelling
//!
//! Lenient parsing has no error path for malformed text or unknown units:
//! both degrade to a zero contribution. All errors are raised synchronously
//! and abort the whole call with no partial result.

use thiserror::Error;

/// Duration resolution error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeltaTimeError {
    /// The output-unit parameter is not a recognized unit spelling.
    #[error("Invalid output unit: {unit}")]
    InvalidOutputUnit {
        /// The unit string that was not recognized.
        unit: String,
    },

    /// The input string is structurally invalid (strict mode).
    #[error("Malformed time string: {input}")]
    MalformedInput {
        /// The offending input string.
        input: String,
    },

    /// A well-formed token carries an unknown unit spelling (strict mode).
    #[error("Unsupported time unit: {unit}")]
    UnsupportedUnit {
        /// The unit text that has no table entry.
        unit: String,
    },
}
