//! Error taxonomy for the stride engine.
//!
//! Two failure classes exist, both detected eagerly at input
//! boundaries: format errors from the wire parser (or a malformed
//! sample set handed to the decomposer) and validation errors from
//! UserProfile construction. The signal stages themselves never fail;
//! degenerate input produces zero steps, not an error.

use thiserror::Error;

/// All errors the engine can surface to a caller.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Raw input does not parse into uniform triaxial triples, or the
    /// vector-group shape is inconsistent or unsupported.
    #[error("format error at sample {sample}: {reason}")]
    Format {
        /// Zero-based index of the malformed sample.
        sample: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A UserProfile field failed validation.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The offending field (`gender`, `height`, `stride`).
        field: &'static str,
        reason: String,
    },
}

impl EngineError {
    /// Shorthand for a format error at a known sample index.
    pub fn format(sample: usize, reason: impl Into<String>) -> Self {
        EngineError::Format {
            sample,
            reason: reason.into(),
        }
    }

    /// Shorthand for a validation error on a named field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_sample() {
        let err = EngineError::format(4, "expected 3 components, got 2");
        assert_eq!(
            err.to_string(),
            "format error at sample 4: expected 3 components, got 2"
        );
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = EngineError::validation("gender", "unrecognized token \"alien\"");
        assert_eq!(err.to_string(), "invalid gender: unrecognized token \"alien\"");
    }
}
