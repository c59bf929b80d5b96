//! # Error Types
//!
//! Structured error types for grid_core. These errors carry enough context
//! to identify the offending field or lookup key programmatically, so a
//! request layer can map them to descriptive responses without string
//! parsing.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "span_length_m".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for grid_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by API layers and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its documented domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Conductor type not present in the properties table
    #[error("Unknown conductor type: {conductor_type} (supported: CA, CAA, ACSR)")]
    ConductorNotFound { conductor_type: String },

    /// Cross-section outside the tabulated range for a conductor type
    #[error(
        "Cross-section {cross_section_mm2} mm\u{b2} outside supported range \
         {min_mm2}-{max_mm2} mm\u{b2} for conductor type {conductor_type}"
    )]
    SectionOutOfRange {
        conductor_type: String,
        cross_section_mm2: f64,
        min_mm2: f64,
        max_mm2: f64,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ConductorNotFound error
    pub fn conductor_not_found(conductor_type: impl Into<String>) -> Self {
        CalcError::ConductorNotFound {
            conductor_type: conductor_type.into(),
        }
    }

    /// Create a SectionOutOfRange error
    pub fn section_out_of_range(
        conductor_type: impl Into<String>,
        cross_section_mm2: f64,
        min_mm2: f64,
        max_mm2: f64,
    ) -> Self {
        CalcError::SectionOutOfRange {
            conductor_type: conductor_type.into(),
            cross_section_mm2,
            min_mm2,
            max_mm2,
        }
    }

    /// Check if this error names a missing lookup key rather than a bad value
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            CalcError::ConductorNotFound { .. } | CalcError::SectionOutOfRange { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::ConductorNotFound { .. } => "CONDUCTOR_NOT_FOUND",
            CalcError::SectionOutOfRange { .. } => "SECTION_OUT_OF_RANGE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("current_a", "-5.0", "Current must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::conductor_not_found("XX").error_code(),
            "CONDUCTOR_NOT_FOUND"
        );
    }

    #[test]
    fn test_lookup_error_classification() {
        assert!(CalcError::conductor_not_found("XX").is_lookup_error());
        assert!(CalcError::section_out_of_range("CA", 1000.0, 16.0, 240.0).is_lookup_error());
        assert!(!CalcError::missing_field("phases").is_lookup_error());
    }

    #[test]
    fn test_section_out_of_range_message() {
        let error = CalcError::section_out_of_range("CA", 1000.0, 16.0, 240.0);
        let msg = error.to_string();
        assert!(msg.contains("1000"));
        assert!(msg.contains("CA"));
    }
}
