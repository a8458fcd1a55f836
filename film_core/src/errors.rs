//! # Error Types
//!
//! Structured error types for film_core. Incomplete user input is *not*
//! an error anywhere in this crate — calculations report it as an absent
//! result. Errors are reserved for contract violations: unknown material
//! codes, thicknesses outside the catalog, or negative physical values
//! that the catalog-driven caller should never produce.
//!
//! ## Example
//!
//! ```rust
//! use film_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must not be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for film_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material code not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Thickness is not in the selected material's allowed list
    #[error("Thickness {thickness_microns} µm is not available for {material} (allowed: {allowed:?})")]
    ThicknessNotAllowed {
        material: String,
        thickness_microns: f64,
        allowed: Vec<f64>,
    },

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

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a ThicknessNotAllowed error
    pub fn thickness_not_allowed(
        material: impl Into<String>,
        thickness_microns: f64,
        allowed: impl Into<Vec<f64>>,
    ) -> Self {
        CalcError::ThicknessNotAllowed {
            material: material.into(),
            thickness_microns,
            allowed: allowed.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::ThicknessNotAllowed { .. } => "THICKNESS_NOT_ALLOWED",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("width_mm", "-5.0", "Width must not be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::material_not_found("PVC").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            CalcError::thickness_not_allowed("PET", 20.0, vec![12.0]).error_code(),
            "THICKNESS_NOT_ALLOWED"
        );
    }

    #[test]
    fn test_thickness_error_message() {
        let error = CalcError::thickness_not_allowed("PET", 20.0, vec![12.0]);
        let msg = error.to_string();
        assert!(msg.contains("PET"));
        assert!(msg.contains("20"));
    }
}
