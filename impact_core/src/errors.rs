//! # Error Types
//!
//! Structured error types for impact_core. A calculation either returns a
//! valid result or one of these errors; nothing is silently defaulted to zero.
//!
//! Configuration errors ([`CalcError::is_configuration_error`]) mean a lookup
//! table could not resolve a key the inventory asked for. They are fatal to the
//! single calculation and propagate to the caller.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::errors::{CalcError, CalcResult};
//!
//! fn validate_racks(racks_per_day: f64) -> CalcResult<()> {
//!     if racks_per_day < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "racks_per_day",
//!             racks_per_day.to_string(),
//!             "Racks per day cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_racks(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for impact_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The inventory names a region with no utility-rate entry
    #[error("Unknown region: no utility rates for '{region}'")]
    UnknownRegion { region: String },

    /// A catalog product names a material with no emission factor
    #[error("Missing emission factor for material '{material}'")]
    MissingEmissionFactor { material: String },

    /// No consumption-table row for a dishwasher configuration
    #[error(
        "No consumption profile for dishwasher {dishwasher_type} / {temperature} / energy star = {energy_star_certified}"
    )]
    MissingDishwasherProfile {
        dishwasher_type: String,
        temperature: String,
        energy_star_certified: bool,
    },

    /// Both a region and explicit utility rates were supplied
    #[error("Conflicting utility source: supply either a state ('{state}') or explicit utility rates, not both")]
    ConflictingUtilitySource { state: String },

    /// File I/O error (CLI front end only)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: dataset version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
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

    /// Create an UnknownRegion error
    pub fn unknown_region(region: impl Into<String>) -> Self {
        CalcError::UnknownRegion {
            region: region.into(),
        }
    }

    /// Create a MissingEmissionFactor error
    pub fn missing_emission_factor(material: impl Into<String>) -> Self {
        CalcError::MissingEmissionFactor {
            material: material.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// True for errors raised by a constant-table lookup that could not resolve.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CalcError::UnknownRegion { .. }
                | CalcError::MissingEmissionFactor { .. }
                | CalcError::MissingDishwasherProfile { .. }
                | CalcError::ConflictingUtilitySource { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownRegion { .. } => "UNKNOWN_REGION",
            CalcError::MissingEmissionFactor { .. } => "MISSING_EMISSION_FACTOR",
            CalcError::MissingDishwasherProfile { .. } => "MISSING_DISHWASHER_PROFILE",
            CalcError::ConflictingUtilitySource { .. } => "CONFLICTING_UTILITY_SOURCE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
