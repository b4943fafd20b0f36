//! Error types for product construction and resolution.
//!
//! Two families of failure exist in this model:
//!
//! - **Construction-time**: a builder's `build()` rejected the supplied
//!   fields. These are always fatal to the construction attempt; no
//!   partially valid instance is ever observable.
//! - **Resolution-time**: a reference data lookup needed to adjust a
//!   date failed. These propagate unchanged through every level of
//!   recursive resolution.

use thiserror::Error;

use tenor_core::error::TenorError;

/// A specialized Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Errors raised by product construction and resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// A mandatory field was not supplied to a builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A supplied value violates a stated invariant.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The offending field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A resolution-time failure from the core library, typically a
    /// reference data miss.
    #[error(transparent)]
    Resolution(#[from] TenorError),
}

impl ProductError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Checks whether this error is a reference data miss.
    #[must_use]
    pub fn is_reference_data_miss(&self) -> bool {
        matches!(
            self,
            ProductError::Resolution(TenorError::ReferenceDataNotFound { .. })
        )
    }
}
