//! Error types for the Tenor core library.
//!
//! This module defines the error types surfaced by the core types,
//! calendars, and reference data lookups.

use thiserror::Error;

use crate::types::Currency;

/// A specialized Result type for Tenor core operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The main error type for Tenor core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// A reference data lookup failed.
    ///
    /// Raised when resolution needs a calendar or convention that the
    /// supplied reference data context does not contain. This always
    /// propagates to the caller; a silently wrong date would corrupt
    /// downstream valuation.
    #[error("Reference data not found: {id}")]
    ReferenceDataNotFound {
        /// Identifier that could not be resolved.
        id: String,
    },

    /// An unrecognised ISO 4217 currency code.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The unrecognised code.
        code: String,
    },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {actual}")]
    CurrencyMismatch {
        /// The currency required by the operation.
        expected: Currency,
        /// The currency actually supplied.
        actual: Currency,
    },
}

impl TenorError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates a reference data not found error.
    #[must_use]
    pub fn reference_data_not_found(id: impl Into<String>) -> Self {
        Self::ReferenceDataNotFound { id: id.into() }
    }
}
