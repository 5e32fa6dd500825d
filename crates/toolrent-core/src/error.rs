//! # Error Types
//!
//! Domain-specific error types for toolrent-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  toolrent-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  toolrent-db errors (separate crate)                                   │
//! │  └── DbError          - Store failures (StoreError / NotFound)         │
//! │                                                                         │
//! │  Server errors (in app)                                                │
//! │  └── ApiError         - What the HTTP client sees                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Response               │
//! │                           DbError  ──┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary calculation left the representable range.
    ///
    /// ## When This Occurs
    /// - Absurd rental spans multiplied by a daily rate
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., bad amount, bad date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Rental end is not after its start.
    #[error("end date {end} must be after start date {start}")]
    EndBeforeStart { start: String, end: String },
}

impl ValidationError {
    pub(crate) fn invalid_format(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Re-labels a `Required` or `InvalidFormat` error with the form field
    /// the value came from. Other variants pass through unchanged.
    pub fn for_field(self, field: &str) -> Self {
        match self {
            ValidationError::Required { .. } => ValidationError::Required {
                field: field.to_string(),
            },
            ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
                field: field.to_string(),
                reason,
            },
            other => other,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
