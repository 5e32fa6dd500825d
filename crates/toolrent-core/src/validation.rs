//! # Validation Module
//!
//! Input validation for tool and rental submissions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP form (axum::Form)                                       │
//! │  └── Type coercion (strings in, typed struct out)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: Business rule validation                        │
//! │  ├── names present and bounded                                         │
//! │  ├── daily rate non-negative                                           │
//! │  └── rental end after rental start                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key rentals.tool_id → tools.id                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a tool name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use toolrent_core::validation::validate_tool_name;
///
/// assert!(validate_tool_name("Power Drill").is_ok());
/// assert!(validate_tool_name("  ").is_err());
/// ```
pub fn validate_tool_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates the name of the person renting a tool.
pub fn validate_renter_name(name: &str) -> ValidationResult<()> {
    validate_required_text("renter_name", name, MAX_NAME_LEN)
}

/// Validates an optional tool description (already known to be non-blank).
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily rate.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free loans)
///
/// ## Example
/// ```rust
/// use toolrent_core::money::Money;
/// use toolrent_core::validation::validate_daily_rate;
///
/// assert!(validate_daily_rate(Money::from_cents(2500)).is_ok());
/// assert!(validate_daily_rate(Money::zero()).is_ok());
/// assert!(validate_daily_rate(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_daily_rate(rate: Money) -> ValidationResult<()> {
    if rate.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "daily_rate".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates that a rental ends strictly after it starts.
///
/// Without this, the quote degenerates to zero or negative days and the
/// renter is charged only the commission, or less.
pub fn validate_rental_period(start: NaiveDateTime, end: NaiveDateTime) -> ValidationResult<()> {
    if end <= start {
        return Err(ValidationError::EndBeforeStart {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
