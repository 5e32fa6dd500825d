//! # Domain Types
//!
//! Core domain types used throughout ToolRent.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────┐                  │
//! │  │      Tool        │ 1    * │       Rental         │                  │
//! │  │  ──────────────  │◄───────│  ──────────────────  │                  │
//! │  │  id              │        │  id                  │                  │
//! │  │  name            │        │  tool_id (FK)        │                  │
//! │  │  description     │        │  renter_name         │                  │
//! │  │  daily_rate_cents│        │  start_date/end_date │                  │
//! │  │  available       │        │  total_cents         │                  │
//! │  └──────────────────┘        │  commission_cents    │                  │
//! │                              └──────────────────────┘                  │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────┐                  │
//! │  │  RentalPeriod    │        │  MonthlyCommission   │                  │
//! │  │  start < end     │        │  "YYYY-MM", count,   │                  │
//! │  └──────────────────┘        │  total commission    │                  │
//! │                              └──────────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! - A tool is created available and flips to unavailable when rented.
//!   Nothing flips it back (there is no return flow).
//! - A rental is written once with its charges frozen at the tool's
//!   daily rate at that moment, and is never amended.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing;
use crate::validation::{
    validate_daily_rate, validate_description, validate_rental_period, validate_renter_name,
    validate_tool_name, ValidationResult,
};

/// Store-assigned tool identifier.
pub type ToolId = i64;

/// Store-assigned rental identifier.
pub type RentalId = i64;

// =============================================================================
// Tool
// =============================================================================

/// A rentable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Tool {
    pub id: ToolId,

    /// Display name.
    pub name: String,

    pub description: Option<String>,

    /// Price per rental day in cents.
    pub daily_rate_cents: i64,

    /// False once any rental referencing this tool exists.
    pub available: bool,
}

impl Tool {
    /// Returns the daily rate as Money.
    #[inline]
    pub fn daily_rate(&self) -> Money {
        Money::from_cents(self.daily_rate_cents)
    }

    /// Commission a rental of this tool would carry at today's rate.
    ///
    /// Shown on the rental form before the renter commits.
    #[inline]
    pub fn commission(&self) -> Money {
        pricing::commission_for(self.daily_rate())
    }
}

/// Validated input for creating a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTool {
    pub name: String,
    pub description: Option<String>,
    pub daily_rate: Money,
}

impl NewTool {
    /// Builds a tool submission, trimming text and validating every field.
    ///
    /// A blank description is stored as `None`.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::{Money, NewTool};
    ///
    /// let tool = NewTool::new("  Tile Saw ", Some("   ".into()), Money::from_cents(6000)).unwrap();
    /// assert_eq!(tool.name, "Tile Saw");
    /// assert_eq!(tool.description, None);
    ///
    /// assert!(NewTool::new("Saw", None, Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(
        name: &str,
        description: Option<String>,
        daily_rate: Money,
    ) -> ValidationResult<Self> {
        validate_tool_name(name)?;
        validate_daily_rate(daily_rate)?;

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(ref d) = description {
            validate_description(d)?;
        }

        Ok(NewTool {
            name: name.trim().to_string(),
            description,
            daily_rate,
        })
    }
}

// =============================================================================
// Rental Period
// =============================================================================

/// The booked span of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RentalPeriod {
    /// Creates a period, rejecting one whose end is not after its start.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> ValidationResult<Self> {
        validate_rental_period(start, end)?;
        Ok(RentalPeriod { start, end })
    }

    /// Creates a period without checking its ordering.
    ///
    /// Quotes on such a period produce zero or negative day counts.
    pub const fn unchecked(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        RentalPeriod { start, end }
    }

    /// Whole billable days, rounded up.
    #[inline]
    pub fn days(&self) -> i64 {
        pricing::billable_days(self)
    }
}

/// Parses a form date: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
///
/// A bare date is taken as midnight.
///
/// ## Example
/// ```rust
/// use toolrent_core::parse_rental_date;
///
/// let d = parse_rental_date("2024-05-01").unwrap();
/// assert_eq!(d.to_string(), "2024-05-01 00:00:00");
/// assert!(parse_rental_date("05/01/2024").is_err());
/// ```
pub fn parse_rental_date(input: &str) -> ValidationResult<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }

    Err(ValidationError::invalid_format(
        "date",
        format!("'{}' is not YYYY-MM-DD", input),
    ))
}

// =============================================================================
// Rental
// =============================================================================

/// Validated input for booking a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRental {
    pub tool_id: ToolId,
    pub renter_name: String,
    pub period: RentalPeriod,
}

impl NewRental {
    pub fn new(tool_id: ToolId, renter_name: &str, period: RentalPeriod) -> ValidationResult<Self> {
        validate_renter_name(renter_name)?;
        Ok(NewRental {
            tool_id,
            renter_name: renter_name.trim().to_string(),
            period,
        })
    }
}

/// A booked rental with its charges frozen at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Rental {
    pub id: RentalId,
    pub tool_id: ToolId,
    pub renter_name: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Days × daily rate + commission, in cents.
    pub total_cents: i64,
    pub commission_cents: i64,
}

impl Rental {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    #[inline]
    pub fn commission(&self) -> Money {
        Money::from_cents(self.commission_cents)
    }

    #[inline]
    pub fn period(&self) -> RentalPeriod {
        RentalPeriod::unchecked(self.start_date, self.end_date)
    }

    #[inline]
    pub fn days(&self) -> i64 {
        self.period().days()
    }
}

/// A rental joined with the name of the tool it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RentalListing {
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    #[serde(flatten)]
    pub rental: Rental,
    pub tool_name: String,
}

// =============================================================================
// Reporting
// =============================================================================

/// Commission totals for one calendar month of rental start dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MonthlyCommission {
    /// `YYYY-MM`
    pub month: String,
    pub rental_count: i64,
    pub total_commission_cents: i64,
}

impl MonthlyCommission {
    #[inline]
    pub fn total_commission(&self) -> Money {
        Money::from_cents(self.total_commission_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
