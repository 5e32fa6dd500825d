//! # toolrent-core: Pure Business Logic for ToolRent
//!
//! This crate contains the rental pricing rules and the domain model as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ToolRent Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP server (axum)                           │   │
//! │  │    /  /tools  /rent/{id}  /rentals  /association                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ toolrent-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │   Tool    │  │   Money   │  │ commission│  │   rules   │  │   │
//! │  │   │  Rental   │  │  (cents)  │  │   quote   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 toolrent-db (Database Layer)                    │   │
//! │  │          SQLite catalog, ledger, reporting, migrations          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Tool, Rental, RentalPeriod, MonthlyCommission)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Commission tiers and rental quotes
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use toolrent_core::money::Money;
//! use toolrent_core::pricing::{commission_for, quote};
//! use toolrent_core::types::{parse_rental_date, RentalPeriod};
//!
//! let rate: Money = "25.00".parse().unwrap();
//! assert_eq!(commission_for(rate), Money::from_cents(200));
//!
//! let period = RentalPeriod::new(
//!     parse_rental_date("2024-05-01").unwrap(),
//!     parse_rental_date("2024-05-04").unwrap(),
//! )
//! .unwrap();
//! let q = quote(&period, rate).unwrap();
//! assert_eq!(q.days, 3);
//! assert_eq!(q.total.cents(), 7700);
//! ```

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{commission_for, quote, RentalQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a tool or renter name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a tool description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;
