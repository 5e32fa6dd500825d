//! # Repository Module
//!
//! Database repository implementations for ToolRent.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.rentals().create(new_rental)                               │
//! │       ▼                                                                 │
//! │  ToolRepository     list / create / get / mark_unavailable             │
//! │  RentalRepository   create (transactional) / list_with_tools           │
//! │  ReportRepository   monthly_commission_summary                         │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database  (tools, rentals)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod rental;
pub mod report;
pub mod tool;
