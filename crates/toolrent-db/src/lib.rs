//! # toolrent-db: Database Layer for ToolRent
//!
//! SQLite storage for the tool catalog, the rental ledger and the
//! commission reports, using sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ToolRent Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /rent/{id})                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   toolrent-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ ToolRepo      │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ RentalRepo    │    │ 0001_initial │  │   │
//! │  │   │               │    │ ReportRepo    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite (`:memory:` by default, or a file)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use toolrent_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("toolrent.db")).await?;
//! db.tools().seed_sample_tools().await?;
//! let summary = db.reports().monthly_commission_summary().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, IN_MEMORY_PATH};

pub use repository::rental::RentalRepository;
pub use repository::report::ReportRepository;
pub use repository::tool::{ToolRepository, SAMPLE_TOOLS};
