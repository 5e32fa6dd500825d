//! # Rental Repository
//!
//! The rental ledger. Booking a tool is a single transaction.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      create(NewRental)                                  │
//! │                                                                         │
//! │  BEGIN IMMEDIATE                                                        │
//! │    │                                                                    │
//! │    ├── SELECT tool ............. missing → NotFound, ROLLBACK           │
//! │    ├── quote(period, rate) ..... overflow → Domain, ROLLBACK            │
//! │    ├── INSERT rental (charges frozen at today's rate)                   │
//! │    └── UPDATE tools SET available = 0                                   │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Either the rental exists AND the tool is unavailable, or neither.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, error, info, warn};

use super::tool::{fetch_tool, set_unavailable};
use crate::error::{DbError, DbResult};
use toolrent_core::{quote, NewRental, Rental, RentalListing};

/// Repository for rental ledger operations.
#[derive(Debug, Clone)]
pub struct RentalRepository {
    pool: SqlitePool,
}

impl RentalRepository {
    /// Creates a new RentalRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RentalRepository { pool }
    }

    /// Books a tool.
    ///
    /// Prices the rental at the tool's current daily rate, records it, and
    /// marks the tool unavailable. Nothing is written unless all three
    /// succeed.
    ///
    /// A tool that is already unavailable can still be booked; the overlap
    /// is logged and the rental goes through.
    ///
    /// ## Returns
    /// * `Ok(Rental)` - The stored rental
    /// * `Err(DbError::NotFound)` - No tool with that id
    /// * `Err(DbError::Domain)` - The total does not fit in an i64 of cents
    pub async fn create(&self, rental: &NewRental) -> DbResult<Rental> {
        debug!(
            tool_id = rental.tool_id,
            renter = %rental.renter_name,
            start = %rental.period.start,
            end = %rental.period.end,
            "Creating rental"
        );

        // Take the write lock before the read: under WAL a deferred
        // read-then-write fails with SQLITE_BUSY instead of waiting
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let tool = fetch_tool(&mut *tx, rental.tool_id)
            .await?
            .ok_or_else(|| DbError::not_found("Tool", rental.tool_id))?;

        if !tool.available {
            warn!(
                tool_id = tool.id,
                tool = %tool.name,
                "Booking a tool that is already rented out"
            );
        }

        let priced = quote(&rental.period, tool.daily_rate())?;

        let created = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (
                tool_id, renter_name, start_date, end_date,
                total_cents, commission_cents
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, tool_id, renter_name, start_date, end_date,
                      total_cents, commission_cents
            "#,
        )
        .bind(tool.id)
        .bind(&rental.renter_name)
        .bind(rental.period.start)
        .bind(rental.period.end)
        .bind(priced.total.cents())
        .bind(priced.commission.cents())
        .fetch_one(&mut *tx)
        .await?;

        set_unavailable(&mut *tx, tool.id).await?;

        tx.commit().await.map_err(|e| {
            error!(tool_id = tool.id, error = %e, "Failed to commit rental");
            DbError::TransactionFailed(e.to_string())
        })?;

        info!(
            rental_id = created.id,
            tool_id = tool.id,
            days = priced.days,
            total = %priced.total,
            commission = %priced.commission,
            "Rental created"
        );

        Ok(created)
    }

    /// Every rental with the name of the tool it references.
    ///
    /// Ordered by start date, most recent first.
    pub async fn list_with_tools(&self) -> DbResult<Vec<RentalListing>> {
        let listings = sqlx::query_as::<_, RentalListing>(
            r#"
            SELECT r.id, r.tool_id, r.renter_name, r.start_date, r.end_date,
                   r.total_cents, r.commission_cents,
                   t.name AS tool_name
            FROM rentals r
            INNER JOIN tools t ON t.id = r.tool_id
            ORDER BY r.start_date DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = listings.len(), "Listed rentals");
        Ok(listings)
    }

    /// Counts rentals in the ledger.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
