//! # Report Repository
//!
//! Read-only aggregates over the rental ledger.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use toolrent_core::MonthlyCommission;

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Commission earned per calendar month, newest month first.
    ///
    /// A rental belongs to the month its start date falls in. Months with
    /// no rentals are absent rather than reported as zero.
    pub async fn monthly_commission_summary(&self) -> DbResult<Vec<MonthlyCommission>> {
        let rows = sqlx::query_as::<_, MonthlyCommission>(
            r#"
            SELECT strftime('%Y-%m', start_date) AS month,
                   COUNT(*) AS rental_count,
                   SUM(commission_cents) AS total_commission_cents
            FROM rentals
            GROUP BY month
            ORDER BY month DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(months = rows.len(), "Computed monthly commission summary");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use toolrent_core::{parse_rental_date, Money, NewRental, NewTool, RentalPeriod};

    async fn book(db: &Database, tool_id: i64, start: &str, end: &str) {
        let period = RentalPeriod::new(
            parse_rental_date(start).unwrap(),
            parse_rental_date(end).unwrap(),
        )
        .unwrap();
        let input = NewRental::new(tool_id, "Renter", period).unwrap();
        db.rentals().create(&input).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_ledger_has_no_months() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.reports().monthly_commission_summary().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_groups_by_start_month_newest_first() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let cheap = db
            .tools()
            .create(&NewTool::new("Cheap", None, Money::from_cents(2500)).unwrap())
            .await
            .unwrap()
            .id;
        let pricey = db
            .tools()
            .create(&NewTool::new("Pricey", None, Money::from_cents(6000)).unwrap())
            .await
            .unwrap()
            .id;

        book(&db, cheap, "2024-01-10", "2024-01-12").await;
        // spans into February but counts for January
        book(&db, pricey, "2024-01-31", "2024-02-02").await;
        book(&db, cheap, "2024-03-05", "2024-03-06").await;

        let summary = db.reports().monthly_commission_summary().await.unwrap();
        let months: Vec<&str> = summary.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2024-03", "2024-01"]);

        assert_eq!(summary[0].rental_count, 1);
        assert_eq!(summary[0].total_commission(), Money::from_cents(200));
        assert_eq!(summary[1].rental_count, 2);
        assert_eq!(summary[1].total_commission(), Money::from_cents(1200));

        let counted: i64 = summary.iter().map(|m| m.rental_count).sum();
        assert_eq!(counted, db.rentals().count().await.unwrap());
    }
}
