//! # Tool Repository
//!
//! The tool catalog: rentable items and their availability flag.
//!
//! ## Availability
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   create()              rentals().create()                              │
//! │      │                        │                                         │
//! │      ▼                        ▼                                         │
//! │  available = 1  ─────►  available = 0   (no transition back)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use toolrent_core::{NewTool, Tool, ToolId};

/// The catalog a fresh store starts with: `(name, description, daily rate in cents)`.
pub const SAMPLE_TOOLS: &[(&str, &str, i64)] = &[
    (
        "Power Drill",
        "Professional grade power drill with multiple attachments",
        2500,
    ),
    (
        "Lawn Mower",
        "Gas-powered lawn mower, perfect for medium-sized lawns",
        4500,
    ),
    (
        "Pressure Washer",
        "High-pressure water cleaner for outdoor surfaces",
        3500,
    ),
];

// =============================================================================
// Executor-generic queries (shared with the rental transaction)
// =============================================================================

pub(crate) async fn fetch_tool<'e, E>(executor: E, id: ToolId) -> DbResult<Option<Tool>>
where
    E: SqliteExecutor<'e>,
{
    let tool = sqlx::query_as::<_, Tool>(
        r#"
        SELECT id, name, description, daily_rate_cents, available
        FROM tools
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(tool)
}

pub(crate) async fn set_unavailable<'e, E>(executor: E, id: ToolId) -> DbResult<()>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("UPDATE tools SET available = 0 WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;

    // SQLite counts matched rows, so an already-unavailable tool still reports 1
    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Tool", id));
    }

    Ok(())
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for tool catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let tools = db.tools().list().await?;
/// let drill = db.tools().get(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ToolRepository {
    pool: SqlitePool,
}

impl ToolRepository {
    /// Creates a new ToolRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ToolRepository { pool }
    }

    /// Lists every tool, in creation order.
    pub async fn list(&self) -> DbResult<Vec<Tool>> {
        let tools = sqlx::query_as::<_, Tool>(
            r#"
            SELECT id, name, description, daily_rate_cents, available
            FROM tools
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = tools.len(), "Listed tools");
        Ok(tools)
    }

    /// Inserts a tool. New tools are always available.
    pub async fn create(&self, tool: &NewTool) -> DbResult<Tool> {
        debug!(name = %tool.name, rate = %tool.daily_rate, "Creating tool");

        let created = sqlx::query_as::<_, Tool>(
            r#"
            INSERT INTO tools (name, description, daily_rate_cents, available)
            VALUES (?1, ?2, ?3, 1)
            RETURNING id, name, description, daily_rate_cents, available
            "#,
        )
        .bind(&tool.name)
        .bind(&tool.description)
        .bind(tool.daily_rate.cents())
        .fetch_one(&self.pool)
        .await?;

        info!(tool_id = created.id, name = %created.name, "Tool created");
        Ok(created)
    }

    /// Gets a tool by id.
    ///
    /// ## Returns
    /// * `Ok(Tool)` - Tool found
    /// * `Err(DbError::NotFound)` - No tool with that id
    pub async fn get(&self, id: ToolId) -> DbResult<Tool> {
        fetch_tool(&self.pool, id)
            .await?
            .ok_or_else(|| DbError::not_found("Tool", id))
    }

    /// Marks a tool as rented out. Calling it again is a no-op.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No tool with that id
    pub async fn mark_unavailable(&self, id: ToolId) -> DbResult<()> {
        debug!(tool_id = id, "Marking tool unavailable");
        set_unavailable(&self.pool, id).await
    }

    /// Counts tools in the catalog.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tools")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Inserts [`SAMPLE_TOOLS`] when the catalog is empty.
    ///
    /// Returns the number of tools inserted (0 if the catalog already had
    /// something in it).
    pub async fn seed_sample_tools(&self) -> DbResult<usize> {
        if self.count().await? > 0 {
            debug!("Catalog not empty, skipping sample tools");
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for (name, description, rate_cents) in SAMPLE_TOOLS {
            sqlx::query(
                "INSERT INTO tools (name, description, daily_rate_cents) VALUES (?1, ?2, ?3)",
            )
            .bind(*name)
            .bind(*description)
            .bind(*rate_cents)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(count = SAMPLE_TOOLS.len(), "Seeded sample tools");
        Ok(SAMPLE_TOOLS.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use toolrent_core::{Money, NewTool};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_tool(name: &str, cents: i64) -> NewTool {
        NewTool::new(name, Some(format!("{} for hire", name)), Money::from_cents(cents)).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_defaults_available() {
        let db = db().await;
        let tool = db.tools().create(&new_tool("Tile Saw", 6000)).await.unwrap();

        assert!(tool.id > 0);
        assert!(tool.available);
        assert_eq!(tool.daily_rate(), Money::from_cents(6000));
        assert_eq!(tool.description.as_deref(), Some("Tile Saw for hire"));

        let other = db.tools().create(&new_tool("Sander", 1500)).await.unwrap();
        assert_ne!(tool.id, other.id);
    }

    #[tokio::test]
    async fn test_create_without_description() {
        let db = db().await;
        let input = NewTool::new("Ladder", None, Money::from_cents(800)).unwrap();
        let tool = db.tools().create(&input).await.unwrap();
        assert_eq!(tool.description, None);
    }

    #[tokio::test]
    async fn test_get_round_trips_and_misses() {
        let db = db().await;
        let created = db.tools().create(&new_tool("Chainsaw", 5500)).await.unwrap();

        let fetched = db.tools().get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let err = db.tools().get(9999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_returns_all_tools() {
        let db = db().await;
        assert!(db.tools().list().await.unwrap().is_empty());

        db.tools().create(&new_tool("A", 100)).await.unwrap();
        db.tools().create(&new_tool("B", 200)).await.unwrap();

        let names: Vec<String> = db
            .tools()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_mark_unavailable_is_idempotent() {
        let db = db().await;
        let tool = db.tools().create(&new_tool("Drill", 2500)).await.unwrap();

        db.tools().mark_unavailable(tool.id).await.unwrap();
        assert!(!db.tools().get(tool.id).await.unwrap().available);

        db.tools().mark_unavailable(tool.id).await.unwrap();
        assert!(!db.tools().get(tool.id).await.unwrap().available);
    }

    #[tokio::test]
    async fn test_mark_unavailable_unknown_tool() {
        let db = db().await;
        let err = db.tools().mark_unavailable(404).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_seed_only_fills_empty_catalog() {
        let db = db().await;
        assert_eq!(db.tools().seed_sample_tools().await.unwrap(), 3);
        assert_eq!(db.tools().seed_sample_tools().await.unwrap(), 0);
        assert_eq!(db.tools().count().await.unwrap(), 3);

        let tools = db.tools().list().await.unwrap();
        assert_eq!(tools[0].name, "Power Drill");
        assert_eq!(tools[0].daily_rate_cents, 2500);
        assert!(tools.iter().all(|t| t.available));
    }

    #[tokio::test]
    async fn test_negative_rate_rejected_by_schema() {
        let db = db().await;
        // NewTool refuses this; go around it to check the CHECK constraint
        let err = sqlx::query("INSERT INTO tools (name, daily_rate_cents) VALUES ('Bad', -1)")
            .execute(db.pool())
            .await
            .map_err(DbError::from)
            .unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));
    }
}
