//! # Database Error Types
//!
//! ```text
//! sqlx::Error ──► DbError ──► ApiError (server: 404 / 400 / 500)
//! CoreError  ──┘
//! ```

use thiserror::Error;
use toolrent_core::CoreError;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row with the requested id, e.g. an unknown tool on lookup,
    /// availability flip or rental.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A schema `CHECK` or `FOREIGN KEY` rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Commit failed; nothing from the transaction was kept.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Every pooled connection stayed busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// A pricing rule failed inside a store operation.
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                // SQLite reports "CHECK constraint failed: ..." and
                // "FOREIGN KEY constraint failed"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Tool", 42);
        assert_eq!(err.to_string(), "Tool not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_pool_errors() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: DbError = CoreError::AmountOverflow("rental total").into();
        assert_eq!(err.to_string(), "Amount overflow while computing rental total");
    }
}
