use crate::core::{AppError, Result};

/// Result of inserting a membership row keyed by (user_id, product_id)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The composite key is already present
    Duplicate,
    /// The user or product row the key points at does not exist
    MissingReference,
}

impl InsertOutcome {
    /// Classify the result of an INSERT by the constraint it violated
    pub(crate) fn from_execute<T>(result: std::result::Result<T, sqlx::Error>) -> Result<Self> {
        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(InsertOutcome::Duplicate)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Ok(InsertOutcome::MissingReference)
            }
            Err(e) => Err(AppError::Database(e)),
        }
    }
}
