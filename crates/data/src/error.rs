//! Error types for the data access layer.

use thiserror::Error;

/// Errors produced by the repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the identifier.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        let err = StoreError::NotFound {
            entity: "order",
            id: 42,
        };
        assert_eq!(err.to_string(), "order 42 not found");
    }
}
