/// Structured error types for recordstore-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (recordstore-cli) can still use `anyhow` for
/// convenience, but library consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for record store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Configuration error (missing or invalid environment)
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Connection pool could not be opened or validated
    #[error("failed to connect to database: {source}")]
    Connect { source: sqlx::Error },

    /// Liveness check round-trip failed
    #[error("liveness check failed: {source}")]
    Ping { source: sqlx::Error },

    /// Statement execution or row-decode failure
    #[error("{operation} {params}: {source}")]
    Query {
        operation: &'static str,
        params: String,
        source: sqlx::Error,
    },

    /// Zero rows for a by-id lookup
    #[error("get_by_id {id}: no such album")]
    NotFound { id: i64 },

    /// Write failed or the generated id could not be retrieved
    #[error("insert failed: {reason}")]
    Insert {
        reason: String,
        #[source]
        source: Option<sqlx::Error>,
    },
}

/// Result type alias for record store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a query error carrying the operation name and its inputs
    pub fn query(operation: &'static str, params: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Query {
            operation,
            params: params.into(),
            source,
        }
    }

    /// Create an insert error
    pub fn insert(reason: impl Into<String>, source: Option<sqlx::Error>) -> Self {
        Self::Insert {
            reason: reason.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "get_by_id 42: no such album");

        let err = StoreError::config("DBUSER not set");
        assert_eq!(err.to_string(), "configuration error: DBUSER not set");

        let err = StoreError::query(
            "list_by_artist",
            "\"John Coltrane\"",
            sqlx::Error::PoolClosed,
        );
        assert!(err.to_string().starts_with("list_by_artist \"John Coltrane\":"));
    }

    #[test]
    fn test_not_found_is_distinguishable() {
        // Callers must be able to tell a missing row from a failed query.
        let err = StoreError::NotFound { id: 7 };
        assert!(matches!(err, StoreError::NotFound { id: 7 }));
        assert!(!matches!(err, StoreError::Query { .. }));
    }

    #[test]
    fn test_insert_error_without_source() {
        let err = StoreError::insert("no generated id returned", None);
        assert_eq!(err.to_string(), "insert failed: no generated id returned");
        assert!(std::error::Error::source(&err).is_none());
    }
}
