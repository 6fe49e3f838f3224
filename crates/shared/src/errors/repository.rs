use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl RepositoryError {
    /// Maps a failed write, turning unique-constraint violations into
    /// `AlreadyExists` so callers can tell them apart from outages.
    pub fn from_write(err: SqlxError, what: &str) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(what.to_string())
            }
            _ => RepositoryError::Sqlx(err),
        }
    }

    /// True when the store could not be reached at all, as opposed to a
    /// query that ran and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RepositoryError::Sqlx(
                SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_)
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        assert!(RepositoryError::Sqlx(SqlxError::PoolTimedOut).is_unavailable());
        assert!(RepositoryError::Sqlx(SqlxError::PoolClosed).is_unavailable());
    }

    #[test]
    fn row_not_found_is_not_unavailable() {
        assert!(!RepositoryError::Sqlx(SqlxError::RowNotFound).is_unavailable());
        assert!(!RepositoryError::NotFound.is_unavailable());
    }

    #[test]
    fn from_write_keeps_non_constraint_errors() {
        let err = RepositoryError::from_write(SqlxError::PoolTimedOut, "email");
        assert!(matches!(err, RepositoryError::Sqlx(SqlxError::PoolTimedOut)));
    }
}
