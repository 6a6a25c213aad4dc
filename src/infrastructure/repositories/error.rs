use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Translate a sqlx failure into a domain error, logging the original cause.
/// The returned message never carries SQL text or driver detail.
pub fn map_sqlx(operation: &'static str, err: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %err, "article storage operation failed");

    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation("article violates a storage constraint".into())
            }
            ErrorKind::UniqueViolation => {
                DomainError::Persistence("article id already exists".into())
            }
            _ => DomainError::Persistence(format!("{operation} failed")),
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::Persistence("database unavailable".into())
        }
        _ => DomainError::Persistence(format!("{operation} failed")),
    }
}
