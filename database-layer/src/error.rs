use error_common::CareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Corrupt row: {0}")]
    Decode(String),

    /// UNIQUE constraint on `admission.patient_id`
    #[error("Unique constraint violated for {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

impl From<DatabaseError> for CareError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(patient_id) => CareError::DuplicateId(patient_id),
            other => CareError::Storage(other.to_string()),
        }
    }
}
