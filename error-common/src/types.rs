use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::codes;

/// Kind of record a [`CareError::NotFound`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Patient,
    Room,
    Doctor,
    Nurse,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Patient => "patient",
            Entity::Room => "room",
            Entity::Doctor => "doctor",
            Entity::Nurse => "nurse",
        };
        f.write_str(name)
    }
}

/// Error enum shared by every ward engine service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CareError {
    /// Missing or blank required fields, or a rule the input breaks
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input that could not be parsed; the user can correct it and retry
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("Room {0} is occupied")]
    RoomOccupied(String),

    #[error("Duplicate patient id: {0}")]
    DuplicateId(String),

    /// Store I/O failure; invariants can no longer be verified
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CareError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable code for the presentation shell
    pub fn code(&self) -> &'static str {
        match self {
            CareError::Validation(message) if message.contains("required") => {
                codes::validation::MISSING_REQUIRED_FIELD
            }
            CareError::Validation(_) | CareError::InvalidInput(_) => {
                codes::validation::INVALID_INPUT
            }
            CareError::NotFound { .. } => codes::resource::NOT_FOUND,
            CareError::RoomOccupied(_) => codes::resource::ROOM_OCCUPIED,
            CareError::DuplicateId(_) => codes::database::CONSTRAINT_VIOLATION,
            CareError::Storage(_) => codes::database::QUERY_FAILED,
            CareError::Config(_) => codes::system::CONFIGURATION,
        }
    }

    /// Whether the caller may surface the error and let the user retry.
    /// Storage and configuration failures are fatal to the process.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CareError::Storage(_) | CareError::Config(_))
    }
}

/// Result type alias for ward engine operations
pub type CareResult<T> = std::result::Result<T, CareError>;

/// Log an error with its code and recoverability
pub fn log_error(context: &str, error: &CareError) {
    if error.is_recoverable() {
        tracing::warn!(
            context = context,
            error_code = error.code(),
            error = %error,
            "Operation rejected"
        );
    } else {
        tracing::error!(
            context = context,
            error_code = error.code(),
            error = %error,
            "Fatal ward engine error"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(CareError::validation("name is required").is_recoverable());
        assert!(CareError::RoomOccupied("201".into()).is_recoverable());
        assert!(CareError::not_found(Entity::Patient, "P12345").is_recoverable());
        assert!(!CareError::Storage("disk I/O error".into()).is_recoverable());
        assert!(!CareError::Config("bad toml".into()).is_recoverable());
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            CareError::validation("Patient name is required").code(),
            "VALIDATION_1002"
        );
        assert_eq!(CareError::validation("room 101 is not available").code(), "VALIDATION_1001");
        assert_eq!(CareError::invalid_input("abc").code(), "VALIDATION_1001");
        assert_eq!(CareError::RoomOccupied("201".into()).code(), "CONFLICT_6001");
        assert_eq!(CareError::DuplicateId("P10000".into()).code(), "DB_4003");
    }

    #[test]
    fn test_not_found_message() {
        let err = CareError::not_found(Entity::Room, "305");
        assert_eq!(err.to_string(), "room not found: 305");
    }
}
