use proposta_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of proposal operations, independent of the transport
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// A proposal with the same id already exists
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Update payload inconsistent with the target proposal
    #[error("Mismatch: {message} {location}")]
    Mismatch {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source}")]
    Database {
        #[source]
        source: DbError,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        ServiceError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        ServiceError::NotFound {
            message: format!("Proposta {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Duplicate { id, .. } => ServiceError::Conflict {
                message: format!("Proposta {} already registered", id),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ServiceError::Database { source: other },
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
