//! Profiles service errors.

use sqlx::Error;
use thiserror::Error;

/// Profile service error variants.
#[derive(Debug, Error)]
pub enum ProfilesServiceError {
    /// Profile was not found or has no active menus.
    #[error("profile not found")]
    NotFound,

    /// Stored data could not be decoded.
    #[error("invalid profile data: {0}")]
    InvalidData(String),

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProfilesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
