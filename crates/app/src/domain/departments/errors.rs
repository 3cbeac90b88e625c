//! Departments service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

pub(crate) const BAD_REQUEST_MESSAGE: &str = "Bad Request.";
pub(crate) const NOT_FOUND_MESSAGE: &str = "SORRY, DEPARTMENT NOT FOUND";
pub(crate) const NO_CHANGES_MESSAGE: &str = "SORRY, NO CHANGES FOUND";

/// Department service error variants.
///
/// The message of each domain variant is what callers show to users, so it is
/// rendered verbatim by `Display`.
#[derive(Debug, Error)]
pub enum DepartmentsServiceError {
    /// Input was absent or rejected by storage constraints.
    #[error("{0}")]
    BadRequestData(String),

    /// Name or code already belongs to a department.
    #[error("{0}")]
    DataAlreadyExists(String),

    /// Department was not found.
    #[error("{0}")]
    DataNotFound(String),

    /// Update would not change anything.
    #[error("{0}")]
    NoChangeFound(String),

    /// Underlying SQL/storage error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl DepartmentsServiceError {
    pub(crate) fn bad_request() -> Self {
        Self::BadRequestData(BAD_REQUEST_MESSAGE.to_string())
    }

    pub(crate) fn name_exists(name: &str) -> Self {
        Self::DataAlreadyExists(format!("DEPARTMENT WITH NAME : {name}  ALREADY EXISTS"))
    }

    pub(crate) fn code_exists(code: &str) -> Self {
        Self::DataAlreadyExists(format!("DEPARTMENT WITH CODE : {code}  ALREADY EXISTS"))
    }

    pub(crate) fn not_found() -> Self {
        Self::DataNotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub(crate) fn no_changes() -> Self {
        Self::NoChangeFound(NO_CHANGES_MESSAGE.to_string())
    }
}

impl From<Error> for DepartmentsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::not_found();
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => {
                Self::DataAlreadyExists("DEPARTMENT ALREADY EXISTS".to_string())
            }
            Some(
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation,
            ) => Self::bad_request(),
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
