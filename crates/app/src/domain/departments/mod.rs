//! Departments

pub mod conversions;
pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::DepartmentsServiceError;
pub use repository::{DepartmentsRepository, MockDepartmentsRepository, PgDepartmentsRepository};
pub use service::*;
