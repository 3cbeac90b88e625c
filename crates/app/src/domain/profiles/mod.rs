//! Profiles

pub mod data;
pub mod errors;
pub mod queries;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::ProfilesServiceError;
pub use repository::{MockProfilesRepository, PgProfilesRepository, ProfilesRepository};
pub use service::*;
