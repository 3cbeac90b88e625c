//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::{
        departments::{DepartmentsService, PgDepartmentsService},
        profiles::{PgProfilesService, ProfilesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub departments: Arc<dyn DepartmentsService>,
    pub profiles: Arc<dyn ProfilesService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            departments: Arc::new(PgDepartmentsService::new(pool.clone())),
            profiles: Arc::new(PgProfilesService::new(pool)),
        })
    }
}
