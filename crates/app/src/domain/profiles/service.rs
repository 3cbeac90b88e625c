//! Profiles service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::profiles::{
    data::ProfileFilter,
    errors::ProfilesServiceError,
    records::{ProfileId, ProfileMenuDetails, ProfileRecord, parse_menu_entries},
    repository::{PgProfilesRepository, ProfilesRepository},
};

/// Profiles service over any [`ProfilesRepository`].
#[derive(Debug, Clone)]
pub struct DefaultProfilesService<R> {
    repository: R,
}

/// Profiles service backed by PostgreSQL.
pub type PgProfilesService = DefaultProfilesService<PgProfilesRepository>;

impl PgProfilesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(PgProfilesRepository::new(pool))
    }
}

impl<R: ProfilesRepository> DefaultProfilesService<R> {
    #[must_use]
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProfilesRepository> ProfilesService for DefaultProfilesService<R> {
    #[tracing::instrument(name = "profiles.service.search_profiles", skip(self), err)]
    async fn search_profiles(
        &self,
        filter: ProfileFilter,
    ) -> Result<Vec<ProfileRecord>, ProfilesServiceError> {
        let profiles = self.repository.search_profiles(filter).await?;

        debug!(count = profiles.len(), "searched profiles");

        Ok(profiles)
    }

    #[tracing::instrument(
        name = "profiles.service.fetch_profile_menu_details",
        skip(self),
        fields(profile_id = %profile),
        err
    )]
    async fn fetch_profile_menu_details(
        &self,
        profile: ProfileId,
    ) -> Result<ProfileMenuDetails, ProfilesServiceError> {
        let row = self
            .repository
            .fetch_profile_menu_details(profile)
            .await?
            .ok_or(ProfilesServiceError::NotFound)?;

        let menus = parse_menu_entries(row.profile_menu_details.as_deref().unwrap_or_default())
            .map_err(ProfilesServiceError::InvalidData)?;

        Ok(ProfileMenuDetails {
            profile_id: profile,
            description: row.description,
            menus,
        })
    }
}

#[automock]
#[async_trait]
/// Profile read operations.
pub trait ProfilesService: Send + Sync {
    /// Searches profiles by the present filter fields. No match is an empty list.
    async fn search_profiles(
        &self,
        filter: ProfileFilter,
    ) -> Result<Vec<ProfileRecord>, ProfilesServiceError>;

    /// Retrieves a profile's description and active menu assignments.
    async fn fetch_profile_menu_details(
        &self,
        profile: ProfileId,
    ) -> Result<ProfileMenuDetails, ProfilesServiceError>;
}
