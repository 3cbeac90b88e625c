//! Profiles Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Row, postgres::PgRow};

use crate::domain::{
    departments::records::DepartmentId,
    profiles::{
        data::ProfileFilter,
        queries,
        records::{ProfileId, ProfileRecord, SubDepartmentId},
    },
    status::Status,
};

/// Undecoded result of the profile menu detail query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileMenuDetailsRow {
    /// Comma-joined `id-role_id-user_menu_id` triples.
    pub profile_menu_details: Option<String>,
    pub description: Option<String>,
}

#[automock]
#[async_trait]
/// Profile read operations.
pub trait ProfilesRepository: Send + Sync {
    /// Profiles matching every present filter field, newest id first.
    async fn search_profiles(&self, filter: ProfileFilter)
    -> Result<Vec<ProfileRecord>, sqlx::Error>;

    /// Aggregated active menus of a profile, or `None` when nothing matched.
    async fn fetch_profile_menu_details(
        &self,
        profile: ProfileId,
    ) -> Result<Option<ProfileMenuDetailsRow>, sqlx::Error>;
}

#[derive(Debug, Clone)]
/// PostgreSQL-backed profiles repository.
pub struct PgProfilesRepository {
    pool: PgPool,
}

impl PgProfilesRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfilesRepository for PgProfilesRepository {
    #[tracing::instrument(name = "profiles.repository.search_profiles", skip(self), err)]
    async fn search_profiles(
        &self,
        filter: ProfileFilter,
    ) -> Result<Vec<ProfileRecord>, sqlx::Error> {
        let mut builder = queries::profile_search_query(&filter);

        builder
            .build_query_as::<ProfileRecord>()
            .fetch_all(&self.pool)
            .await
    }

    #[tracing::instrument(
        name = "profiles.repository.fetch_profile_menu_details",
        skip(self),
        fields(profile_id = %profile),
        err
    )]
    async fn fetch_profile_menu_details(
        &self,
        profile: ProfileId,
    ) -> Result<Option<ProfileMenuDetailsRow>, sqlx::Error> {
        let mut builder = queries::profile_menu_detail_query(profile);

        builder
            .build_query_as::<ProfileMenuDetailsRow>()
            .fetch_optional(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProfileRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status.parse::<Status>().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: ProfileId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            status,
            department_id: DepartmentId::from_i64(row.try_get("department_id")?),
            sub_department_id: SubDepartmentId::from_i64(row.try_get("sub_department_id")?),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProfileMenuDetailsRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            profile_menu_details: row.try_get("profile_menu_details")?,
            description: row.try_get("description")?,
        })
    }
}
