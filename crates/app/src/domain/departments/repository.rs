//! Departments Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    departments::records::{DepartmentId, DepartmentRecord, NewDepartmentRecord},
    status::Status,
};

const FIND_BY_NAME_SQL: &str = include_str!("sql/find_by_name.sql");
const FIND_BY_CODE_SQL: &str = include_str!("sql/find_by_code.sql");
const GET_DEPARTMENT_SQL: &str = include_str!("sql/get_department.sql");
const SEARCH_DEPARTMENT_SQL: &str = include_str!("sql/search_department.sql");
const LIST_DEPARTMENTS_SQL: &str = include_str!("sql/list_departments.sql");
const CREATE_DEPARTMENT_SQL: &str = include_str!("sql/create_department.sql");
const UPDATE_DEPARTMENT_SQL: &str = include_str!("sql/update_department.sql");

#[automock]
#[async_trait]
/// Department persistence operations.
pub trait DepartmentsRepository: Send + Sync {
    /// Id of the department holding `name`, if any.
    async fn find_by_name(&self, name: &str) -> Result<Option<DepartmentId>, sqlx::Error>;

    /// Id of the department holding `code`, if any.
    async fn find_by_code(&self, code: &str) -> Result<Option<DepartmentId>, sqlx::Error>;

    async fn find_by_department_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error>;

    /// Finds a department holding exactly this name, code and status, preferring
    /// the department identified by `id` when several match.
    async fn search_department(
        &self,
        id: DepartmentId,
        name: &str,
        code: &str,
        status: Status,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error>;

    async fn fetch_all_departments(&self) -> Result<Vec<DepartmentRecord>, sqlx::Error>;

    /// Inserts a department and returns it with its assigned id.
    async fn insert_department(
        &self,
        department: NewDepartmentRecord,
    ) -> Result<DepartmentRecord, sqlx::Error>;

    /// Overwrites the stored fields of an existing department.
    async fn save_department(
        &self,
        department: DepartmentRecord,
    ) -> Result<DepartmentRecord, sqlx::Error>;
}

#[derive(Debug, Clone)]
/// PostgreSQL-backed departments repository.
pub struct PgDepartmentsRepository {
    pool: PgPool,
}

impl PgDepartmentsRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentsRepository for PgDepartmentsRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<DepartmentId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_BY_NAME_SQL)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.map(DepartmentId::from_i64))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<DepartmentId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.map(DepartmentId::from_i64))
    }

    async fn find_by_department_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(GET_DEPARTMENT_SQL)
            .bind(id.into_i64())
            .fetch_optional(&self.pool)
            .await
    }

    async fn search_department(
        &self,
        id: DepartmentId,
        name: &str,
        code: &str,
        status: Status,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(SEARCH_DEPARTMENT_SQL)
            .bind(id.into_i64())
            .bind(name)
            .bind(code)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await
    }

    async fn fetch_all_departments(&self) -> Result<Vec<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(LIST_DEPARTMENTS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn insert_department(
        &self,
        department: NewDepartmentRecord,
    ) -> Result<DepartmentRecord, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(CREATE_DEPARTMENT_SQL)
            .bind(department.name)
            .bind(department.code)
            .bind(department.status.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn save_department(
        &self,
        department: DepartmentRecord,
    ) -> Result<DepartmentRecord, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(UPDATE_DEPARTMENT_SQL)
            .bind(department.id.into_i64())
            .bind(department.name)
            .bind(department.code)
            .bind(department.status.as_str())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DepartmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status.parse::<Status>().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: DepartmentId::from_i64(row.try_get("id")?),
            name: row.try_get("department_name")?,
            code: row.try_get("code")?,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    fn surgical() -> NewDepartmentRecord {
        NewDepartmentRecord {
            name: "Surgical".to_string(),
            code: "SRG".to_string(),
            status: Status::Active,
        }
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn insert_assigns_id_and_lookups_find_it() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgDepartmentsRepository::new(db.pool().clone());

        let created = repository.insert_department(surgical()).await?;

        assert_eq!(repository.find_by_name("Surgical").await?, Some(created.id));
        assert_eq!(repository.find_by_code("SRG").await?, Some(created.id));
        assert_eq!(
            repository.find_by_department_id(created.id).await?,
            Some(created.clone())
        );
        assert_eq!(repository.find_by_name("Radiology").await?, None);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn search_prefers_the_requested_department() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgDepartmentsRepository::new(db.pool().clone());

        let created = repository.insert_department(surgical()).await?;

        let found = repository
            .search_department(created.id, "Surgical", "SRG", Status::Active)
            .await?;

        assert_eq!(found, Some(created.clone()));

        let missing = repository
            .search_department(created.id, "Surgical", "SRG", Status::Inactive)
            .await?;

        assert_eq!(missing, None);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn search_finds_other_department_holding_the_same_values() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgDepartmentsRepository::new(db.pool().clone());

        let surgical = repository.insert_department(surgical()).await?;
        let radiology = repository
            .insert_department(NewDepartmentRecord {
                name: "Radiology".to_string(),
                code: "RAD".to_string(),
                status: Status::Active,
            })
            .await?;

        let found = repository
            .search_department(radiology.id, "Surgical", "SRG", Status::Active)
            .await?;

        assert_eq!(found, Some(surgical));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn save_overwrites_fields_and_list_keeps_insert_order() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgDepartmentsRepository::new(db.pool().clone());

        let first = repository.insert_department(surgical()).await?;
        let second = repository
            .insert_department(NewDepartmentRecord {
                name: "Radiology".to_string(),
                code: "RAD".to_string(),
                status: Status::Active,
            })
            .await?;

        let saved = repository
            .save_department(DepartmentRecord {
                status: Status::Inactive,
                ..first.clone()
            })
            .await?;

        assert_eq!(saved.status, Status::Inactive);

        let all = repository.fetch_all_departments().await?;
        let ids: Vec<DepartmentId> = all.iter().map(|d| d.id).collect();

        assert_eq!(ids, vec![first.id, second.id]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL test container"]
    async fn duplicate_name_is_a_unique_violation() -> TestResult {
        let db = TestDb::new().await;
        let repository = PgDepartmentsRepository::new(db.pool().clone());

        repository.insert_department(surgical()).await?;

        let result = repository
            .insert_department(NewDepartmentRecord {
                code: "SRG2".to_string(),
                ..surgical()
            })
            .await;

        let kind = result
            .as_ref()
            .err()
            .and_then(sqlx::Error::as_database_error)
            .map(sqlx::error::DatabaseError::kind);

        assert!(
            matches!(kind, Some(sqlx::error::ErrorKind::UniqueViolation)),
            "expected unique violation, got {result:?}"
        );

        Ok(())
    }
}
