//! Departments service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::domain::departments::{
    conversions,
    data::{DepartmentSetup, DepartmentUpdate},
    errors::DepartmentsServiceError,
    records::{DepartmentId, DepartmentRecord},
    repository::{DepartmentsRepository, PgDepartmentsRepository},
};

/// Departments service over any [`DepartmentsRepository`].
#[derive(Debug, Clone)]
pub struct DefaultDepartmentsService<R> {
    repository: R,
}

/// Departments service backed by PostgreSQL.
pub type PgDepartmentsService = DefaultDepartmentsService<PgDepartmentsRepository>;

impl PgDepartmentsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(PgDepartmentsRepository::new(pool))
    }
}

impl<R: DepartmentsRepository> DefaultDepartmentsService<R> {
    #[must_use]
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: DepartmentsRepository> DepartmentsService for DefaultDepartmentsService<R> {
    #[tracing::instrument(
        name = "departments.service.add_department",
        skip(self, department),
        fields(department_name = tracing::field::Empty),
        err
    )]
    async fn add_department(
        &self,
        department: Option<DepartmentSetup>,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let department = department.ok_or_else(DepartmentsServiceError::bad_request)?;

        tracing::Span::current().record("department_name", department.name.as_str());

        if self
            .repository
            .find_by_name(&department.name)
            .await?
            .is_some()
        {
            return Err(DepartmentsServiceError::name_exists(&department.name));
        }

        if self
            .repository
            .find_by_code(&department.code)
            .await?
            .is_some()
        {
            return Err(DepartmentsServiceError::code_exists(&department.code));
        }

        let created = self
            .repository
            .insert_department(conversions::to_new_record(department))
            .await?;

        info!(department_id = %created.id, "created department");

        Ok(created)
    }

    #[tracing::instrument(name = "departments.service.fetch_all_departments", skip(self), err)]
    async fn fetch_all_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError> {
        let departments = self.repository.fetch_all_departments().await?;

        if departments.is_empty() {
            return Err(DepartmentsServiceError::not_found());
        }

        debug!(count = departments.len(), "fetched departments");

        Ok(departments)
    }

    #[tracing::instrument(
        name = "departments.service.delete_department",
        skip(self),
        fields(department_id = %id),
        err
    )]
    async fn delete_department(
        &self,
        id: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let existing = self
            .repository
            .find_by_department_id(id)
            .await?
            .ok_or_else(DepartmentsServiceError::not_found)?;

        let deleted = self
            .repository
            .save_department(conversions::to_soft_deleted(existing))
            .await?;

        info!(department_id = %deleted.id, "soft-deleted department");

        Ok(deleted)
    }

    #[tracing::instrument(
        name = "departments.service.update_department",
        skip(self, update),
        fields(department_id = %update.id),
        err
    )]
    async fn update_department(
        &self,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let existing = self
            .repository
            .find_by_department_id(update.id)
            .await?
            .ok_or_else(DepartmentsServiceError::not_found)?;

        let merged = conversions::to_merged(update, existing);

        let unchanged = self
            .repository
            .search_department(merged.id, &merged.name, &merged.code, merged.status)
            .await?;

        if unchanged.is_some() {
            return Err(DepartmentsServiceError::no_changes());
        }

        let updated = self.repository.save_department(merged).await?;

        info!(department_id = %updated.id, "updated department");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
/// Department lifecycle operations.
pub trait DepartmentsService: Send + Sync {
    /// Creates a department after checking its name and code are unused.
    ///
    /// `None` stands for a request without a body and is rejected as bad request data.
    async fn add_department(
        &self,
        department: Option<DepartmentSetup>,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Retrieves all departments in storage order.
    async fn fetch_all_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError>;

    /// Marks a department inactive.
    async fn delete_department(
        &self,
        id: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Applies the supplied fields to an existing department.
    async fn update_department(
        &self,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        departments::{
            errors::{BAD_REQUEST_MESSAGE, NO_CHANGES_MESSAGE, NOT_FOUND_MESSAGE},
            records::NewDepartmentRecord,
            repository::MockDepartmentsRepository,
        },
        status::Status,
    };

    use super::*;

    fn setup() -> DepartmentSetup {
        DepartmentSetup {
            name: "Surgical".to_string(),
            code: "SRG".to_string(),
            status: Status::Active,
        }
    }

    fn saved() -> DepartmentRecord {
        DepartmentRecord {
            id: DepartmentId::from_i64(1),
            name: "Surgical".to_string(),
            code: "SRG".to_string(),
            status: Status::Active,
        }
    }

    fn update() -> DepartmentUpdate {
        DepartmentUpdate {
            id: DepartmentId::from_i64(1),
            name: Some("Surgery".to_string()),
            code: Some("SRG".to_string()),
            status: Some(Status::Active),
        }
    }

    fn service(repo: MockDepartmentsRepository) -> DefaultDepartmentsService<MockDepartmentsRepository> {
        DefaultDepartmentsService::with_repository(repo)
    }

    #[tokio::test]
    async fn add_department_rejects_existing_name() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_name()
            .once()
            .withf(|name| name == "Surgical")
            .return_once(|_| Ok(Some(DepartmentId::from_i64(1))));

        repo.expect_find_by_code().never();
        repo.expect_insert_department().never();

        let result = service(repo).add_department(Some(setup())).await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::DataAlreadyExists(message))
                    if message == "DEPARTMENT WITH NAME : Surgical  ALREADY EXISTS"
            ),
            "expected DataAlreadyExists for name, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_department_rejects_existing_code() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_name().once().return_once(|_| Ok(None));

        repo.expect_find_by_code()
            .once()
            .withf(|code| code == "SRG")
            .return_once(|_| Ok(Some(DepartmentId::from_i64(1))));

        repo.expect_insert_department().never();

        let result = service(repo).add_department(Some(setup())).await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::DataAlreadyExists(message))
                    if message == "DEPARTMENT WITH CODE : SRG  ALREADY EXISTS"
            ),
            "expected DataAlreadyExists for code, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_department_saves_converted_setup_once() -> TestResult {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_name().once().return_once(|_| Ok(None));
        repo.expect_find_by_code().once().return_once(|_| Ok(None));

        repo.expect_insert_department()
            .once()
            .withf(|department| {
                *department
                    == NewDepartmentRecord {
                        name: "Surgical".to_string(),
                        code: "SRG".to_string(),
                        status: Status::Active,
                    }
            })
            .return_once(|_| Ok(saved()));

        let created = service(repo).add_department(Some(setup())).await?;

        assert_eq!(created, saved());

        Ok(())
    }

    #[tokio::test]
    async fn add_department_without_body_is_bad_request() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_name().never();
        repo.expect_find_by_code().never();
        repo.expect_insert_department().never();

        let result = service(repo).add_department(None).await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::BadRequestData(message)) if message == BAD_REQUEST_MESSAGE
            ),
            "expected BadRequestData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_department_propagates_storage_errors() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_name()
            .once()
            .return_once(|_| Err(sqlx::Error::PoolTimedOut));

        repo.expect_insert_department().never();

        let result = service(repo).add_department(Some(setup())).await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::Sql(_))),
            "expected Sql, got {result:?}"
        );
    }

    #[tokio::test]
    async fn fetch_all_departments_empty_is_not_found() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_fetch_all_departments()
            .once()
            .return_once(|| Ok(Vec::new()));

        let result = service(repo).fetch_all_departments().await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::DataNotFound(message)) if message == NOT_FOUND_MESSAGE
            ),
            "expected DataNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn fetch_all_departments_returns_storage_order() -> TestResult {
        let radiology = DepartmentRecord {
            id: DepartmentId::from_i64(2),
            name: "Radiology".to_string(),
            code: "RAD".to_string(),
            status: Status::Inactive,
        };

        let stored = vec![radiology, saved()];
        let expected = stored.clone();

        let mut repo = MockDepartmentsRepository::new();

        repo.expect_fetch_all_departments()
            .once()
            .return_once(move || Ok(stored));

        let departments = service(repo).fetch_all_departments().await?;

        assert_eq!(departments, expected);
        assert_eq!(departments.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn delete_department_unknown_id_is_not_found() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .withf(|id| *id == DepartmentId::from_i64(1))
            .return_once(|_| Ok(None));

        repo.expect_save_department().never();

        let result = service(repo)
            .delete_department(DepartmentId::from_i64(1))
            .await;

        assert!(
            matches!(result, Err(DepartmentsServiceError::DataNotFound(_))),
            "expected DataNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_department_saves_soft_deleted_record() -> TestResult {
        let soft_deleted = DepartmentRecord {
            status: Status::Inactive,
            ..saved()
        };
        let expected = soft_deleted.clone();

        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .return_once(|_| Ok(Some(saved())));

        repo.expect_save_department()
            .once()
            .withf(move |department| *department == soft_deleted)
            .returning(|department| Ok(department));

        let deleted = service(repo)
            .delete_department(DepartmentId::from_i64(1))
            .await?;

        assert_eq!(deleted, expected);

        Ok(())
    }

    #[tokio::test]
    async fn delete_department_twice_stays_inactive() -> TestResult {
        let inactive = DepartmentRecord {
            status: Status::Inactive,
            ..saved()
        };
        let stored = inactive.clone();

        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .times(2)
            .returning(move |_| Ok(Some(stored.clone())));

        repo.expect_save_department()
            .times(2)
            .returning(|department| Ok(department));

        let svc = service(repo);

        let first = svc.delete_department(DepartmentId::from_i64(1)).await?;
        let second = svc.delete_department(DepartmentId::from_i64(1)).await?;

        assert_eq!(first, inactive);
        assert_eq!(second, inactive);

        Ok(())
    }

    #[tokio::test]
    async fn update_department_unknown_id_is_not_found() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .return_once(|_| Ok(None));

        repo.expect_search_department().never();
        repo.expect_save_department().never();

        let result = service(repo).update_department(update()).await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::DataNotFound(message)) if message == NOT_FOUND_MESSAGE
            ),
            "expected DataNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_department_matching_record_is_no_change() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .return_once(|_| Ok(Some(saved())));

        repo.expect_search_department()
            .once()
            .withf(|id, name, code, status| {
                *id == DepartmentId::from_i64(1)
                    && name == "Surgery"
                    && code == "SRG"
                    && *status == Status::Active
            })
            .return_once(|_, _, _, _| Ok(Some(saved())));

        repo.expect_save_department().never();

        let result = service(repo).update_department(update()).await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::NoChangeFound(message)) if message == NO_CHANGES_MESSAGE
            ),
            "expected NoChangeFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_department_matching_other_department_is_no_change() {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .return_once(|_| Ok(Some(saved())));

        repo.expect_search_department()
            .once()
            .withf(|id, _, _, _| *id == DepartmentId::from_i64(1))
            .return_once(|_, _, _, _| {
                Ok(Some(DepartmentRecord {
                    id: DepartmentId::from_i64(2),
                    name: "Surgery".to_string(),
                    code: "SRG".to_string(),
                    status: Status::Active,
                }))
            });

        repo.expect_save_department().never();

        let result = service(repo).update_department(update()).await;

        assert!(
            matches!(
                &result,
                Err(DepartmentsServiceError::NoChangeFound(message)) if message == NO_CHANGES_MESSAGE
            ),
            "expected NoChangeFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_department_saves_merged_record() -> TestResult {
        let merged = DepartmentRecord {
            name: "Surgery".to_string(),
            ..saved()
        };
        let expected = merged.clone();

        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .return_once(|_| Ok(Some(saved())));

        repo.expect_search_department()
            .once()
            .return_once(|_, _, _, _| Ok(None));

        repo.expect_save_department()
            .once()
            .withf(move |department| *department == merged)
            .returning(|department| Ok(department));

        let updated = service(repo).update_department(update()).await?;

        assert_eq!(updated, expected);

        Ok(())
    }

    #[tokio::test]
    async fn update_department_keeps_unset_fields() -> TestResult {
        let mut repo = MockDepartmentsRepository::new();

        repo.expect_find_by_department_id()
            .once()
            .return_once(|_| Ok(Some(saved())));

        repo.expect_search_department()
            .once()
            .withf(|_, name, code, status| {
                name == "Surgical" && code == "SRG" && *status == Status::Inactive
            })
            .return_once(|_, _, _, _| Ok(None));

        repo.expect_save_department()
            .once()
            .returning(|department| Ok(department));

        let updated = service(repo)
            .update_department(DepartmentUpdate {
                id: DepartmentId::from_i64(1),
                name: None,
                code: None,
                status: Some(Status::Inactive),
            })
            .await?;

        assert_eq!(updated.name, "Surgical");
        assert_eq!(updated.code, "SRG");
        assert_eq!(updated.status, Status::Inactive);

        Ok(())
    }
}
