use clap::Args;
use orgsetup_app::domain::departments::{DepartmentsService, records::DepartmentId};

use super::describe;

#[derive(Debug, Args)]
pub(crate) struct DeleteDepartmentArgs {
    /// Department id
    #[arg(long)]
    id: DepartmentId,
}

pub(super) async fn execute(
    service: &dyn DepartmentsService,
    args: DeleteDepartmentArgs,
) -> Result<String, String> {
    let department = service
        .delete_department(args.id)
        .await
        .map_err(|error| format!("failed to delete department: {error}"))?;

    Ok(describe(&department))
}

#[cfg(test)]
mod tests {
    use orgsetup_app::domain::{
        departments::{MockDepartmentsService, records::DepartmentRecord},
        status::Status,
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn prints_inactive_department() -> TestResult {
        let mut service = MockDepartmentsService::new();

        service
            .expect_delete_department()
            .once()
            .withf(|id| *id == DepartmentId::from_i64(2))
            .return_once(|id| {
                Ok(DepartmentRecord {
                    id,
                    name: "Radiology".to_string(),
                    code: "RAD".to_string(),
                    status: Status::Inactive,
                })
            });

        let output = execute(
            &service,
            DeleteDepartmentArgs {
                id: DepartmentId::from_i64(2),
            },
        )
        .await?;

        assert_eq!(
            output,
            "department_id: 2\ndepartment_name: Radiology\ncode: RAD\nstatus: N"
        );

        Ok(())
    }
}
