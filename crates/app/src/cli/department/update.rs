use clap::Args;
use orgsetup_app::domain::{
    departments::{DepartmentsService, data::DepartmentUpdate, records::DepartmentId},
    status::Status,
};

use super::describe;

#[derive(Debug, Args)]
pub(crate) struct UpdateDepartmentArgs {
    /// Department id
    #[arg(long)]
    id: DepartmentId,

    /// New department name
    #[arg(long)]
    name: Option<String>,

    /// New department code
    #[arg(long)]
    code: Option<String>,

    /// New status flag (Y or N)
    #[arg(long)]
    status: Option<Status>,
}

impl From<UpdateDepartmentArgs> for DepartmentUpdate {
    fn from(args: UpdateDepartmentArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            code: args.code,
            status: args.status,
        }
    }
}

pub(super) async fn execute(
    service: &dyn DepartmentsService,
    args: UpdateDepartmentArgs,
) -> Result<String, String> {
    let department = service
        .update_department(args.into())
        .await
        .map_err(|error| format!("failed to update department: {error}"))?;

    Ok(describe(&department))
}
