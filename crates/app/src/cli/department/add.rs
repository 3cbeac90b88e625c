use clap::Args;
use orgsetup_app::domain::{
    departments::{DepartmentsService, data::DepartmentSetup},
    status::Status,
};

use super::describe;

#[derive(Debug, Args)]
pub(crate) struct AddDepartmentArgs {
    /// Department name
    #[arg(long)]
    name: String,

    /// Department code
    #[arg(long)]
    code: String,

    /// Status flag (Y or N)
    #[arg(long, default_value = "Y")]
    status: Status,
}

pub(super) async fn execute(
    service: &dyn DepartmentsService,
    args: AddDepartmentArgs,
) -> Result<String, String> {
    let department = service
        .add_department(Some(DepartmentSetup {
            name: args.name,
            code: args.code,
            status: args.status,
        }))
        .await
        .map_err(|error| format!("failed to add department: {error}"))?;

    Ok(describe(&department))
}
