use clap::{Args, Subcommand};
use orgsetup_app::{
    config::DatabaseConfig, context::AppContext,
    domain::departments::records::DepartmentRecord,
};

mod add;
mod delete;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct DepartmentCommand {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(subcommand)]
    command: DepartmentSubcommand,
}

#[derive(Debug, Subcommand)]
enum DepartmentSubcommand {
    /// Create a department
    Add(add::AddDepartmentArgs),
    /// List every department
    List,
    /// Change fields of an existing department
    Update(update::UpdateDepartmentArgs),
    /// Mark a department inactive
    Delete(delete::DeleteDepartmentArgs),
}

pub(crate) async fn run(command: DepartmentCommand) -> Result<(), String> {
    let context = AppContext::from_database_url(&command.database.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = context.departments.as_ref();

    let output = match command.command {
        DepartmentSubcommand::Add(args) => add::execute(service, args).await?,
        DepartmentSubcommand::List => list::execute(service).await?,
        DepartmentSubcommand::Update(args) => update::execute(service, args).await?,
        DepartmentSubcommand::Delete(args) => delete::execute(service, args).await?,
    };

    println!("{output}");

    Ok(())
}

fn describe(department: &DepartmentRecord) -> String {
    format!(
        "department_id: {}\ndepartment_name: {}\ncode: {}\nstatus: {}",
        department.id, department.name, department.code, department.status
    )
}
