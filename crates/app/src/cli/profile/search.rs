use clap::Args;
use orgsetup_app::domain::{
    departments::records::DepartmentId,
    profiles::{ProfilesService, data::ProfileFilter, records::SubDepartmentId},
};

#[derive(Debug, Args)]
pub(crate) struct SearchProfilesArgs {
    /// Exact profile name
    #[arg(long)]
    name: Option<String>,

    /// Department id
    #[arg(long)]
    department_id: Option<DepartmentId>,

    /// Sub-department id
    #[arg(long)]
    sub_department_id: Option<SubDepartmentId>,
}

impl From<SearchProfilesArgs> for ProfileFilter {
    fn from(args: SearchProfilesArgs) -> Self {
        Self {
            name: args.name,
            department_id: args.department_id,
            sub_department_id: args.sub_department_id,
        }
    }
}

pub(super) async fn execute(
    service: &dyn ProfilesService,
    args: SearchProfilesArgs,
) -> Result<String, String> {
    let profiles = service
        .search_profiles(args.into())
        .await
        .map_err(|error| format!("failed to search profiles: {error}"))?;

    if profiles.is_empty() {
        return Ok("no profiles found".to_string());
    }

    Ok(profiles
        .iter()
        .map(|profile| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                profile.id,
                profile.name,
                profile.status,
                profile.department_id,
                profile.sub_department_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
