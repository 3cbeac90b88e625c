use orgsetup_app::domain::departments::DepartmentsService;

pub(super) async fn execute(service: &dyn DepartmentsService) -> Result<String, String> {
    let departments = service
        .fetch_all_departments()
        .await
        .map_err(|error| format!("failed to list departments: {error}"))?;

    Ok(departments
        .iter()
        .map(|department| {
            format!(
                "{}\t{}\t{}\t{}",
                department.id, department.name, department.code, department.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
