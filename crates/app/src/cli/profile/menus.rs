use clap::Args;
use orgsetup_app::domain::profiles::{ProfilesService, records::ProfileId};

#[derive(Debug, Args)]
pub(crate) struct ProfileMenusArgs {
    /// Profile id
    #[arg(long)]
    id: ProfileId,
}

pub(super) async fn execute(
    service: &dyn ProfilesService,
    args: ProfileMenusArgs,
) -> Result<String, String> {
    let details = service
        .fetch_profile_menu_details(args.id)
        .await
        .map_err(|error| format!("failed to fetch profile menus: {error}"))?;

    let mut lines = vec![
        format!("profile_id: {}", details.profile_id),
        format!("description: {}", details.description.unwrap_or_default()),
    ];

    lines.extend(details.menus.iter().map(|menu| {
        format!(
            "menu {}: role {} -> user menu {}",
            menu.id, menu.role_id, menu.user_menu_id
        )
    }));

    Ok(lines.join("\n"))
}
