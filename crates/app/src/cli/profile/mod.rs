use clap::{Args, Subcommand};
use orgsetup_app::{config::DatabaseConfig, context::AppContext};

mod menus;
mod search;

#[derive(Debug, Args)]
pub(crate) struct ProfileCommand {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Search profiles by optional filters
    Search(search::SearchProfilesArgs),
    /// Show a profile's active menu assignments
    Menus(menus::ProfileMenusArgs),
}

pub(crate) async fn run(command: ProfileCommand) -> Result<(), String> {
    let context = AppContext::from_database_url(&command.database.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = context.profiles.as_ref();

    let output = match command.command {
        ProfileSubcommand::Search(args) => search::execute(service, args).await?,
        ProfileSubcommand::Menus(args) => menus::execute(service, args).await?,
    };

    println!("{output}");

    Ok(())
}
