use clap::{Parser, Subcommand};
use orgsetup_app::config::LoggingConfig;

mod db;
mod department;
mod profile;

#[derive(Debug, Parser)]
#[command(name = "orgsetup", about = "Organization setup CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Department(department::DepartmentCommand),
    Profile(profile::ProfileCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Department(command) => department::run(command).await,
            Commands::Profile(command) => profile::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
