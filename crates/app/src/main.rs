//! Organization setup CLI

use std::process;

use clap::Parser;
use orgsetup_app::{config, observability};

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    config::load_dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init_logging(&cli.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
