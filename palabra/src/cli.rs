//! Arguments accepted by the `palabra` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};


#[derive(Parser, Debug)]
#[command(
    name = "palabra",
    author,
    about = "Serves the Palabra vocabulary and exercise API.",
    version
)]
pub struct CLIArgs {
    /// Falls back to `./data/configuration.toml` when not given.
    #[arg(
        short = 'c',
        long = "configurationFilePath",
        value_name = "FILE",
        help = "TOML configuration to start the server with (default: ./data/configuration.toml)"
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        long = "apply-pending-migrations",
        action = ArgAction::SetTrue,
        help = "Bring the database schema up to date before accepting requests."
    )]
    pub apply_pending_migrations: bool,
}
