//! Command handler modules for the CLI.

mod completions;
mod resolve;
mod validate;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config: Option<&str>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Resolve { connection, format } => {
            resolve::cmd_resolve(config, &connection, format)
        }
        Commands::Validate { username, database } => {
            validate::cmd_validate(config, username.as_deref(), database.as_deref())
        }
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
