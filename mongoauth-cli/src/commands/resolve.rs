//! Resolve command: prepares a connection and prints its credentials.

use mongoauth_core::connection::ConnectionPlan;

use crate::cli::{ConnectionArgs, OutputFormat};
use crate::error::CliError;
use crate::format::render_plan;
use crate::util::load_base_properties;

/// Merges file and flag properties, resolves credentials and prints the
/// plan with the password masked.
pub fn cmd_resolve(
    config: Option<&str>,
    args: &ConnectionArgs,
    format: OutputFormat,
) -> Result<(), CliError> {
    let props = load_base_properties(config)?.merge(args.to_properties()?);
    let plan = ConnectionPlan::prepare(&props)?;

    println!("{}", render_plan(&plan, format)?);
    Ok(())
}
