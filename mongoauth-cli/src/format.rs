//! Rendering of connection plans for terminal and JSON output.

use mongoauth_core::connection::ConnectionPlan;
use mongoauth_core::credential::CredentialDescriptor;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

const MASKED_SECRET: &str = "********";
const NO_SECRET: &str = "(none)";

/// Printable view of a credential descriptor with the secret masked
#[derive(Debug, Serialize)]
pub struct CredentialView<'a> {
    pub principal_name: &'a str,
    pub authentication_database: &'a str,
    pub mechanism: String,
    pub secret: &'static str,
}

impl<'a> From<&'a CredentialDescriptor> for CredentialView<'a> {
    fn from(cred: &'a CredentialDescriptor) -> Self {
        Self {
            principal_name: cred.principal_name(),
            authentication_database: cred.authentication_database(),
            mechanism: cred.mechanism().to_string(),
            secret: if cred.secret().expose_secret().is_empty() {
                NO_SECRET
            } else {
                MASKED_SECRET
            },
        }
    }
}

/// Printable view of a connection plan
#[derive(Debug, Serialize)]
pub struct PlanView<'a> {
    pub strategy: &'static str,
    pub address: String,
    pub database: Option<&'a str>,
    pub credentials: Vec<CredentialView<'a>>,
}

impl<'a> From<&'a ConnectionPlan> for PlanView<'a> {
    fn from(plan: &'a ConnectionPlan) -> Self {
        Self {
            strategy: plan.strategy.name(),
            address: plan.address(),
            database: plan.database.as_deref(),
            credentials: plan.credentials.iter().map(CredentialView::from).collect(),
        }
    }
}

/// Renders a plan in the requested format
pub fn render_plan(plan: &ConnectionPlan, format: OutputFormat) -> Result<String, CliError> {
    let view = PlanView::from(plan);
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&view).map_err(|e| CliError::Output(e.to_string()))
        }
        OutputFormat::Table => Ok(render_table(&view)),
    }
}

fn render_table(view: &PlanView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Strategy:  {}\n", view.strategy));
    out.push_str(&format!("Address:   {}\n", view.address));
    out.push_str(&format!("Database:  {}\n", view.database.unwrap_or("-")));

    if view.credentials.is_empty() {
        out.push_str("\nNo credentials\n");
        return out;
    }

    out.push_str(&format!(
        "\n{:<20} {:<20} {:<14} {}\n",
        "USERNAME", "AUTH DATABASE", "MECHANISM", "PASSWORD"
    ));
    out.push_str(&format!("{}\n", "-".repeat(66)));
    for cred in &view.credentials {
        out.push_str(&format!(
            "{:<20} {:<20} {:<14} {}\n",
            cred.principal_name, cred.authentication_database, cred.mechanism, cred.secret
        ));
    }
    out
}
