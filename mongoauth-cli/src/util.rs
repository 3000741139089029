//! Shared helpers for building connection properties from CLI input.

use std::path::PathBuf;

use mongoauth_core::config::{
    ConnectionProperties, MongoProp, default_properties_path, load_properties,
};
use secrecy::SecretString;

use crate::cli::ConnectionArgs;
use crate::error::CliError;

/// Expands a leading `~` in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Loads the properties file named by `--config`, or the default file if
/// it exists
///
/// A missing default file yields an empty property bag; a missing explicit
/// file is an error.
pub fn load_base_properties(config: Option<&str>) -> Result<ConnectionProperties, CliError> {
    let path = match config {
        Some(raw) => expand_path(raw),
        None => match default_properties_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(ConnectionProperties::default()),
        },
    };

    tracing::debug!(path = %path.display(), "Loading connection properties");
    load_properties(&path)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
}

impl ConnectionArgs {
    /// Converts the flags into a property bag, prompting for the password
    /// if requested
    pub fn to_properties(&self) -> Result<ConnectionProperties, CliError> {
        let mut builder = ConnectionProperties::builder()
            .set_opt(MongoProp::Username, self.username.as_deref())
            .set_opt(MongoProp::DatabaseName, self.database.as_deref())
            .set_opt(MongoProp::Host, self.host.as_deref())
            .set_opt(MongoProp::Port, self.port.map(|p| p.to_string()))
            .set_opt(MongoProp::AuthMechanism, self.mechanism.as_deref());

        if self.kerberos {
            builder = builder.set(MongoProp::UseKerberos, "true");
        } else if self.no_kerberos {
            builder = builder.set(MongoProp::UseKerberos, "false");
        }

        if self.prompt_password {
            let password = rpassword::prompt_password("Password: ")?;
            builder = builder.password(SecretString::from(password));
        } else {
            builder = builder.set_opt(MongoProp::Password, self.password.as_deref());
        }

        Ok(builder.build())
    }
}
