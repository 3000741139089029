//! Loading connection properties from TOML files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{ConnectionProperties, MongoProp};
use crate::error::{ConfigError, ConfigResult};
use crate::tracing::span_names;

/// File name of the default properties file
pub const PROPERTIES_FILE_NAME: &str = "connection.toml";

/// On-disk layout of a properties file
///
/// Keys use the canonical [`MongoProp`] names.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertiesFile {
    host: Option<String>,
    port: Option<u16>,
    #[serde(rename = "databaseName")]
    database_name: Option<String>,
    username: Option<String>,
    password: Option<String>,
    #[serde(rename = "useKerberos")]
    use_kerberos: Option<bool>,
    #[serde(rename = "authMechanism")]
    auth_mechanism: Option<String>,
}

impl From<PropertiesFile> for ConnectionProperties {
    fn from(file: PropertiesFile) -> Self {
        Self::builder()
            .set_opt(MongoProp::Host, file.host)
            .set_opt(MongoProp::Port, file.port.map(|p| p.to_string()))
            .set_opt(MongoProp::DatabaseName, file.database_name)
            .set_opt(MongoProp::Username, file.username)
            .set_opt(MongoProp::Password, file.password)
            .set_opt(MongoProp::UseKerberos, file.use_kerberos.map(|k| k.to_string()))
            .set_opt(MongoProp::AuthMechanism, file.auth_mechanism)
            .build()
    }
}

impl ConnectionProperties {
    /// Parses properties from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, unknown keys or
    /// values of the wrong type.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: PropertiesFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(file.into())
    }
}

/// Loads connection properties from a TOML file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` if its content is invalid.
pub fn load_properties(path: &Path) -> ConfigResult<ConnectionProperties> {
    let _span = tracing::debug_span!(span_names::CONFIG_LOAD, path = %path.display()).entered();

    let content = std::fs::read_to_string(path)?;
    let props = ConnectionProperties::from_toml_str(&content)?;

    tracing::debug!(property_count = props.len(), "Loaded connection properties");
    Ok(props)
}

/// Default location of the properties file
///
/// `<config dir>/mongoauth/connection.toml`, or `None` when the platform
/// has no config directory.
#[must_use]
pub fn default_properties_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mongoauth").join(PROPERTIES_FILE_NAME))
}
