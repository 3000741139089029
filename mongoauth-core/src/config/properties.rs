//! Immutable connection property bag.

use std::collections::BTreeMap;

use secrecy::SecretString;

use super::MongoProp;
use crate::credential::AuthMechanism;
use crate::error::{ConfigError, ConfigResult};

/// Host used when none is configured
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 27017;

/// Connection properties for a single server
///
/// Values are fixed at construction; build one with
/// [`ConnectionProperties::builder`] or load it from a file with
/// [`super::load_properties`]. The password is kept apart from the other
/// values as a [`SecretString`] so `Debug` output never reveals it.
#[derive(Debug, Default)]
pub struct ConnectionProperties {
    values: BTreeMap<MongoProp, String>,
    password: Option<SecretString>,
}

impl ConnectionProperties {
    /// Starts building a new property bag
    #[must_use]
    pub fn builder() -> ConnectionPropertiesBuilder {
        ConnectionPropertiesBuilder::default()
    }

    /// Returns the value of a non-secret property
    ///
    /// Always returns `None` for [`MongoProp::Password`]; use
    /// [`Self::password`] instead.
    #[must_use]
    pub fn get(&self, prop: MongoProp) -> Option<&str> {
        self.values.get(&prop).map(String::as_str)
    }

    /// Returns true if the property has a value
    #[must_use]
    pub fn contains(&self, prop: MongoProp) -> bool {
        match prop {
            MongoProp::Password => self.password.is_some(),
            _ => self.values.contains_key(&prop),
        }
    }

    /// The configured principal, possibly in `user@authDatabase` form
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.get(MongoProp::Username)
    }

    /// The configured target database
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        self.get(MongoProp::DatabaseName)
    }

    /// The configured password
    #[must_use]
    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    /// Server host, defaulting to [`DEFAULT_HOST`]
    #[must_use]
    pub fn host(&self) -> &str {
        self.get(MongoProp::Host).unwrap_or(DEFAULT_HOST)
    }

    /// Server port, defaulting to [`DEFAULT_PORT`]
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value is not a valid port.
    pub fn port(&self) -> ConfigResult<u16> {
        match self.get(MongoProp::Port) {
            None => Ok(DEFAULT_PORT),
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or_else(|| invalid(MongoProp::Port, raw)),
        }
    }

    /// Whether Kerberos authentication is requested
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` unless the value is `true` or
    /// `false` (any case).
    pub fn use_kerberos(&self) -> ConfigResult<bool> {
        match self.get(MongoProp::UseKerberos).map(str::trim) {
            None => Ok(false),
            Some(raw) if raw.eq_ignore_ascii_case("true") => Ok(true),
            Some(raw) if raw.eq_ignore_ascii_case("false") => Ok(false),
            Some(raw) => Err(invalid(MongoProp::UseKerberos, raw)),
        }
    }

    /// The requested authentication mechanism
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unrecognised mechanism name.
    pub fn auth_mechanism(&self) -> ConfigResult<AuthMechanism> {
        match self.get(MongoProp::AuthMechanism) {
            None => Ok(AuthMechanism::default()),
            Some(raw) => raw
                .parse()
                .map_err(|()| invalid(MongoProp::AuthMechanism, raw)),
        }
    }

    /// Layers `overrides` on top of `self`
    ///
    /// Every property present in `overrides` replaces the one in `self`.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        self.values.extend(overrides.values);
        if overrides.password.is_some() {
            self.password = overrides.password;
        }
        self
    }

    /// Number of properties with a value
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len() + usize::from(self.password.is_some())
    }

    /// Returns true if no property has a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn invalid(property: MongoProp, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        property,
        value: value.to_string(),
    }
}

/// Builder for [`ConnectionProperties`]
#[derive(Debug, Default)]
pub struct ConnectionPropertiesBuilder {
    props: ConnectionProperties,
}

impl ConnectionPropertiesBuilder {
    /// Sets a property, replacing any previous value
    #[must_use]
    pub fn set(mut self, prop: MongoProp, value: impl Into<String>) -> Self {
        let value = value.into();
        if prop.is_secret() {
            self.props.password = Some(SecretString::from(value));
        } else {
            self.props.values.insert(prop, value);
        }
        self
    }

    /// Sets a property only when a value is given
    #[must_use]
    pub fn set_opt(self, prop: MongoProp, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(prop, value),
            None => self,
        }
    }

    /// Sets the password from an existing secret
    #[must_use]
    pub fn password(mut self, password: SecretString) -> Self {
        self.props.password = Some(password);
        self
    }

    /// Sets a property by its key name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProperty` if `key` is not a recognised
    /// property name.
    pub fn set_str(self, key: &str, value: impl Into<String>) -> ConfigResult<Self> {
        let prop = key.parse::<MongoProp>()?;
        Ok(self.set(prop, value))
    }

    /// Finishes building
    #[must_use]
    pub fn build(self) -> ConnectionProperties {
        self.props
    }
}
