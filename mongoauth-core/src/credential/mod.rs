//! Credential resolution for `MongoAuth`
//!
//! Turns [`crate::config::ConnectionProperties`] into the list of
//! [`CredentialDescriptor`]s a MongoDB driver expects:
//!
//! - [`resolve_credentials`] handles username/password accounts, including
//!   the `user@authDatabase` notation
//! - [`CredentialStrategy`] picks between no authentication,
//!   username/password and Kerberos

mod descriptor;
mod mechanism;
mod principal;
mod resolver;
mod strategy;

pub use descriptor::CredentialDescriptor;
pub use mechanism::AuthMechanism;
pub use principal::{DEFAULT_AUTH_DATABASE, PRINCIPAL_SEPARATOR, Principal};
pub use resolver::resolve_credentials;
pub use strategy::{CredentialStrategy, EXTERNAL_AUTH_DATABASE};
