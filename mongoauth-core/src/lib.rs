//! `MongoAuth` Core Library
//!
//! Derives the authentication credentials a MongoDB driver needs from a set
//! of connection properties.
//!
//! # Crate Structure
//!
//! - [`config`] - Connection property bag, keys and TOML loading
//! - [`credential`] - Credential descriptors, the `user@authDatabase`
//!   notation and authentication strategies
//! - [`connection`] - One-stop connection setup for a driver
//! - [`tracing`] - Structured logging initialisation
//!
//! # Example
//!
//! ```
//! use mongoauth_core::config::{ConnectionProperties, MongoProp};
//! use mongoauth_core::credential::resolve_credentials;
//!
//! let props = ConnectionProperties::builder()
//!     .set(MongoProp::Username, "alice@reporting")
//!     .set(MongoProp::DatabaseName, "sales")
//!     .set(MongoProp::Password, "p1")
//!     .build();
//!
//! let creds = resolve_credentials(&props)?;
//! assert_eq!(creds[0].principal_name(), "alice");
//! assert_eq!(creds[0].authentication_database(), "reporting");
//! # Ok::<(), mongoauth_core::error::CredentialError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod connection;
pub mod credential;
pub mod error;
pub mod tracing;

pub use config::{ConnectionProperties, MongoProp, load_properties};
pub use connection::ConnectionPlan;
pub use credential::{
    AuthMechanism, CredentialDescriptor, CredentialStrategy, Principal, resolve_credentials,
};
pub use error::{
    ConfigError, ConfigResult, CredentialError, CredentialResult, MongoAuthError,
    MongoAuthResult,
};
