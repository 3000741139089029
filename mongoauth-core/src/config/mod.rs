//! Connection configuration for `MongoAuth`
//!
//! This module provides the immutable [`ConnectionProperties`] bag, its
//! recognised keys, and loading from TOML files.

mod loader;
mod prop;
mod properties;

pub use loader::{PROPERTIES_FILE_NAME, default_properties_path, load_properties};
pub use prop::MongoProp;
pub use properties::{
    ConnectionProperties, ConnectionPropertiesBuilder, DEFAULT_HOST, DEFAULT_PORT,
};
