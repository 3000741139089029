//! Properties file loading and end-to-end connection setup

use std::fs;

use mongoauth_core::config::{ConnectionProperties, MongoProp, load_properties};
use mongoauth_core::connection::ConnectionPlan;
use mongoauth_core::credential::{AuthMechanism, CredentialStrategy};
use mongoauth_core::error::{ConfigError, CredentialError, MongoAuthError};
use secrecy::ExposeSecret;
use tempfile::TempDir;

fn write_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("connection.toml");
    fs::write(&path, content).expect("Failed to write properties file");
    path
}

#[test]
fn test_load_and_prepare_username_password() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(
        &dir,
        r#"
host = "mongo.internal"
port = 27019
databaseName = "sales"
username = "etl@admin"
password = "s3cr3t"
authMechanism = "SCRAM-SHA-1"
"#,
    );

    let props = load_properties(&path).expect("Failed to load properties");
    let plan = ConnectionPlan::prepare(&props).expect("Failed to prepare connection");

    assert_eq!(plan.strategy, CredentialStrategy::UsernamePassword);
    assert_eq!(plan.address(), "mongo.internal:27019");
    assert_eq!(plan.database.as_deref(), Some("sales"));

    let cred = &plan.credentials[0];
    assert_eq!(cred.principal_name(), "etl");
    assert_eq!(cred.authentication_database(), "admin");
    assert_eq!(cred.secret().expose_secret(), "s3cr3t");
    assert_eq!(cred.mechanism(), AuthMechanism::ScramSha1);
}

#[test]
fn test_load_and_prepare_kerberos() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(
        &dir,
        r#"
username = "etl@CORP.EXAMPLE.COM"
useKerberos = true
"#,
    );

    let props = load_properties(&path).expect("Failed to load properties");
    let plan = ConnectionPlan::prepare(&props).expect("Failed to prepare connection");

    assert_eq!(plan.strategy, CredentialStrategy::Kerberos);
    assert_eq!(plan.credentials[0].principal_name(), "etl@CORP.EXAMPLE.COM");
    assert_eq!(plan.credentials[0].authentication_database(), "$external");
}

#[test]
fn test_file_overridden_by_flags() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(
        &dir,
        r#"
username = "alice"
databaseName = "sales"
password = "from-file"
"#,
    );

    let file = load_properties(&path).expect("Failed to load properties");
    let flags = ConnectionProperties::builder()
        .set(MongoProp::Username, "alice@reporting")
        .build();
    let plan = ConnectionPlan::prepare(&file.merge(flags)).expect("Failed to prepare");

    assert_eq!(plan.credentials[0].principal_name(), "alice");
    assert_eq!(plan.credentials[0].authentication_database(), "reporting");
    assert_eq!(plan.credentials[0].secret().expose_secret(), "from-file");
}

#[test]
fn test_malformed_username_in_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&dir, "username = \"a@b@c\"\n");

    let props = load_properties(&path).expect("Failed to load properties");
    let err = ConnectionPlan::prepare(&props).unwrap_err();
    assert!(matches!(
        err,
        MongoAuthError::Credential(CredentialError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_properties(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&dir, "username = \n");
    let err = load_properties(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
