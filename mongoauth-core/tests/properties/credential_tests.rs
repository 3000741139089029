//! Property tests for username/password credential resolution

use mongoauth_core::config::{ConnectionProperties, MongoProp};
use mongoauth_core::credential::{DEFAULT_AUTH_DATABASE, resolve_credentials};
use mongoauth_core::error::CredentialError;
use proptest::prelude::*;
use secrecy::ExposeSecret;

/// A username or database segment without any `@`
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,24}"
}

fn password() -> impl Strategy<Value = String> {
    "[ -~]{0,64}"
}

fn props(username: &str, database: Option<&str>, password: &str) -> ConnectionProperties {
    ConnectionProperties::builder()
        .set(MongoProp::Username, username)
        .set_opt(MongoProp::DatabaseName, database)
        .set(MongoProp::Password, password)
        .build()
}

proptest! {
    /// Property: a plain username keeps the explicit database
    #[test]
    fn plain_username_uses_explicit_database(
        user in segment(),
        database in segment(),
        pwd in password(),
    ) {
        let creds = resolve_credentials(&props(&user, Some(&database), &pwd)).unwrap();
        prop_assert_eq!(creds.len(), 1);
        prop_assert_eq!(creds[0].principal_name(), user.as_str());
        prop_assert_eq!(creds[0].authentication_database(), database.as_str());
    }

    /// Property: a plain username without a database authenticates against admin
    #[test]
    fn plain_username_defaults_to_admin(user in segment(), pwd in password()) {
        let creds = resolve_credentials(&props(&user, None, &pwd)).unwrap();
        prop_assert_eq!(creds.len(), 1);
        prop_assert_eq!(creds[0].principal_name(), user.as_str());
        prop_assert_eq!(creds[0].authentication_database(), DEFAULT_AUTH_DATABASE);
    }

    /// Property: an encoded source database always wins
    #[test]
    fn encoded_source_overrides_database(
        user in segment(),
        source in segment(),
        database in proptest::option::of(segment()),
        pwd in password(),
    ) {
        let principal = format!("{user}@{source}");
        let creds = resolve_credentials(&props(&principal, database.as_deref(), &pwd)).unwrap();
        prop_assert_eq!(creds.len(), 1);
        prop_assert_eq!(creds[0].principal_name(), user.as_str());
        prop_assert_eq!(creds[0].authentication_database(), source.as_str());
    }

    /// Property: two or more separators are always rejected
    #[test]
    fn multiple_separators_rejected(
        parts in proptest::collection::vec("[a-zA-Z0-9_]{0,8}", 3..6),
        database in proptest::option::of(segment()),
    ) {
        let principal = parts.join("@");
        let result = resolve_credentials(&props(&principal, database.as_deref(), "pwd"));
        let is_invalid = matches!(result, Err(CredentialError::InvalidConfiguration { .. }));
        prop_assert!(is_invalid);
    }

    /// Property: the secret is handed over exactly as configured
    #[test]
    fn secret_is_preserved(user in segment(), pwd in password()) {
        let creds = resolve_credentials(&props(&user, None, &pwd)).unwrap();
        prop_assert_eq!(creds[0].secret().expose_secret(), pwd.as_str());
    }

    /// Property: Debug output never contains the password
    #[test]
    fn debug_never_shows_secret(user in segment(), pwd in "[a-zA-Z0-9]{12,32}") {
        let props = props(&user, None, &pwd);
        let creds = resolve_credentials(&props).unwrap();
        let props_debug = format!("{props:?}");
        let creds_debug = format!("{creds:?}");
        prop_assert!(!props_debug.contains(&pwd));
        prop_assert!(!creds_debug.contains(&pwd));
    }
}

#[test]
fn scenario_explicit_database() {
    let creds = resolve_credentials(&props("alice", Some("sales"), "p1")).unwrap();
    assert_eq!(creds.len(), 1);
    assert_eq!(creds[0].principal_name(), "alice");
    assert_eq!(creds[0].authentication_database(), "sales");
    assert_eq!(creds[0].secret().expose_secret(), "p1");
}

#[test]
fn scenario_default_database() {
    let creds = resolve_credentials(&props("alice", None, "p1")).unwrap();
    assert_eq!(creds[0].principal_name(), "alice");
    assert_eq!(creds[0].authentication_database(), "admin");
    assert_eq!(creds[0].secret().expose_secret(), "p1");
}

#[test]
fn scenario_encoded_source() {
    let creds = resolve_credentials(&props("alice@reporting", Some("sales"), "p1")).unwrap();
    assert_eq!(creds[0].principal_name(), "alice");
    assert_eq!(creds[0].authentication_database(), "reporting");
    assert_eq!(creds[0].secret().expose_secret(), "p1");
}

#[test]
fn scenario_two_separators() {
    let err = resolve_credentials(&props("a@b@c", None, "p1")).unwrap_err();
    assert!(matches!(err, CredentialError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("a@b@c"));
}

#[test]
fn leading_separator_resolves_to_empty_username() {
    let creds = resolve_credentials(&props("@reporting", Some("sales"), "p1")).unwrap();
    assert_eq!(creds.len(), 1);
    assert_eq!(creds[0].principal_name(), "");
    assert_eq!(creds[0].authentication_database(), "reporting");
}

#[test]
fn trailing_separator_keeps_username_and_database() {
    let creds = resolve_credentials(&props("alice@", Some("sales"), "p1")).unwrap();
    assert_eq!(creds[0].principal_name(), "alice@");
    assert_eq!(creds[0].authentication_database(), "sales");

    let creds = resolve_credentials(&props("alice@", None, "p1")).unwrap();
    assert_eq!(creds[0].authentication_database(), "admin");
}

#[test]
fn empty_database_name_is_passed_through() {
    let creds = resolve_credentials(&props("alice", Some(""), "p1")).unwrap();
    assert_eq!(creds[0].authentication_database(), "");
}
