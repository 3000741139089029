//! Property tests for strategy selection and connection setup

use mongoauth_core::config::{ConnectionProperties, MongoProp};
use mongoauth_core::connection::ConnectionPlan;
use mongoauth_core::credential::{AuthMechanism, CredentialStrategy, EXTERNAL_AUTH_DATABASE};
use proptest::prelude::*;

proptest! {
    /// Property: Kerberos principals are never split
    #[test]
    fn kerberos_principal_untouched(
        user in "[a-z]{1,12}",
        realm in "[A-Z]{1,12}(\\.[A-Z]{1,8}){0,2}",
    ) {
        let principal = format!("{user}@{realm}");
        let props = ConnectionProperties::builder()
            .set(MongoProp::Username, principal.clone())
            .set(MongoProp::UseKerberos, "true")
            .build();

        prop_assert_eq!(
            CredentialStrategy::from_properties(&props).unwrap(),
            CredentialStrategy::Kerberos
        );
        let creds = CredentialStrategy::Kerberos.resolve(&props).unwrap();
        prop_assert_eq!(creds.len(), 1);
        prop_assert_eq!(creds[0].principal_name(), principal.as_str());
        prop_assert_eq!(creds[0].authentication_database(), EXTERNAL_AUTH_DATABASE);
        prop_assert_eq!(creds[0].mechanism(), AuthMechanism::Gssapi);
    }

    /// Property: the plan's target database is never rewritten by the
    /// username suffix
    #[test]
    fn plan_keeps_target_database(
        user in "[a-z]{1,12}",
        source in "[a-z]{1,12}",
        target in "[a-z]{1,12}",
    ) {
        let props = ConnectionProperties::builder()
            .set(MongoProp::Username, format!("{user}@{source}"))
            .set(MongoProp::DatabaseName, target.clone())
            .set(MongoProp::Password, "pwd")
            .build();

        let plan = ConnectionPlan::prepare(&props).unwrap();
        prop_assert_eq!(plan.database.as_deref(), Some(target.as_str()));
        prop_assert_eq!(plan.credentials[0].authentication_database(), source.as_str());
    }

    /// Property: the number of credentials follows the strategy
    #[test]
    fn credential_count_matches_strategy(
        username in proptest::option::of("[a-z]{0,8}"),
        kerberos in any::<bool>(),
    ) {
        let props = ConnectionProperties::builder()
            .set_opt(MongoProp::Username, username.clone())
            .set(MongoProp::UseKerberos, kerberos.to_string())
            .build();

        let strategy = CredentialStrategy::from_properties(&props).unwrap();
        let has_user = username.as_deref().is_some_and(|u| !u.is_empty());

        match strategy.resolve(&props) {
            Ok(creds) => {
                let expected = usize::from(strategy != CredentialStrategy::NoAuth);
                prop_assert_eq!(creds.len(), expected);
            }
            Err(_) => {
                prop_assert!(kerberos && !has_user);
            }
        }
    }
}
