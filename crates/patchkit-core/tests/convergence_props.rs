//! Property tests for diff and apply
//!
//! - Reflexivity: `diff(x, x)` is empty
//! - Convergence: applying `diff(a, b)` to a copy of `a` yields `b`, with
//!   collections compared as sets (identity collections by uid)
//! - A second application of the same patch changes nothing
//!
//! Data elements cover scalar, enum, primitive, identity and embedded
//! collections; users cover nested credentials with dates and user groups.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::BTreeSet;

use common::*;
use chrono::{DateTime, Utc};
use patchkit_core::model::{
    AggregationType, DataElement, DataElementDomain, User, UserAccess, UserCredentials,
    UserGroup, UserGroupAccess, ValueType,
};
use patchkit_core::{apply, diff, IdentityStore};
use proptest::prelude::*;

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z ]{0,8}")
}

fn arb_value_type() -> impl Strategy<Value = Option<ValueType>> {
    prop_oneof![
        Just(None),
        Just(Some(ValueType::Text)),
        Just(Some(ValueType::Integer)),
        Just(Some(ValueType::Boolean)),
        Just(Some(ValueType::Date)),
    ]
}

fn arb_domain() -> impl Strategy<Value = Option<DataElementDomain>> {
    prop_oneof![
        Just(None),
        Just(Some(DataElementDomain::Aggregate)),
        Just(Some(DataElementDomain::Tracker)),
    ]
}

fn arb_aggregation() -> impl Strategy<Value = Option<AggregationType>> {
    prop_oneof![
        Just(None),
        Just(Some(AggregationType::Sum)),
        Just(Some(AggregationType::Average)),
        Just(Some(AggregationType::None)),
    ]
}

fn arb_access() -> impl Strategy<Value = String> {
    prop_oneof![Just("rw------".to_string()), Just("r-------".to_string())]
}

fn arb_user_accesses() -> impl Strategy<Value = BTreeSet<UserAccess>> {
    prop::collection::btree_set(
        (arb_access(), prop_oneof![Just("uA"), Just("uB")])
            .prop_map(|(access, uid)| UserAccess::new(access, uid)),
        0..3,
    )
}

fn arb_user_group_accesses() -> impl Strategy<Value = BTreeSet<UserGroupAccess>> {
    prop::collection::btree_set(
        (arb_access(), prop_oneof![Just("ugA"), Just("ugB")])
            .prop_map(|(access, uid)| UserGroupAccess::new(access, uid)),
        0..3,
    )
}

fn arb_data_element() -> impl Strategy<Value = DataElement> {
    (
        (arb_text(), arb_text(), arb_text(), arb_text()),
        (arb_value_type(), arb_domain(), arb_aggregation()),
        any::<bool>(),
        prop::collection::vec(0i32..6, 0..5),
        prop::sample::subsequence(vec![GROUP_C, GROUP_D], 0..=2),
        any::<bool>(),
        (arb_user_accesses(), arb_user_group_accesses()),
    )
        .prop_map(
            |(
                (code, name, short_name, description),
                (value_type, domain_type, aggregation_type),
                zero_is_significant,
                aggregation_levels,
                groups,
                has_user,
                (user_accesses, user_group_accesses),
            )| DataElement {
                id: "deProp".to_string(),
                code,
                name,
                short_name,
                description,
                value_type,
                domain_type,
                aggregation_type,
                zero_is_significant,
                aggregation_levels,
                groups: groups.into_iter().map(create_data_element_group).collect(),
                user: has_user.then(|| create_user(USER_A, "usernameA")),
                user_group_accesses,
                user_accesses,
            },
        )
}

fn arb_last_login() -> impl Strategy<Value = Option<DateTime<Utc>>> {
    prop::option::of(0i64..4_000_000_000_000).prop_map(|millis| {
        millis.and_then(DateTime::from_timestamp_millis)
    })
}

fn arb_credentials() -> impl Strategy<Value = UserCredentials> {
    (arb_text(), arb_text(), any::<bool>(), arb_last_login()).prop_map(
        |(username, password, disabled, last_login)| UserCredentials {
            username,
            password,
            disabled,
            last_login,
        },
    )
}

fn arb_user() -> impl Strategy<Value = User> {
    (
        (arb_text(), arb_text(), arb_text()),
        arb_credentials(),
        prop::sample::subsequence(vec![("ugA", "UserGroupA"), ("ugB", "UserGroupB")], 0..=2),
    )
        .prop_map(|((first_name, surname, email), user_credentials, groups)| User {
            id: "uProp".to_string(),
            first_name,
            surname,
            email,
            user_credentials,
            groups: groups
                .into_iter()
                .map(|(uid, name)| UserGroup::new(uid, name))
                .collect(),
        })
}

fn user_group_uids(user: &User) -> BTreeSet<String> {
    user.groups.iter().map(|g| g.id.clone()).collect()
}

fn group_uids(element: &DataElement) -> BTreeSet<String> {
    element.groups.iter().map(|g| g.id.clone()).collect()
}

fn levels(element: &DataElement) -> BTreeSet<i32> {
    element.aggregation_levels.iter().copied().collect()
}

fn assert_converged(actual: &DataElement, expected: &DataElement) -> Result<(), TestCaseError> {
    prop_assert_eq!(&actual.code, &expected.code);
    prop_assert_eq!(&actual.name, &expected.name);
    prop_assert_eq!(&actual.short_name, &expected.short_name);
    prop_assert_eq!(&actual.description, &expected.description);
    prop_assert_eq!(actual.value_type, expected.value_type);
    prop_assert_eq!(actual.domain_type, expected.domain_type);
    prop_assert_eq!(actual.aggregation_type, expected.aggregation_type);
    prop_assert_eq!(actual.zero_is_significant, expected.zero_is_significant);
    prop_assert_eq!(levels(actual), levels(expected));
    prop_assert_eq!(group_uids(actual), group_uids(expected));
    prop_assert_eq!(
        actual.user.as_ref().map(|u| u.id.clone()),
        expected.user.as_ref().map(|u| u.id.clone())
    );
    prop_assert_eq!(&actual.user_accesses, &expected.user_accesses);
    prop_assert_eq!(&actual.user_group_accesses, &expected.user_group_accesses);
    Ok(())
}

fn assert_user_converged(actual: &User, expected: &User) -> Result<(), TestCaseError> {
    prop_assert_eq!(&actual.first_name, &expected.first_name);
    prop_assert_eq!(&actual.surname, &expected.surname);
    prop_assert_eq!(&actual.email, &expected.email);
    prop_assert_eq!(&actual.user_credentials, &expected.user_credentials);
    prop_assert_eq!(user_group_uids(actual), user_group_uids(expected));
    Ok(())
}

fn store() -> IdentityStore {
    new_store()
}

proptest! {
    #[test]
    fn prop_diff_is_reflexive(x in arb_data_element()) {
        prop_assert!(diff(&x, &x.clone()).is_empty(), "diff(x, x) must be empty");
    }

    #[test]
    fn prop_apply_diff_converges(a in arb_data_element(), b in arb_data_element()) {
        let patch = diff(&a, &b);
        let mut patched = a.clone();
        apply(&patch, &mut patched, &store()).unwrap();
        assert_converged(&patched, &b)?;
    }

    #[test]
    fn prop_converged_object_diffs_empty(a in arb_data_element(), b in arb_data_element()) {
        let mut patched = a.clone();
        apply(&diff(&a, &b), &mut patched, &store()).unwrap();
        let residual = diff(&patched, &b);
        // Residual differences can only be ordering or duplicates within
        // primitive collections, which the diff ignores.
        prop_assert!(residual.is_empty(), "residual mutations: {:?}", residual);
    }

    #[test]
    fn prop_second_application_is_noop(a in arb_data_element(), b in arb_data_element()) {
        let patch = diff(&a, &b);
        let mut once = a.clone();
        apply(&patch, &mut once, &store()).unwrap();
        let mut twice = once.clone();
        apply(&patch, &mut twice, &store()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_user_diff_is_reflexive(x in arb_user()) {
        prop_assert!(diff(&x, &x.clone()).is_empty(), "diff(x, x) must be empty");
    }

    #[test]
    fn prop_user_apply_diff_converges(a in arb_user(), b in arb_user()) {
        let patch = diff(&a, &b);
        let mut patched = a.clone();
        apply(&patch, &mut patched, &store()).unwrap();
        assert_user_converged(&patched, &b)?;
        prop_assert!(diff(&patched, &b).is_empty());
    }

    #[test]
    fn prop_user_second_application_is_noop(a in arb_user(), b in arb_user()) {
        let patch = diff(&a, &b);
        let mut once = a.clone();
        apply(&patch, &mut once, &store()).unwrap();
        let mut twice = once.clone();
        apply(&patch, &mut twice, &store()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
