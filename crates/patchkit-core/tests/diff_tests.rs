//! Diff Tests
//!
//! ## Scenarios Covered
//!
//! 1. Diffing an object against itself yields nothing
//! 2. Scalars and enums emit one Replace carrying the target value
//! 3. Primitive collections use set semantics (order and duplicates ignored)
//! 4. Identity collections diff by uid
//! 5. Embedded collections diff by value equality
//! 6. Identity references emit a Replace with the uid, or null when cleared
//! 7. Nested references prefix paths with the parent segment
//! 8. Emission order follows property registration, additions first

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use patchkit_core::model::{AggregationType, DataElement, User, ValueType};
use patchkit_core::{diff, Mutation, Operation, Variant};

#[test]
fn test_diff_of_identical_objects_is_empty() {
    let element = create_data_element('A');
    let patch = diff(&element, &element.clone());
    assert!(patch.is_empty());
}

#[test]
fn test_scalar_change_emits_single_replace() {
    // GIVEN two data elements differing in name only
    let source = create_data_element('A');
    let mut target = source.clone();
    target.name = Some("Updated Name".to_string());

    // WHEN we diff them
    let patch = diff(&source, &target);

    // THEN a single Replace carries the new name
    assert_eq!(
        patch.mutations(),
        &[Mutation::replace("name", "Updated Name")]
    );
}

#[test]
fn test_enum_change_emits_constant_name() {
    let source = create_data_element('A');
    let mut target = source.clone();
    target.value_type = Some(ValueType::Boolean);
    target.aggregation_type = Some(AggregationType::Average);

    let patch = diff(&source, &target);

    assert_eq!(patch.len(), 2);
    assert_eq!(patch.mutations()[0], Mutation::replace("valueType", "BOOLEAN"));
    assert_eq!(
        patch.mutations()[1],
        Mutation::replace("aggregationType", "AVERAGE")
    );
}

#[test]
fn test_cleared_scalar_emits_null() {
    let source = create_data_element('A');
    let mut target = source.clone();
    target.description = None;

    let patch = diff(&source, &target);
    assert_eq!(
        patch.mutations(),
        &[Mutation::replace("description", Variant::null())]
    );
}

#[test]
fn test_primitive_collection_set_difference() {
    // GIVEN aggregation levels {1,2} and {2,3}
    let mut source = DataElement::default();
    source.aggregation_levels = vec![1, 2];
    let mut target = DataElement::default();
    target.aggregation_levels = vec![2, 3];

    // WHEN we diff them
    let patch = diff(&source, &target);

    // THEN exactly one Addition(3) followed by one Deletion(1)
    assert_eq!(
        patch.mutations(),
        &[
            Mutation::addition("aggregationLevels", 3),
            Mutation::deletion("aggregationLevels", 1),
        ]
    );
}

#[test]
fn test_primitive_collection_ignores_order_and_duplicates() {
    let mut source = DataElement::default();
    source.aggregation_levels = vec![3, 1, 2];
    let mut target = DataElement::default();
    target.aggregation_levels = vec![1, 2, 2, 3, 3];

    assert!(diff(&source, &target).is_empty());

    target.aggregation_levels.push(4);
    target.aggregation_levels.push(4);
    let patch = diff(&source, &target);
    assert_eq!(patch.count("aggregationLevels", Operation::Addition), 1);
}

#[test]
fn test_identity_collection_diffs_by_uid() {
    // GIVEN group C on the source and group D on the target
    let mut source = create_data_element('A');
    source.groups = vec![create_data_element_group(GROUP_C)];
    let mut target = source.clone();
    target.groups = vec![create_data_element_group(GROUP_D)];

    // WHEN we diff them
    let patch = diff(&source, &target);

    // THEN one Addition(uid D), one Deletion(uid C)
    assert_eq!(
        patch.mutations(),
        &[
            Mutation::addition("dataElementGroups", Variant::identity(GROUP_D)),
            Mutation::deletion("dataElementGroups", Variant::identity(GROUP_C)),
        ]
    );
}

#[test]
fn test_identity_collection_ignores_member_content() {
    // Same uid, different content: still the same member
    let mut source = DataElement::default();
    source.groups = vec![create_data_element_group(GROUP_C)];
    let mut target = DataElement::default();
    let mut renamed = create_data_element_group(GROUP_C);
    renamed.name = Some("Renamed".to_string());
    target.groups = vec![renamed];

    assert!(diff(&source, &target).is_empty());
}

#[test]
fn test_embedded_entries_with_equal_content_are_equal() {
    // Distinct instances, identical content
    let mut source = DataElement::default();
    source.user_accesses = accesses([user_access("rw------", USER_A)]);
    source.user_group_accesses = accesses([user_group_access("rw------", "ugA")]);
    let mut target = DataElement::default();
    target.user_accesses = accesses([user_access("rw------", USER_A)]);
    target.user_group_accesses = accesses([user_group_access("rw------", "ugA")]);

    assert!(diff(&source, &target).is_empty());
}

#[test]
fn test_embedded_entry_change_is_addition_and_deletion() {
    let mut source = DataElement::default();
    source.user_group_accesses = accesses([
        user_group_access("rw------", "ugA"),
        user_group_access("r-------", "ugB"),
    ]);
    let mut target = source.clone();
    target.user_group_accesses = accesses([
        user_group_access("rw------", "ugA"),
        user_group_access("rw------", "ugB"),
    ]);

    let patch = diff(&source, &target);

    assert_eq!(patch.count("userGroupAccesses", Operation::Addition), 1);
    assert_eq!(patch.count("userGroupAccesses", Operation::Deletion), 1);
    let added = &patch.mutations()[0].value;
    assert_eq!(
        added,
        &Variant::Embedded(serde_json::json!({"access": "rw------", "userGroupUid": "ugB"}))
    );
}

#[test]
fn test_identity_reference_replace_and_clear() {
    let source = DataElement::default();
    let mut target = DataElement::default();
    target.user = Some(create_user(USER_A, "usernameA"));

    let patch = diff(&source, &target);
    assert_eq!(
        patch.mutations(),
        &[Mutation::replace("user", Variant::identity(USER_A))]
    );

    let patch = diff(&target, &source);
    assert_eq!(
        patch.mutations(),
        &[Mutation::replace("user", Variant::null())]
    );
}

#[test]
fn test_nested_reference_prefixes_paths() {
    let source = create_user(USER_A, "usernameA");
    let mut target = source.clone();
    target.user_credentials.username = Some("updated".to_string());
    target.user_credentials.disabled = true;

    let patch = diff(&source, &target);

    assert_eq!(
        patch.mutations(),
        &[
            Mutation::replace("userCredentials.username", "updated"),
            Mutation::replace("userCredentials.disabled", true),
        ]
    );
}

#[test]
fn test_emission_follows_registration_order() {
    let source = DataElement::default();
    let mut target = create_data_element('A');
    target.aggregation_levels = vec![1];
    target.groups = vec![create_data_element_group(GROUP_C)];

    let patch = diff(&source, &target);
    let paths: Vec<&str> = patch.iter().map(|m| m.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "code",
            "name",
            "shortName",
            "description",
            "valueType",
            "domainType",
            "aggregationType",
            "aggregationLevels",
            "dataElementGroups",
        ]
    );
}

#[test]
fn test_diff_of_users_with_different_groups() {
    let mut source = User::default();
    source.groups = vec![patchkit_core::model::UserGroup::new("ugA", "A")];
    let mut target = User::default();
    target.groups = vec![
        patchkit_core::model::UserGroup::new("ugA", "A"),
        patchkit_core::model::UserGroup::new("ugB", "B"),
    ];

    let patch = diff(&source, &target);
    assert_eq!(
        patch.mutations(),
        &[Mutation::addition("userGroups", Variant::identity("ugB"))]
    );
}
