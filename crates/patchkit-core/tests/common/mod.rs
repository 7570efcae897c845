use std::collections::BTreeSet;

use patchkit_core::model::{
    AggregationType, DataElement, DataElementDomain, DataElementGroup, User, UserAccess,
    UserCredentials, UserGroup, UserGroupAccess, ValueType,
};
use patchkit_core::IdentityStore;

pub const GROUP_C: &str = "groupC";
pub const GROUP_D: &str = "groupD";
pub const USER_A: &str = "userA";

/// Create a data element named after `unique`, the way fixtures elsewhere
/// name them: `DataElementA`, `DataElementShortA`, ...
#[allow(dead_code)]
pub fn create_data_element(unique: char) -> DataElement {
    DataElement {
        id: format!("deabcdef{}", unique),
        code: Some(format!("DataElementCode{}", unique)),
        name: Some(format!("DataElement{}", unique)),
        short_name: Some(format!("DataElementShort{}", unique)),
        description: Some(format!("DataElementDescription{}", unique)),
        value_type: Some(ValueType::Integer),
        domain_type: Some(DataElementDomain::Aggregate),
        aggregation_type: Some(AggregationType::Sum),
        ..DataElement::default()
    }
}

#[allow(dead_code)]
pub fn create_data_element_group(uid: &str) -> DataElementGroup {
    DataElementGroup {
        id: uid.to_string(),
        code: Some(format!("DataElementGroupCode{}", uid)),
        name: Some(format!("DataElementGroup{}", uid)),
        short_name: Some(format!("DataElementGroupShort{}", uid)),
        members: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn create_user(uid: &str, username: &str) -> User {
    User {
        id: uid.to_string(),
        first_name: Some("First".to_string()),
        surname: Some("Surname".to_string()),
        email: Some(format!("{}@example.org", username)),
        user_credentials: UserCredentials {
            username: Some(username.to_string()),
            password: Some("District123".to_string()),
            ..UserCredentials::default()
        },
        groups: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn user_access(access: &str, user_uid: &str) -> UserAccess {
    UserAccess::new(access, user_uid)
}

#[allow(dead_code)]
pub fn user_group_access(access: &str, user_group_uid: &str) -> UserGroupAccess {
    UserGroupAccess::new(access, user_group_uid)
}

#[allow(dead_code)]
pub fn accesses<E: Ord>(entries: impl IntoIterator<Item = E>) -> BTreeSet<E> {
    entries.into_iter().collect()
}

/// Store holding groups C and D, user A and two user groups
#[allow(dead_code)]
pub fn new_store() -> IdentityStore {
    IdentityStore::new()
        .with(create_data_element_group(GROUP_C))
        .with(create_data_element_group(GROUP_D))
        .with(create_user(USER_A, "usernameA"))
        .with(UserGroup::new("ugA", "UserGroupA"))
        .with(UserGroup::new("ugB", "UserGroupB"))
}
