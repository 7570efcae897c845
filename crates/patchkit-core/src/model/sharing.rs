//! Sharing entries embedded in shareable objects.
//!
//! Entries have no identity of their own: two entries are the same entry
//! when every field matches.

use serde::{Deserialize, Serialize};

/// Access granted to a single user
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccess {
    /// Access string such as `rw------`
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub access: String,
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub user_uid: String,
}

/// Access granted to every member of a user group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupAccess {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub access: String,
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub user_group_uid: String,
}

impl UserAccess {
    pub fn new(access: impl Into<String>, user_uid: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            user_uid: user_uid.into(),
        }
    }
}

impl UserGroupAccess {
    pub fn new(access: impl Into<String>, user_group_uid: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            user_group_uid: user_group_uid.into(),
        }
    }
}
