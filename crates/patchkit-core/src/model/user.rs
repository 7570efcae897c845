use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Identifiable;
use crate::schema::{Patchable, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub id: String,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub user_credentials: UserCredentials,
    #[serde(rename = "userGroups")]
    pub groups: Vec<UserGroup>,
}

/// Login details, reached through `userCredentials.*` paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub disabled: bool,
    #[serde(deserialize_with = "super::de::lenient_date")]
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGroup {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub id: String,
    pub code: Option<String>,
    pub name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl UserGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: None,
            name: Some(name.into()),
        }
    }
}

impl Identifiable for User {
    const TYPE_NAME: &'static str = "user";

    fn uid(&self) -> &str {
        &self.id
    }
}

impl Identifiable for UserGroup {
    const TYPE_NAME: &'static str = "userGroup";

    fn uid(&self) -> &str {
        &self.id
    }
}

impl Patchable for User {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<User>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<Self>::builder(Self::TYPE_NAME)
                .scalar("first_name", |u| &u.first_name, |u| &mut u.first_name)
                .exposed_as("firstName")
                .scalar("surname", |u| &u.surname, |u| &mut u.surname)
                .scalar("email", |u| &u.email, |u| &mut u.email)
                .nested(
                    "user_credentials",
                    |u| &u.user_credentials,
                    |u| &mut u.user_credentials,
                )
                .exposed_as("userCredentials")
                .identity_collection("groups", |u| &u.groups, |u| &mut u.groups)
                .exposed_as("userGroups")
                .build()
        })
    }
}

impl Patchable for UserCredentials {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<UserCredentials>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<Self>::builder("userCredentials")
                .scalar("username", |c| &c.username, |c| &mut c.username)
                .scalar("password", |c| &c.password, |c| &mut c.password)
                .sensitive()
                .scalar("disabled", |c| &c.disabled, |c| &mut c.disabled)
                .scalar("last_login", |c| &c.last_login, |c| &mut c.last_login)
                .exposed_as("lastLogin")
                .build()
        })
    }
}
