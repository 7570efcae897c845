use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::data_element::DataElement;
use crate::identity::Identifiable;
use crate::schema::{Patchable, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataElementGroup {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub id: String,
    pub code: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    #[serde(rename = "dataElements")]
    pub members: Vec<DataElement>,
}

impl DataElementGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Identifiable for DataElementGroup {
    const TYPE_NAME: &'static str = "dataElementGroup";

    fn uid(&self) -> &str {
        &self.id
    }
}

impl Patchable for DataElementGroup {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<DataElementGroup>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<Self>::builder(Self::TYPE_NAME)
                .scalar("code", |g| &g.code, |g| &mut g.code)
                .scalar("name", |g| &g.name, |g| &mut g.name)
                .scalar("short_name", |g| &g.short_name, |g| &mut g.short_name)
                .exposed_as("shortName")
                .identity_collection("members", |g| &g.members, |g| &mut g.members)
                .exposed_as("dataElements")
                .build()
        })
    }
}
