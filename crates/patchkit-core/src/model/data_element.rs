use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::data_element_group::DataElementGroup;
use super::enums::{AggregationType, DataElementDomain, ValueType};
use super::sharing::{UserAccess, UserGroupAccess};
use super::user::User;
use crate::identity::Identifiable;
use crate::schema::{Patchable, Schema};

/// A data element: the definition of what is collected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataElement {
    #[serde(deserialize_with = "super::de::null_as_default")]
    pub id: String,
    pub code: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub value_type: Option<ValueType>,
    pub domain_type: Option<DataElementDomain>,
    pub aggregation_type: Option<AggregationType>,
    pub zero_is_significant: bool,
    pub aggregation_levels: Vec<i32>,
    #[serde(rename = "dataElementGroups")]
    pub groups: Vec<DataElementGroup>,
    /// Owner
    pub user: Option<User>,
    pub user_group_accesses: BTreeSet<UserGroupAccess>,
    pub user_accesses: BTreeSet<UserAccess>,
}

impl DataElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Identifiable for DataElement {
    const TYPE_NAME: &'static str = "dataElement";

    fn uid(&self) -> &str {
        &self.id
    }
}

impl Patchable for DataElement {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<DataElement>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<Self>::builder(Self::TYPE_NAME)
                .scalar("code", |d| &d.code, |d| &mut d.code)
                .scalar("name", |d| &d.name, |d| &mut d.name)
                .scalar("short_name", |d| &d.short_name, |d| &mut d.short_name)
                .exposed_as("shortName")
                .scalar("description", |d| &d.description, |d| &mut d.description)
                .enumeration("value_type", |d| &d.value_type, |d| &mut d.value_type)
                .exposed_as("valueType")
                .enumeration("domain_type", |d| &d.domain_type, |d| &mut d.domain_type)
                .exposed_as("domainType")
                .enumeration(
                    "aggregation_type",
                    |d| &d.aggregation_type,
                    |d| &mut d.aggregation_type,
                )
                .exposed_as("aggregationType")
                .scalar(
                    "zero_is_significant",
                    |d| &d.zero_is_significant,
                    |d| &mut d.zero_is_significant,
                )
                .exposed_as("zeroIsSignificant")
                .primitive_collection(
                    "aggregation_levels",
                    |d| &d.aggregation_levels,
                    |d| &mut d.aggregation_levels,
                )
                .exposed_as("aggregationLevels")
                .identity_collection("groups", |d| &d.groups, |d| &mut d.groups)
                .exposed_as("dataElementGroups")
                .identity_reference("user", |d| &d.user, |d| &mut d.user)
                .embedded_collection(
                    "user_group_accesses",
                    |d| &d.user_group_accesses,
                    |d| &mut d.user_group_accesses,
                )
                .exposed_as("userGroupAccesses")
                .embedded_collection(
                    "user_accesses",
                    |d| &d.user_accesses,
                    |d| &mut d.user_accesses,
                )
                .exposed_as("userAccesses")
                .build()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{describe, Kind};

    #[test]
    fn test_every_kind_but_nested_is_registered() {
        let kinds: Vec<(&str, Kind)> = describe::<DataElement>()
            .iter()
            .map(|p| (p.path_segment(), p.kind()))
            .collect();
        assert!(kinds.contains(&("name", Kind::Scalar)));
        assert!(kinds.contains(&("valueType", Kind::Enum)));
        assert!(kinds.contains(&("aggregationLevels", Kind::PrimitiveCollection)));
        assert!(kinds.contains(&("dataElementGroups", Kind::IdentityCollection)));
        assert!(kinds.contains(&("user", Kind::IdentityReference)));
        assert!(kinds.contains(&("userAccesses", Kind::EmbeddedCollection)));
    }

    #[test]
    fn test_id_is_not_a_property() {
        assert!(DataElement::schema().property("id").is_none());
    }

    #[test]
    fn test_serde_names_match_path_segments() {
        let element = DataElement::default();
        let encoded = serde_json::to_value(&element).unwrap();
        for property in describe::<DataElement>() {
            assert!(
                encoded.get(property.path_segment()).is_some(),
                "missing serde member for {}",
                property.path_segment()
            );
        }
    }
}
