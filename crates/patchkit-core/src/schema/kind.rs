use serde::Serialize;

/// Classification of a registered property
///
/// The kind alone decides how a property is compared and how mutations
/// against it are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Single value of a primitive type (text, number, flag, date)
    Scalar,
    /// Single enum constant
    Enum,
    /// Set of primitive values or enum constants
    PrimitiveCollection,
    /// Set of domain objects compared by uid
    IdentityCollection,
    /// Set of value objects compared structurally
    EmbeddedCollection,
    /// Single domain object reached by path traversal
    NestedReference,
    /// Single domain object compared by uid
    IdentityReference,
}

impl Kind {
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Kind::PrimitiveCollection | Kind::IdentityCollection | Kind::EmbeddedCollection
        )
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Kind::Scalar => "scalar",
            Kind::Enum => "enum",
            Kind::PrimitiveCollection => "primitive_collection",
            Kind::IdentityCollection => "identity_collection",
            Kind::EmbeddedCollection => "embedded_collection",
            Kind::NestedReference => "nested_reference",
            Kind::IdentityReference => "identity_reference",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_name() {
        for kind in [
            Kind::Scalar,
            Kind::Enum,
            Kind::PrimitiveCollection,
            Kind::IdentityCollection,
            Kind::EmbeddedCollection,
            Kind::NestedReference,
            Kind::IdentityReference,
        ] {
            let serialized = serde_json::to_value(kind).unwrap();
            assert_eq!(serialized.as_str(), Some(kind.to_string().as_str()));
        }
    }

    #[test]
    fn test_collection_kinds() {
        assert!(Kind::IdentityCollection.is_collection());
        assert!(!Kind::IdentityReference.is_collection());
        assert!(!Kind::NestedReference.is_collection());
    }
}
