use serde::de::DeserializeOwned;
use serde::Serialize;

use super::descriptor::{Accessor, PropertyDescriptor};
use super::kind::Kind;
use super::lens::{
    EmbeddedElements, IdentityRefLens, IdentitySetLens, NestedLens, PrimitiveElements, ScalarLens,
    SetLens,
};
use super::registry::{Patchable, Schema};
use crate::identity::Identifiable;
use crate::value::{Coerce, ValueSet};

/// Builder for a domain type's [`Schema`]
///
/// Properties are registered in declaration order; that order is the order
/// in which diffs emit mutations.
///
/// ```
/// use patchkit_core::schema::{Kind, Schema};
///
/// #[derive(Default)]
/// struct Unit {
///     name: Option<String>,
///     factor: i64,
/// }
///
/// let schema = Schema::<Unit>::builder("unit")
///     .scalar("name", |u| &u.name, |u| &mut u.name)
///     .scalar("factor", |u| &u.factor, |u| &mut u.factor)
///     .exposed_as("conversionFactor")
///     .build();
///
/// assert_eq!(schema.properties().len(), 2);
/// assert_eq!(schema.property("conversionFactor").map(|p| p.kind()), Some(Kind::Scalar));
/// ```
pub struct SchemaBuilder<T> {
    type_name: &'static str,
    properties: Vec<PropertyDescriptor<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
    pub(crate) fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            properties: Vec::new(),
        }
    }

    fn register(mut self, name: &'static str, kind: Kind, access: Box<dyn Accessor<T>>) -> Self {
        self.properties.push(PropertyDescriptor {
            name,
            path_segment: name,
            kind,
            sensitive: false,
            access,
        });
        self
    }

    pub fn scalar<F>(
        self,
        name: &'static str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self
    where
        F: Coerce + Default + PartialEq + 'static,
    {
        self.register(name, Kind::Scalar, Box::new(ScalarLens::new(get, get_mut)))
    }

    /// Enum property; constants convert by their serialized names
    pub fn enumeration<F>(
        self,
        name: &'static str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self
    where
        F: Coerce + Default + PartialEq + 'static,
    {
        self.register(name, Kind::Enum, Box::new(ScalarLens::new(get, get_mut)))
    }

    pub fn primitive_collection<C>(
        self,
        name: &'static str,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
    ) -> Self
    where
        C: ValueSet + 'static,
        C::Item: Coerce,
    {
        let lens = SetLens::<T, C, PrimitiveElements>::new(get, get_mut);
        self.register(name, Kind::PrimitiveCollection, Box::new(lens))
    }

    /// Collection of value objects compared by full structural equality
    pub fn embedded_collection<C>(
        self,
        name: &'static str,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
    ) -> Self
    where
        C: ValueSet + 'static,
        C::Item: Serialize + DeserializeOwned,
    {
        let lens = SetLens::<T, C, EmbeddedElements>::new(get, get_mut);
        self.register(name, Kind::EmbeddedCollection, Box::new(lens))
    }

    pub fn identity_collection<G: Identifiable>(
        self,
        name: &'static str,
        get: fn(&T) -> &Vec<G>,
        get_mut: fn(&mut T) -> &mut Vec<G>,
    ) -> Self {
        let lens = IdentitySetLens::new(get, get_mut);
        self.register(name, Kind::IdentityCollection, Box::new(lens))
    }

    pub fn identity_reference<G: Identifiable>(
        self,
        name: &'static str,
        get: fn(&T) -> &Option<G>,
        get_mut: fn(&mut T) -> &mut Option<G>,
    ) -> Self {
        let lens = IdentityRefLens::new(get, get_mut);
        self.register(name, Kind::IdentityReference, Box::new(lens))
    }

    /// Nested object addressed by dotted paths through this property
    pub fn nested<N>(
        self,
        name: &'static str,
        get: fn(&T) -> &N,
        get_mut: fn(&mut T) -> &mut N,
    ) -> Self
    where
        N: Patchable + Serialize + DeserializeOwned,
    {
        let lens = NestedLens::new(get, get_mut);
        let builder = self.register(name, Kind::NestedReference, Box::new(lens));
        // Whole-object values carry every nested field
        if N::schema().has_sensitive() {
            builder.sensitive()
        } else {
            builder
        }
    }

    /// Address the last registered property by `segment` in mutation paths
    pub fn exposed_as(mut self, segment: &'static str) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.path_segment = segment;
        }
        self
    }

    /// Redact mutation values of the last registered property in logs
    pub fn sensitive(mut self) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.sensitive = true;
        }
        self
    }

    pub fn build(self) -> Schema<T> {
        debug_assert!(
            self.properties.iter().enumerate().all(|(i, p)| self.properties[..i]
                .iter()
                .all(|q| q.path_segment != p.path_segment)),
            "duplicate path segment in schema for {}",
            self.type_name
        );
        Schema {
            type_name: self.type_name,
            properties: self.properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        label: Option<String>,
        levels: Vec<i32>,
        hidden: Option<String>,
    }

    fn probe_schema() -> Schema<Probe> {
        Schema::<Probe>::builder("probe")
            .scalar("label", |p| &p.label, |p| &mut p.label)
            .primitive_collection("levels", |p| &p.levels, |p| &mut p.levels)
            .exposed_as("aggregationLevels")
            .scalar("hidden", |p| &p.hidden, |p| &mut p.hidden)
            .sensitive()
            .build()
    }

    #[test]
    fn test_registration_order_is_kept() {
        let schema = probe_schema();
        let names: Vec<&str> = schema.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["label", "levels", "hidden"]);
    }

    #[test]
    fn test_exposed_segment_applies_to_last_property() {
        let schema = probe_schema();
        let levels = &schema.properties()[1];
        assert_eq!(levels.path_segment(), "aggregationLevels");
        assert_eq!(levels.kind(), Kind::PrimitiveCollection);
        assert_eq!(schema.properties()[0].path_segment(), "label");
    }

    #[test]
    fn test_sensitive_flag() {
        let schema = probe_schema();
        assert!(schema.properties()[2].is_sensitive());
        assert!(!schema.properties()[0].is_sensitive());
    }
}
