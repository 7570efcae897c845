use super::builder::SchemaBuilder;
use super::descriptor::PropertyDescriptor;

/// Ordered property table of a domain type
pub struct Schema<T> {
    pub(crate) type_name: &'static str,
    pub(crate) properties: Vec<PropertyDescriptor<T>>,
}

impl<T: 'static> Schema<T> {
    pub fn builder(type_name: &'static str) -> SchemaBuilder<T> {
        SchemaBuilder::new(type_name)
    }
}

impl<T> Schema<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn properties(&self) -> &[PropertyDescriptor<T>] {
        &self.properties
    }

    /// Look up a property by path segment, falling back to its field name
    pub fn property(&self, segment: &str) -> Option<&PropertyDescriptor<T>> {
        self.properties
            .iter()
            .find(|p| p.path_segment == segment)
            .or_else(|| self.properties.iter().find(|p| p.name == segment))
    }

    /// Whether any property, at any nesting depth, is redacted in logs
    pub fn has_sensitive(&self) -> bool {
        self.properties.iter().any(|p| p.sensitive)
    }
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("properties", &self.properties)
            .finish()
    }
}

/// A domain type the engine can diff and patch
///
/// Implementations build their schema once and hand out the same static
/// reference on every call, typically through a `OnceLock`:
///
/// ```
/// use std::sync::OnceLock;
/// use patchkit_core::schema::{Patchable, Schema};
///
/// #[derive(Default)]
/// struct Unit {
///     name: Option<String>,
/// }
///
/// impl Patchable for Unit {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<Unit>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::<Self>::builder("unit")
///                 .scalar("name", |u| &u.name, |u| &mut u.name)
///                 .build()
///         })
///     }
/// }
///
/// assert_eq!(Unit::type_name(), "unit");
/// ```
///
/// `Default` supplies the zero-value instance structured input is diffed
/// against.
pub trait Patchable: Default + Send + Sync + Sized + 'static {
    fn schema() -> &'static Schema<Self>;

    fn type_name() -> &'static str {
        Self::schema().type_name()
    }
}

/// Registered properties of `T`, in declaration order
pub fn describe<T: Patchable>() -> &'static [PropertyDescriptor<T>] {
    T::schema().properties()
}
