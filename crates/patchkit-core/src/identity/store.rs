use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::{resolve_as, Identifiable, IdentityResolver};

/// In-memory identity store
///
/// Objects are keyed by `(type name, uid)`. Inserting an object with a key
/// already present replaces it.
#[derive(Clone, Default)]
pub struct IdentityStore {
    objects: HashMap<(String, String), Arc<dyn Any + Send + Sync>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Register an object under its type name and uid
    pub fn insert<G: Identifiable>(&mut self, object: G) {
        let key = (G::TYPE_NAME.to_string(), object.uid().to_string());
        self.objects.insert(key, Arc::new(object));
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with<G: Identifiable>(mut self, object: G) -> Self {
        self.insert(object);
        self
    }

    pub fn get<G: Identifiable>(&self, uid: &str) -> Option<G> {
        resolve_as::<G>(self, uid)
    }

    pub fn contains(&self, type_name: &str, uid: &str) -> bool {
        self.objects
            .contains_key(&(type_name.to_string(), uid.to_string()))
    }

    /// Remove an object, returning whether it was present
    pub fn remove(&mut self, type_name: &str, uid: &str) -> bool {
        self.objects
            .remove(&(type_name.to_string(), uid.to_string()))
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl std::fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<String> = self
            .objects
            .keys()
            .map(|(type_name, uid)| format!("{}:{}", type_name, uid))
            .collect();
        keys.sort();
        f.debug_struct("IdentityStore").field("objects", &keys).finish()
    }
}

impl IdentityResolver for IdentityStore {
    fn resolve(&self, type_name: &str, uid: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.objects
            .get(&(type_name.to_string(), uid.to_string()))
            .cloned()
    }
}
