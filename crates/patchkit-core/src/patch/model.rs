//! Mutation and patch types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`, so
//! patches can be written to and read from files as they are.

use serde::{Deserialize, Serialize};

use crate::value::Variant;

/// What a mutation does to the property its path names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Set a single value, or the whole content of a collection
    Replace,
    /// Add members to a collection
    Addition,
    /// Remove members from a collection
    Deletion,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Operation::Replace => "REPLACE",
            Operation::Addition => "ADDITION",
            Operation::Deletion => "DELETION",
        };
        write!(f, "{}", s)
    }
}

/// A single structural change
///
/// `path` is a dot-delimited chain of path segments, traversing nested
/// references before the last segment (`userCredentials.username`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub path: String,
    pub operation: Operation,
    pub value: Variant,
}

impl Mutation {
    pub fn new(path: impl Into<String>, operation: Operation, value: impl Into<Variant>) -> Self {
        Self {
            path: path.into(),
            operation,
            value: value.into(),
        }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Variant>) -> Self {
        Self::new(path, Operation::Replace, value)
    }

    pub fn addition(path: impl Into<String>, value: impl Into<Variant>) -> Self {
        Self::new(path, Operation::Addition, value)
    }

    pub fn deletion(path: impl Into<String>, value: impl Into<Variant>) -> Self {
        Self::new(path, Operation::Deletion, value)
    }

    /// Number of values this mutation carries (list members count one each)
    pub fn value_count(&self) -> usize {
        match &self.value {
            Variant::List(items) => items.len(),
            _ => 1,
        }
    }
}

/// Ordered sequence of mutations
///
/// Diff output is ordered by property registration, with a collection's
/// additions before its deletions. Application replays mutations in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    mutations: Vec<Mutation>,
}

impl Patch {
    pub fn new() -> Self {
        Self {
            mutations: Vec::new(),
        }
    }

    /// Append a mutation, builder style
    pub fn add_mutation(mut self, mutation: Mutation) -> Self {
        self.mutations.push(mutation);
        self
    }

    pub fn push(&mut self, mutation: Mutation) {
        self.mutations.push(mutation);
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mutation> {
        self.mutations.iter()
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Count values applied to `path` with `operation`
    ///
    /// A mutation carrying a list counts once per member.
    pub fn count(&self, path: &str, operation: Operation) -> usize {
        self.mutations
            .iter()
            .filter(|m| m.path == path && m.operation == operation)
            .map(Mutation::value_count)
            .sum()
    }
}

impl FromIterator<Mutation> for Patch {
    fn from_iter<I: IntoIterator<Item = Mutation>>(iter: I) -> Self {
        Self {
            mutations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Patch {
    type Item = Mutation;
    type IntoIter = std::vec::IntoIter<Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Mutation;
    type IntoIter = std::slice::Iter<'a, Mutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.iter()
    }
}
