//! Kind-specific accessors behind property descriptors.
//!
//! Every lens holds a pair of plain function pointers into the owning type,
//! so a schema is a table of data and never captures state.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::descriptor::{Accessor, Outcome};
use super::registry::Patchable;
use crate::errors::{CoercionError, PatchError, Result};
use crate::identity::{resolve_as, Identifiable, IdentityResolver};
use crate::patch::apply::apply_segments;
use crate::patch::diff::diff_properties;
use crate::patch::{Mutation, Operation, Patch};
use crate::value::coerce::{embedded_from_variant, embedded_to_variant};
use crate::value::{Coerce, ValueSet, Variant};

fn unresolved<G: Identifiable>(uid: &str, mutation: &Mutation) -> PatchError {
    PatchError::ReferenceResolution {
        type_name: G::TYPE_NAME.to_string(),
        uid: uid.to_string(),
        path: mutation.path.clone(),
    }
}

fn not_a_token(value: &Variant) -> CoercionError {
    CoercionError::new("identity token", value.type_label())
}

// ========== Scalars and enums ==========

pub(crate) struct ScalarLens<T, F> {
    get: fn(&T) -> &F,
    get_mut: fn(&mut T) -> &mut F,
}

impl<T, F> ScalarLens<T, F> {
    pub(crate) fn new(get: fn(&T) -> &F, get_mut: fn(&mut T) -> &mut F) -> Self {
        Self { get, get_mut }
    }
}

impl<T, F> Accessor<T> for ScalarLens<T, F>
where
    T: 'static,
    F: Coerce + Default + PartialEq + 'static,
{
    fn read(&self, obj: &T) -> Variant {
        (self.get)(obj).to_variant()
    }

    fn diff(&self, source: &T, target: &T, path: &str, patch: &mut Patch) {
        let after = (self.get)(target);
        if (self.get)(source) != after {
            patch.push(Mutation::replace(path, after.to_variant()));
        }
    }

    fn apply(
        &self,
        obj: &mut T,
        _rest: &[&str],
        mutation: &Mutation,
        _resolver: &dyn IdentityResolver,
    ) -> Result<Outcome> {
        match mutation.operation {
            Operation::Replace | Operation::Addition => match F::coerce(&mutation.value) {
                Ok(value) => {
                    *(self.get_mut)(obj) = value;
                    Ok(Outcome::default())
                }
                Err(reason) => Ok(Outcome::skipped_one(reason)),
            },
            Operation::Deletion => {
                *(self.get_mut)(obj) = F::default();
                Ok(Outcome::default())
            }
        }
    }
}

// ========== Primitive and embedded collections ==========

/// Conversion between collection members and mutation values
pub(crate) trait ElementCodec<E> {
    fn encode(element: &E) -> Variant;
    fn decode(value: &Variant) -> std::result::Result<E, CoercionError>;
}

/// Members converted through [`Coerce`]
pub(crate) struct PrimitiveElements;

impl<E: Coerce> ElementCodec<E> for PrimitiveElements {
    fn encode(element: &E) -> Variant {
        element.to_variant()
    }

    fn decode(value: &Variant) -> std::result::Result<E, CoercionError> {
        E::coerce(value)
    }
}

/// Members converted through serde, compared by value
pub(crate) struct EmbeddedElements;

impl<E: Serialize + DeserializeOwned> ElementCodec<E> for EmbeddedElements {
    fn encode(element: &E) -> Variant {
        embedded_to_variant(element)
    }

    fn decode(value: &Variant) -> std::result::Result<E, CoercionError> {
        embedded_from_variant(value)
    }
}

pub(crate) struct SetLens<T, C, K> {
    get: fn(&T) -> &C,
    get_mut: fn(&mut T) -> &mut C,
    codec: PhantomData<fn() -> K>,
}

impl<T, C, K> SetLens<T, C, K> {
    pub(crate) fn new(get: fn(&T) -> &C, get_mut: fn(&mut T) -> &mut C) -> Self {
        Self {
            get,
            get_mut,
            codec: PhantomData,
        }
    }
}

/// Members of `b` missing from `a`, each listed once, in `b`'s order
fn missing_from<'a, C: ValueSet>(a: &C, b: &'a C) -> Vec<&'a C::Item> {
    let mut missing: Vec<&C::Item> = Vec::new();
    for member in b.members() {
        if !a.contains_value(member) && !missing.contains(&member) {
            missing.push(member);
        }
    }
    missing
}

impl<T, C, K> Accessor<T> for SetLens<T, C, K>
where
    T: 'static,
    C: ValueSet + 'static,
    K: ElementCodec<C::Item> + 'static,
{
    fn read(&self, obj: &T) -> Variant {
        Variant::List((self.get)(obj).members().map(K::encode).collect())
    }

    fn diff(&self, source: &T, target: &T, path: &str, patch: &mut Patch) {
        let (before, after) = ((self.get)(source), (self.get)(target));
        for added in missing_from(before, after) {
            patch.push(Mutation::addition(path, K::encode(added)));
        }
        for removed in missing_from(after, before) {
            patch.push(Mutation::deletion(path, K::encode(removed)));
        }
    }

    fn apply(
        &self,
        obj: &mut T,
        _rest: &[&str],
        mutation: &Mutation,
        _resolver: &dyn IdentityResolver,
    ) -> Result<Outcome> {
        let members = (self.get_mut)(obj);
        let mut outcome = Outcome::default();

        if mutation.operation == Operation::Replace {
            let mut next = C::default();
            if !mutation.value.is_null() {
                for value in mutation.value.elements() {
                    match K::decode(value) {
                        Ok(member) => {
                            next.insert_value(member);
                        }
                        Err(reason) => outcome.skip(reason),
                    }
                }
            }
            *members = next;
            return Ok(outcome);
        }

        for value in mutation.value.elements() {
            let member = match K::decode(value) {
                Ok(member) => member,
                Err(reason) => {
                    outcome.skip(reason);
                    continue;
                }
            };
            if mutation.operation == Operation::Addition {
                members.insert_value(member);
            } else {
                members.remove_value(&member);
            }
        }
        Ok(outcome)
    }
}

// ========== Identity collections ==========

pub(crate) struct IdentitySetLens<T, G> {
    get: fn(&T) -> &Vec<G>,
    get_mut: fn(&mut T) -> &mut Vec<G>,
}

impl<T, G> IdentitySetLens<T, G> {
    pub(crate) fn new(get: fn(&T) -> &Vec<G>, get_mut: fn(&mut T) -> &mut Vec<G>) -> Self {
        Self { get, get_mut }
    }
}

/// Uids of `b` missing from `a`, each listed once, in `b`'s order
fn uids_missing_from<'a, G: Identifiable>(a: &[G], b: &'a [G]) -> Vec<&'a str> {
    let present: BTreeSet<&str> = a.iter().map(|g| g.uid()).collect();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    b.iter()
        .map(|g| g.uid())
        .filter(|uid| !present.contains(uid) && seen.insert(*uid))
        .collect()
}

impl<T, G> Accessor<T> for IdentitySetLens<T, G>
where
    T: 'static,
    G: Identifiable,
{
    fn read(&self, obj: &T) -> Variant {
        Variant::List(
            (self.get)(obj)
                .iter()
                .map(|g| Variant::identity(g.uid()))
                .collect(),
        )
    }

    fn diff(&self, source: &T, target: &T, path: &str, patch: &mut Patch) {
        let (before, after) = ((self.get)(source), (self.get)(target));
        for uid in uids_missing_from(before, after) {
            patch.push(Mutation::addition(path, Variant::identity(uid)));
        }
        for uid in uids_missing_from(after, before) {
            patch.push(Mutation::deletion(path, Variant::identity(uid)));
        }
    }

    fn apply(
        &self,
        obj: &mut T,
        _rest: &[&str],
        mutation: &Mutation,
        resolver: &dyn IdentityResolver,
    ) -> Result<Outcome> {
        let mut outcome = Outcome::default();
        let mut resolved: Vec<G> = Vec::new();

        // Resolve everything first so a failing token leaves the collection untouched.
        if !(mutation.operation == Operation::Replace && mutation.value.is_null()) {
            for value in mutation.value.elements() {
                let Some(uid) = value.identity_token() else {
                    outcome.skip(not_a_token(value));
                    continue;
                };
                let object =
                    resolve_as::<G>(resolver, uid).ok_or_else(|| unresolved::<G>(uid, mutation))?;
                if !resolved.iter().any(|g| g.uid() == object.uid()) {
                    resolved.push(object);
                }
            }
        }

        let members = (self.get_mut)(obj);
        match mutation.operation {
            Operation::Replace => *members = resolved,
            Operation::Addition => {
                for object in resolved {
                    if !members.iter().any(|g| g.uid() == object.uid()) {
                        members.push(object);
                    }
                }
            }
            Operation::Deletion => {
                members.retain(|g| !resolved.iter().any(|r| r.uid() == g.uid()));
            }
        }
        Ok(outcome)
    }
}

// ========== Identity references ==========

pub(crate) struct IdentityRefLens<T, G> {
    get: fn(&T) -> &Option<G>,
    get_mut: fn(&mut T) -> &mut Option<G>,
}

impl<T, G> IdentityRefLens<T, G> {
    pub(crate) fn new(get: fn(&T) -> &Option<G>, get_mut: fn(&mut T) -> &mut Option<G>) -> Self {
        Self { get, get_mut }
    }
}

impl<T, G> Accessor<T> for IdentityRefLens<T, G>
where
    T: 'static,
    G: Identifiable,
{
    fn read(&self, obj: &T) -> Variant {
        match (self.get)(obj) {
            Some(object) => Variant::identity(object.uid()),
            None => Variant::null(),
        }
    }

    fn diff(&self, source: &T, target: &T, path: &str, patch: &mut Patch) {
        let before = (self.get)(source).as_ref().map(|g| g.uid());
        let after = (self.get)(target).as_ref().map(|g| g.uid());
        if before != after {
            patch.push(Mutation::replace(path, self.read(target)));
        }
    }

    fn apply(
        &self,
        obj: &mut T,
        _rest: &[&str],
        mutation: &Mutation,
        resolver: &dyn IdentityResolver,
    ) -> Result<Outcome> {
        if mutation.operation == Operation::Deletion || mutation.value.is_null() {
            *(self.get_mut)(obj) = None;
            return Ok(Outcome::default());
        }
        let Some(uid) = mutation.value.identity_token() else {
            return Ok(Outcome::skipped_one(not_a_token(&mutation.value)));
        };
        let object = resolve_as::<G>(resolver, uid).ok_or_else(|| unresolved::<G>(uid, mutation))?;
        *(self.get_mut)(obj) = Some(object);
        Ok(Outcome::default())
    }
}

// ========== Nested references ==========

pub(crate) struct NestedLens<T, N> {
    get: fn(&T) -> &N,
    get_mut: fn(&mut T) -> &mut N,
}

impl<T, N> NestedLens<T, N> {
    pub(crate) fn new(get: fn(&T) -> &N, get_mut: fn(&mut T) -> &mut N) -> Self {
        Self { get, get_mut }
    }
}

impl<T, N> Accessor<T> for NestedLens<T, N>
where
    T: 'static,
    N: Patchable + Serialize + DeserializeOwned,
{
    fn read(&self, obj: &T) -> Variant {
        embedded_to_variant((self.get)(obj))
    }

    fn diff(&self, source: &T, target: &T, path: &str, patch: &mut Patch) {
        diff_properties::<N>((self.get)(source), (self.get)(target), Some(path), patch);
    }

    fn apply(
        &self,
        obj: &mut T,
        rest: &[&str],
        mutation: &Mutation,
        resolver: &dyn IdentityResolver,
    ) -> Result<Outcome> {
        let nested = (self.get_mut)(obj);
        if !rest.is_empty() {
            return apply_segments(nested, rest, mutation, resolver);
        }
        if mutation.operation == Operation::Deletion || mutation.value.is_null() {
            *nested = N::default();
            return Ok(Outcome::default());
        }
        match embedded_from_variant::<N>(&mutation.value) {
            Ok(value) => {
                *nested = value;
                Ok(Outcome::default())
            }
            Err(reason) => Ok(Outcome::skipped_one(reason)),
        }
    }
}
