//! Values carried by mutations and their conversion into declared types.
//!
//! A [`Variant`] carries no declared type of its own; the property a mutation
//! targets decides how the value is read, through [`Coerce`] for scalars and
//! enums or through serde for embedded objects.

pub mod coerce;
pub mod set;
pub mod variant;

pub use coerce::Coerce;
pub use set::ValueSet;
pub use variant::{Scalar, Variant};
