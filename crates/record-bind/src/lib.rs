//! `record-bind` — polymorphic-type field binding and validation for
//! record-model objects.
//!
//! A [`Record`] declares its fields as descriptors (ordered candidate types,
//! cardinality bounds, optional vocabulary binding). Given a raw payload,
//! [`populate_and_validate`] coerces each value into the first candidate type
//! that accepts it, enforces cardinality and requiredness, rejects unknown
//! payload keys, and checks bound values against their value set — writing
//! results into the record in place.
//!
//! Concrete field types and value-set lookups are the caller's:
//! they plug in through the [`FieldType`] and [`ValueSet`] traits.

pub mod bind;
pub mod contract;
pub mod descriptor;
pub mod enforce;
pub mod error;
pub mod record;

// Re-export the most commonly used types at crate root
pub use bind::{populate_and_validate, populate_and_validate_atomic, set_value, Payload};
pub use contract::{Constructed, FieldType, FieldTypeRef, ValueSet, ValueSetRef};
pub use descriptor::{Binding, BindingStrength, CardMax, FieldDescriptor};
pub use enforce::Enforce;
pub use error::{BindError, TypeAttempt};
pub use record::{Record, Slot};
