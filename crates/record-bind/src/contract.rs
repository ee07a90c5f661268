//! Collaborator contracts consumed by the binder.
//!
//! The binder owns no concrete field types and no vocabulary tables; both are
//! supplied by the caller through the traits here.

use std::sync::Arc;

use serde_json::Value;

use crate::descriptor::BindingStrength;
use crate::enforce::Enforce;

/// Shared handle to a candidate type.
pub type FieldTypeRef = Arc<dyn FieldType>;

/// Shared handle to a value set.
pub type ValueSetRef = Arc<dyn ValueSet>;

/// The result of constructing a field value from raw input.
///
/// Pure value wrapper types, whose only content is a primitive, expose that
/// primitive through `inner`; the resolver substitutes it for the instance on
/// write-back.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructed {
    pub value: Value,
    pub inner: Option<Value>,
}

impl Constructed {
    pub fn new(value: Value) -> Self {
        Self { value, inner: None }
    }

    pub fn wrapper(value: Value, inner: Value) -> Self {
        Self {
            value,
            inner: Some(inner),
        }
    }

    /// The value the binder writes into the record slot: the inner primitive
    /// when one is exposed, the instance value otherwise.
    pub fn into_bound_value(self) -> Value {
        match self.inner {
            Some(inner) => inner,
            None => self.value,
        }
    }
}

/// One of several acceptable concrete representations a raw value may be
/// coerced into for a given field.
pub trait FieldType: Send + Sync {
    /// Type tag used in `NoMatchingType` diagnostics.
    fn name(&self) -> &str;

    /// Attempt to construct a value of this type from `raw`.
    ///
    /// Construction may apply nested validation (structural sub-objects may
    /// bind records of their own) and fails with a reason string that ends up
    /// in the aggregated diagnostic when every candidate is rejected.
    fn construct(&self, raw: &Value, level: Enforce) -> Result<Constructed, String>;
}

/// An external controlled vocabulary consulted for membership checks.
///
/// Must be synchronous, side-effect free and safe to call repeatedly.
pub trait ValueSet: Send + Sync {
    fn is_in_value_set(&self, value: &Value, strength: BindingStrength) -> bool;
}
