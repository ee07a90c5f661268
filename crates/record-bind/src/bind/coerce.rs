//! Cardinality handling and vocabulary-binding checks.

use serde_json::Value;

use super::resolve::resolve_value;
use crate::descriptor::{Binding, FieldDescriptor};
use crate::enforce::Enforce;
use crate::error::BindError;
use crate::record::Slot;

/// Coerce a field's raw value according to its declared cardinality.
///
/// Element presence inside an array is non-negotiable once the array itself is
/// present, so both the scalar path and every element resolve at
/// `Enforce::Required`. An element failure aborts the whole field; no partial
/// arrays are produced.
pub(crate) fn coerce_field(
    field: &str,
    descriptor: &FieldDescriptor,
    raw: &Value,
) -> Result<Slot, BindError> {
    if descriptor.is_array() {
        let items = raw.as_array().ok_or_else(|| BindError::NotAnArray {
            field: field.to_string(),
        })?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(coerce_one(field, descriptor, item)?);
        }
        Ok(Slot::Many(out))
    } else {
        Ok(Slot::Single(coerce_one(field, descriptor, raw)?))
    }
}

/// Resolve one scalar raw value, then run its binding check. The binding
/// check runs immediately after the value's own coercion, before any further
/// array element is looked at.
fn coerce_one(
    field: &str,
    descriptor: &FieldDescriptor,
    raw: &Value,
) -> Result<Value, BindError> {
    let value = resolve_value(&descriptor.types, raw, Enforce::Required).map_err(|attempts| {
        BindError::NoMatchingType {
            field: field.to_string(),
            value: raw.clone(),
            attempts,
        }
    })?;
    check_binding(field, descriptor.binding.as_ref(), &value)?;
    Ok(value)
}

/// Confirm value-set membership at the declared strength. No binding declared,
/// no check.
pub(crate) fn check_binding(
    field: &str,
    binding: Option<&Binding>,
    value: &Value,
) -> Result<(), BindError> {
    if let Some(binding) = binding {
        if !binding.value_set.is_in_value_set(value, binding.strength) {
            return Err(BindError::ValueNotInValueSet {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}
