//! Field binding entry points.
//!
//! Control flow per field: reconcile → cardinality split → ordered type
//! resolution → binding check → write-back into the record slot.

pub(crate) mod coerce;
pub(crate) mod reconcile;
pub(crate) mod resolve;

use serde_json::{Map, Value};

use crate::enforce::Enforce;
use crate::error::BindError;
use crate::record::{Record, Slot};

/// A raw payload: flat field name → unvalidated raw value map.
pub type Payload = Map<String, Value>;

/// Populate every declared field of `record` from `payload` and validate.
///
/// On success every declared field holds a coerced value or has been removed,
/// and the payload is fully drained. On failure the call stops at the first
/// error: the record keeps bindings made before the failing field and the
/// payload stays partially drained. Callers needing atomicity use
/// [`populate_and_validate_atomic`].
pub fn populate_and_validate(
    record: &mut Record,
    payload: &mut Payload,
    level: Enforce,
) -> Result<(), BindError> {
    tracing::debug!(fields = record.len(), keys = payload.len(), %level, "binding record");
    reconcile::reconcile(record, payload, level)
}

/// Copy-then-swap variant of [`populate_and_validate`]: binds into a scratch
/// copy and swaps on full success, leaving record and payload untouched on
/// failure.
pub fn populate_and_validate_atomic(
    record: &mut Record,
    payload: &mut Payload,
    level: Enforce,
) -> Result<(), BindError> {
    let mut scratch = record.clone();
    let mut scratch_payload = payload.clone();
    reconcile::reconcile(&mut scratch, &mut scratch_payload, level)?;
    *record = scratch;
    *payload = scratch_payload;
    Ok(())
}

/// Bind a single named field from `payload` and write it back.
///
/// Standalone partial-update path: the payload is not drained. The named
/// field must be declared and still unbound, otherwise the key does not name
/// a bindable field and the call fails as an unknown field. A key absent from
/// the payload resolves like a JSON `null` raw value, which every candidate
/// type is free to reject.
pub fn set_value(record: &mut Record, payload: &Payload, key: &str) -> Result<(), BindError> {
    let descriptor = match record.get(key).and_then(Slot::descriptor) {
        Some(d) => d.clone(),
        None => {
            return Err(BindError::UnknownField {
                field: key.to_string(),
                declared: record
                    .field_names()
                    .filter(|name| record.get(name).is_some_and(|s| !s.is_bound()))
                    .map(str::to_string)
                    .collect(),
            });
        }
    };
    let raw = payload.get(key).cloned().unwrap_or(Value::Null);
    let slot = coerce::coerce_field(key, &descriptor, &raw)?;
    record.set(key, slot);
    Ok(())
}
