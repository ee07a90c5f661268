//! Two-pass reconciliation of declared fields against a raw payload.

use serde_json::{Map, Value};

use super::coerce::coerce_field;
use crate::enforce::Enforce;
use crate::error::BindError;
use crate::record::{Record, Slot};

/// Walk the record's declared fields against the payload, then reject any
/// leftover payload keys.
///
/// Declared fields are always fully reconciled before unknown-field detection
/// runs. The payload is drained as fields bind (order-preserving removal, so
/// the first leftover key is deterministic). Stop on first error; bindings
/// made before the failing field are kept and the payload stays partially
/// drained.
pub(crate) fn reconcile(
    record: &mut Record,
    payload: &mut Map<String, Value>,
    level: Enforce,
) -> Result<(), BindError> {
    // Slots are removed mid-walk, so the declared names are collected first.
    // Only unbound slots count as declared fields; already-bound slots are
    // data, not schema.
    let declared: Vec<String> = record
        .field_names()
        .filter(|name| record.get(name).is_some_and(|s| !s.is_bound()))
        .map(str::to_string)
        .collect();

    for field in &declared {
        let descriptor = match record.get(field).and_then(Slot::descriptor) {
            Some(d) => d.clone(),
            None => continue,
        };

        // Key presence in the payload map is the presence criterion; a present
        // `null` is a raw value like any other.
        match payload.shift_remove(field) {
            Some(raw) => {
                let slot = coerce_field(field, &descriptor, &raw)?;
                tracing::debug!(field = %field, "field bound");
                record.set(field.clone(), slot);
            }
            None => {
                if level == Enforce::Required && descriptor.is_required() {
                    return Err(BindError::MissingRequiredField {
                        field: field.clone(),
                    });
                }
                tracing::debug!(field = %field, "absent field dropped");
                record.remove(field);
            }
        }
    }

    // A payload with extra fields is always rejected, independent of the
    // enforcement level.
    if let Some(field) = payload.keys().next() {
        return Err(BindError::UnknownField {
            field: field.clone(),
            declared,
        });
    }

    Ok(())
}
