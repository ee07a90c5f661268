//! Ordered multi-type resolution with first-success precedence.

use serde_json::Value;

use crate::contract::FieldTypeRef;
use crate::enforce::Enforce;
use crate::error::TypeAttempt;

/// Try each candidate type in declared order until one constructs a value.
///
/// This is ordered precedence, not best-match: when two candidates could both
/// parse the input, the first declared always wins, so candidate order in the
/// schema is semantically significant. Failures are collected in try order for
/// the aggregated `NoMatchingType` diagnostic.
pub(crate) fn resolve_value(
    types: &[FieldTypeRef],
    raw: &Value,
    level: Enforce,
) -> Result<Value, Vec<TypeAttempt>> {
    let mut attempts = Vec::new();
    for type_ in types {
        match type_.construct(raw, level) {
            Ok(constructed) => {
                tracing::trace!(candidate = type_.name(), "candidate accepted");
                return Ok(constructed.into_bound_value());
            }
            Err(reason) => {
                attempts.push(TypeAttempt {
                    type_name: type_.name().to_string(),
                    reason,
                });
            }
        }
    }
    Err(attempts)
}
