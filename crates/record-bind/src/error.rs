use serde_json::Value;
use thiserror::Error;

/// One failed coercion attempt against a single candidate type.
///
/// Attempts are kept in candidate declaration order so the aggregated
/// diagnostic reads in the same order the resolver tried them.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAttempt {
    pub type_name: String,
    pub reason: String,
}

/// Every way a bind call can fail. One variant per failure kind, each
/// qualified with the field it concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("{field}: is required and not present in provided data")]
    MissingRequiredField { field: String },

    #[error("{field}: is not allowed; declared fields are [{}]", .declared.join(", "))]
    UnknownField {
        field: String,
        declared: Vec<String>,
    },

    #[error("{field}: should be an array")]
    NotAnArray { field: String },

    #[error("{field}: type is not okay for value {value}; {}", fmt_attempts(.attempts))]
    NoMatchingType {
        field: String,
        value: Value,
        attempts: Vec<TypeAttempt>,
    },

    #[error("{field}: provided value is not in the bound value set")]
    ValueNotInValueSet { field: String },
}

impl BindError {
    /// The field this error is qualified with.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field }
            | Self::UnknownField { field, .. }
            | Self::NotAnArray { field }
            | Self::NoMatchingType { field, .. }
            | Self::ValueNotInValueSet { field } => field,
        }
    }
}

fn fmt_attempts(attempts: &[TypeAttempt]) -> String {
    if attempts.is_empty() {
        return "no candidate types declared".to_string();
    }
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.type_name, a.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
