//! Enforcement level applied to a bind call.

use serde::{Deserialize, Serialize};

/// Controls how declared fields absent from the payload are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Absent required fields (`min != 0`) fail the bind; absent optional
    /// fields are silently dropped from the record.
    Required,
    /// Any absent field is silently dropped, regardless of `min`. No
    /// required-field failure is possible in this mode.
    Exists,
}

impl Enforce {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Exists => "exists",
        }
    }
}

impl std::fmt::Display for Enforce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
