//! Field descriptors — the schema entry for one declared field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contract::{FieldTypeRef, ValueSetRef};

/// Declared maximum cardinality of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMax {
    Bounded(u32),
    Unbounded,
}

impl CardMax {
    /// A declared maximum other than exactly one marks the field array-valued.
    pub fn is_array(self) -> bool {
        !matches!(self, Self::Bounded(1))
    }
}

/// Conformance strength of a vocabulary binding.
///
/// Passed through verbatim to the [`ValueSet`](crate::contract::ValueSet)
/// collaborator; the binder attaches no semantics to individual levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

/// A vocabulary binding: the value set to consult and the strength to demand.
#[derive(Clone)]
pub struct Binding {
    pub value_set: ValueSetRef,
    pub strength: BindingStrength,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("strength", &self.strength)
            .finish()
    }
}

/// Schema entry specifying a field's acceptable types, cardinality bounds and
/// optional vocabulary binding.
///
/// Candidate order in `types` is semantically significant: the resolver tries
/// them in declared order and the first success wins.
///
/// `min` and `max` encode requiredness and array-ness only; element counts of
/// a bound array are never recounted against them.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub types: Vec<FieldTypeRef>,
    pub min: u32,
    pub max: Option<CardMax>,
    pub binding: Option<Binding>,
}

impl FieldDescriptor {
    pub fn new(types: Vec<FieldTypeRef>) -> Self {
        Self {
            types,
            min: 0,
            max: None,
            binding: None,
        }
    }

    /// Descriptor with a single candidate type.
    pub fn single(type_: FieldTypeRef) -> Self {
        Self::new(vec![type_])
    }

    pub fn min(mut self, v: u32) -> Self {
        self.min = v;
        self
    }

    pub fn max(mut self, v: u32) -> Self {
        self.max = Some(CardMax::Bounded(v));
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max = Some(CardMax::Unbounded);
        self
    }

    pub fn binding(mut self, value_set: ValueSetRef, strength: BindingStrength) -> Self {
        self.binding = Some(Binding {
            value_set,
            strength,
        });
        self
    }

    /// `min != 0` marks the field required.
    pub fn is_required(&self) -> bool {
        self.min != 0
    }

    /// A declared maximum other than exactly one marks the field array-valued.
    pub fn is_array(&self) -> bool {
        self.max.map(CardMax::is_array).unwrap_or(false)
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field(
                "types",
                &self.types.iter().map(|t| t.name().to_string()).collect::<Vec<_>>(),
            )
            .field("min", &self.min)
            .field("max", &self.max)
            .field("binding", &self.binding)
            .finish()
    }
}
