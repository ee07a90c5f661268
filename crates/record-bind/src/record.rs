//! The binding target: an insertion-ordered field map.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::descriptor::FieldDescriptor;

/// One field slot of a record.
///
/// A slot starts out holding the field's schema entry; a successful bind
/// replaces the descriptor with the coerced value. Absent optional fields are
/// removed from the record entirely.
#[derive(Debug, Clone)]
pub enum Slot {
    /// Declared but not yet bound.
    Unbound(FieldDescriptor),
    /// Bound scalar value.
    Single(Value),
    /// Bound array value, element order preserved from the payload.
    Many(Vec<Value>),
}

impl Slot {
    /// The schema entry, while the slot is still unbound.
    pub fn descriptor(&self) -> Option<&FieldDescriptor> {
        match self {
            Self::Unbound(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::Unbound(_))
    }
}

/// A record: field name → slot, mutated in place by the binder.
///
/// Declaration order is the enumeration order during binding, so it decides
/// which error surfaces first when several fields are invalid. Removal is
/// order-preserving.
#[derive(Debug, Clone, Default)]
pub struct Record {
    slots: IndexMap<String, Slot>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaration order is kept.
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.declare(name, descriptor);
        self
    }

    /// Non-consuming variant of [`Record::field`].
    pub fn declare(&mut self, name: impl Into<String>, descriptor: FieldDescriptor) {
        self.slots.insert(name.into(), Slot::Unbound(descriptor));
    }

    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// The bound scalar value of a field, if any.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.slots.get(name)? {
            Slot::Single(v) => Some(v),
            _ => None,
        }
    }

    /// The bound array value of a field, if any.
    pub fn values(&self, name: &str) -> Option<&[Value]> {
        match self.slots.get(name)? {
            Slot::Many(vs) => Some(vs),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, name: impl Into<String>, slot: Slot) {
        self.slots.insert(name.into(), slot);
    }

    pub(crate) fn remove(&mut self, name: &str) {
        self.slots.shift_remove(name);
    }

    /// Dump the bound slots as a JSON object, in field order. Unbound slots
    /// are skipped. This is the round-trip surface used for re-binding a
    /// previously bound record, not a wire codec.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for (name, slot) in &self.slots {
            match slot {
                Slot::Single(v) => {
                    out.insert(name.clone(), v.clone());
                }
                Slot::Many(vs) => {
                    out.insert(name.clone(), Value::Array(vs.clone()));
                }
                Slot::Unbound(_) => {}
            }
        }
        Value::Object(out)
    }
}
