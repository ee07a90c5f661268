//! Seeded randomized round-trip sweep: bind a generated payload, dump the
//! bound record, re-bind the dump into a fresh record and compare. Payload key
//! order is shuffled per case; declaration order, not payload order, governs
//! binding.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use record_bind::{
    populate_and_validate, Constructed, Enforce, FieldDescriptor, FieldType, FieldTypeRef,
    Payload, Record,
};
use serde_json::{json, Value};

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        (self.next() >> 33) % n
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }
}

struct StrType;

impl FieldType for StrType {
    fn name(&self) -> &str {
        "string"
    }
    fn construct(&self, raw: &Value, _level: Enforce) -> Result<Constructed, String> {
        match raw.as_str() {
            Some(_) => Ok(Constructed::new(raw.clone())),
            None => Err("not a string".to_string()),
        }
    }
}

struct IntType;

impl FieldType for IntType {
    fn name(&self) -> &str {
        "integer"
    }
    fn construct(&self, raw: &Value, _level: Enforce) -> Result<Constructed, String> {
        match raw.as_i64() {
            Some(_) => Ok(Constructed::new(raw.clone())),
            None => Err("not an integer".to_string()),
        }
    }
}

/// Accepts integers and digit strings, normalizing to a number. Idempotent:
/// re-coercing its output is a no-op.
struct FlexIntType;

impl FieldType for FlexIntType {
    fn name(&self) -> &str {
        "flex-integer"
    }
    fn construct(&self, raw: &Value, _level: Enforce) -> Result<Constructed, String> {
        if let Some(n) = raw.as_i64() {
            return Ok(Constructed::new(json!(n)));
        }
        match raw.as_str().and_then(|s| s.parse::<i64>().ok()) {
            Some(n) => Ok(Constructed::new(json!(n))),
            None => Err("neither an integer nor a digit string".to_string()),
        }
    }
}

const FIELD_POOL: &[&str] = &[
    "name", "age", "tags", "code", "note", "count", "labels", "city",
];

#[derive(Clone, Copy)]
enum Shape {
    Str,
    Int,
    FlexThenStr,
}

struct FieldPlan {
    name: &'static str,
    shape: Shape,
    required: bool,
    array: bool,
}

fn plan_schema(rng: &mut Lcg) -> Vec<FieldPlan> {
    let mut plans = Vec::new();
    for name in FIELD_POOL {
        if !rng.chance(75) {
            continue;
        }
        plans.push(FieldPlan {
            name,
            shape: match rng.below(3) {
                0 => Shape::Str,
                1 => Shape::Int,
                _ => Shape::FlexThenStr,
            },
            required: rng.chance(50),
            array: rng.chance(35),
        });
    }
    plans
}

fn build_record(plans: &[FieldPlan]) -> Record {
    let mut record = Record::new();
    for plan in plans {
        let types: Vec<FieldTypeRef> = match plan.shape {
            Shape::Str => vec![Arc::new(StrType)],
            Shape::Int => vec![Arc::new(IntType)],
            Shape::FlexThenStr => vec![Arc::new(FlexIntType), Arc::new(StrType)],
        };
        let mut descriptor = FieldDescriptor::new(types);
        if plan.required {
            descriptor = descriptor.min(1);
        }
        descriptor = if plan.array {
            descriptor.unbounded()
        } else {
            descriptor.max(1)
        };
        record.declare(plan.name, descriptor);
    }
    record
}

fn random_scalar(rng: &mut Lcg, shape: Shape) -> Value {
    match shape {
        Shape::Str => json!(format!("s{}", rng.below(1000))),
        Shape::Int => json!(rng.below(1000) as i64),
        // Mix raw integers and digit strings; both normalize to a number.
        Shape::FlexThenStr => {
            if rng.chance(50) {
                json!(rng.below(1000) as i64)
            } else {
                json!(format!("{}", rng.below(1000)))
            }
        }
    }
}

fn build_payload(rng: &mut Lcg, plans: &[FieldPlan], shuffle_seed: u64) -> Payload {
    let mut entries: Vec<(String, Value)> = Vec::new();
    for plan in plans {
        // Optional fields are sometimes left out of the payload entirely.
        if !plan.required && rng.chance(30) {
            continue;
        }
        let value = if plan.array {
            let len = rng.below(4);
            Value::Array((0..len).map(|_| random_scalar(rng, plan.shape)).collect())
        } else {
            random_scalar(rng, plan.shape)
        };
        entries.push((plan.name.to_string(), value));
    }

    let mut std_rng = rand::rngs::StdRng::seed_from_u64(shuffle_seed);
    entries.shuffle(&mut std_rng);

    let mut payload = Payload::new();
    for (name, value) in entries {
        payload.insert(name, value);
    }
    payload
}

#[test]
fn seeded_roundtrip_sweep_is_idempotent() {
    let mut rng = Lcg::new(0x5eed_0b1d ^ 0x9e3779b97f4a7c15);
    for case in 0..200 {
        let plans = plan_schema(&mut rng);
        let mut payload = build_payload(&mut rng, &plans, case);

        let mut first = build_record(&plans);
        populate_and_validate(&mut first, &mut payload, Enforce::Required)
            .unwrap_or_else(|e| panic!("case {case}: first bind failed: {e}"));
        assert!(payload.is_empty(), "case {case}: payload not fully drained");

        let dump = first.to_json();
        let mut redump_payload = match dump.clone() {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let mut second = build_record(&plans);
        populate_and_validate(&mut second, &mut redump_payload, Enforce::Required)
            .unwrap_or_else(|e| panic!("case {case}: re-bind failed: {e}"));

        assert_eq!(second.to_json(), dump, "case {case}: round trip diverged");
    }
}
