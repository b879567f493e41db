//! Encoding of typed models back into generic JSON values.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::codec::{UnknownFieldBag, ValueSlot};

/// A value encodable into a generic JSON tree.
pub trait Encode {
    /// Encode `self` as a JSON value.
    fn encode_value(&self) -> Value;
}

impl Encode for String {
    fn encode_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Encode for bool {
    fn encode_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Encode for i64 {
    fn encode_value(&self) -> Value {
        Value::from(*self)
    }
}

impl Encode for u32 {
    fn encode_value(&self) -> Value {
        Value::from(*self)
    }
}

impl Encode for f64 {
    fn encode_value(&self) -> Value {
        Value::from(*self)
    }
}

impl Encode for Value {
    fn encode_value(&self) -> Value {
        self.clone()
    }
}

impl Encode for DateTime<Utc> {
    fn encode_value(&self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_value(&self) -> Value {
        Value::Array(self.iter().map(Encode::encode_value).collect())
    }
}

/// Field-by-field encoder for one model instance.
///
/// Starts from a copy of the model's unknown-field bag, then writes known
/// fields in descriptor order. Writing known fields after the bag is a
/// contract, not an implementation detail: a stale unknown key with the
/// same wire name must never shadow typed data.
pub struct ObjectEncoder {
    object: Map<String, Value>,
}

impl ObjectEncoder {
    /// Start from a copy of the model's preserved unknown keys.
    #[must_use]
    pub fn from_unknown(bag: &UnknownFieldBag) -> Self {
        Self {
            object: bag.to_map(),
        }
    }

    /// Write an optional field. `Absent` slots are omitted entirely; `Null`
    /// slots emit an explicit `null`.
    pub fn slot<T: Encode>(&mut self, wire_name: &str, slot: &ValueSlot<T>) {
        match slot {
            ValueSlot::Absent => {}
            ValueSlot::Null => {
                self.object.insert(wire_name.to_string(), Value::Null);
            }
            ValueSlot::Present(value) => {
                self.object.insert(wire_name.to_string(), value.encode_value());
            }
        }
    }

    /// Write a required field.
    pub fn required<T: Encode>(&mut self, wire_name: &str, value: &T) {
        self.object.insert(wire_name.to_string(), value.encode_value());
    }

    /// Finish, yielding the encoded JSON object.
    #[must_use]
    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_omits_null_emits() {
        let mut obj = ObjectEncoder::from_unknown(&UnknownFieldBag::new());
        obj.slot("skipped", &ValueSlot::<i64>::Absent);
        obj.slot("cleared", &ValueSlot::<i64>::Null);
        obj.slot("kept", &ValueSlot::Present(5_i64));
        assert_eq!(obj.finish(), json!({"cleared": null, "kept": 5}));
    }

    #[test]
    fn test_known_fields_overwrite_stale_unknown_keys() {
        let mut bag = UnknownFieldBag::new();
        bag.insert("first", json!("stale"));
        bag.insert("extra", json!(true));

        let mut obj = ObjectEncoder::from_unknown(&bag);
        obj.slot("first", &ValueSlot::Present("fresh".to_string()));
        let encoded = obj.finish();

        assert_eq!(encoded, json!({"first": "fresh", "extra": true}));
    }

    #[test]
    fn test_datetime_encodes_with_zulu_suffix() {
        let dt: DateTime<Utc> = "2024-01-02T03:04:05Z".parse().unwrap();
        assert_eq!(dt.encode_value(), json!("2024-01-02T03:04:05Z"));
    }
}
