//! Decoding of generic JSON values into typed models.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::codec::{DecodeContext, FieldSpec, ModelDescriptor, UnknownFieldBag, ValueSlot};
use crate::error::{DecodeError, Result};

/// Human-readable JSON type name, for type-mismatch diagnostics.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, value: &Value, ctx: &DecodeContext) -> DecodeError {
    DecodeError::TypeMismatch {
        path: ctx.path().clone(),
        expected,
        actual: json_type_name(value),
    }
}

/// A value decodable from a generic JSON tree.
///
/// Implemented for JSON primitives, timestamps, vectors, and every model,
/// enum, and union type. Model impls are driven by [`ObjectDecoder`].
pub trait Decode: Sized {
    /// Decode `value` at the position described by `ctx`.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; errors carry the field path from `ctx`.
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self>;
}

/// The JSON string for a closed enum field, for enum `Decode` impls.
///
/// # Errors
///
/// `TypeMismatch` if `value` is not a string.
pub fn expect_enum_str<'v>(value: &'v Value, ctx: &DecodeContext) -> Result<&'v str> {
    value.as_str().ok_or_else(|| mismatch("string", value, ctx))
}

impl Decode for String {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value, ctx))
    }
}

impl Decode for bool {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value, ctx))
    }
}

impl Decode for i64 {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        value.as_i64().ok_or_else(|| mismatch("integer", value, ctx))
    }
}

impl Decode for u32 {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| mismatch("unsigned integer", value, ctx))
    }
}

impl Decode for f64 {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        // Integer wire values are acceptable for float fields.
        value.as_f64().ok_or_else(|| mismatch("number", value, ctx))
    }
}

/// Opaque passthrough for fields the schema leaves untyped.
impl Decode for Value {
    fn decode_value(value: &Value, _ctx: &DecodeContext) -> Result<Self> {
        Ok(value.clone())
    }
}

impl Decode for DateTime<Utc> {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let raw = value
            .as_str()
            .ok_or_else(|| mismatch("RFC 3339 date-time", value, ctx))?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| DecodeError::TypeMismatch {
                path: ctx.path().clone(),
                expected: "RFC 3339 date-time",
                actual: "string",
            })
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| mismatch("array", value, ctx))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode_value(item, &ctx.index(i)))
            .collect()
    }
}

/// Field-by-field decoder for one JSON object.
///
/// Pops declared wire keys off a working copy of the object; whatever is
/// left when [`finish`](Self::finish) is called becomes the model's
/// [`UnknownFieldBag`].
pub struct ObjectDecoder {
    descriptor: &'static ModelDescriptor,
    remaining: Map<String, Value>,
    ctx: DecodeContext,
}

impl ObjectDecoder {
    /// Start decoding `value` as an instance of `descriptor`'s model.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `value` is not a JSON object.
    pub fn new(
        value: &Value,
        descriptor: &'static ModelDescriptor,
        ctx: &DecodeContext,
    ) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| mismatch("object", value, ctx))?;
        Ok(Self {
            descriptor,
            remaining: object.clone(),
            ctx: ctx.clone(),
        })
    }

    fn spec(&self, wire_name: &str) -> &'static FieldSpec {
        // An undeclared wire name here is a bug in the model's descriptor
        // table, not a runtime condition.
        self.descriptor.field(wire_name).unwrap_or_else(|| {
            panic!(
                "field '{wire_name}' is not declared by descriptor {}",
                self.descriptor.model()
            )
        })
    }

    /// Decode an optional field into a [`ValueSlot`].
    ///
    /// An absent key yields `Absent` (or `MissingRequiredField` if the spec
    /// marks the field required). An explicit `null` yields `Null` for
    /// nullable fields; for non-nullable fields the `null` is handed to the
    /// nested decoder, which rejects it with a type mismatch.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField`, or any error from the nested decoder.
    pub fn slot<T: Decode>(&mut self, wire_name: &'static str) -> Result<ValueSlot<T>> {
        let spec = self.spec(wire_name);
        let ctx = self.ctx.key(wire_name);
        match self.remaining.shift_remove(wire_name) {
            None => {
                if spec.required {
                    return Err(DecodeError::MissingRequiredField {
                        path: ctx.path().clone(),
                    });
                }
                Ok(ValueSlot::Absent)
            }
            Some(Value::Null) if spec.nullable => Ok(ValueSlot::Null),
            Some(value) => T::decode_value(&value, &ctx).map(ValueSlot::Present),
        }
    }

    /// Decode a required field directly to its value.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` if the key is absent, or any error from the
    /// nested decoder.
    pub fn required<T: Decode>(&mut self, wire_name: &'static str) -> Result<T> {
        match self.slot(wire_name)? {
            ValueSlot::Present(value) => Ok(value),
            ValueSlot::Absent | ValueSlot::Null => Err(DecodeError::MissingRequiredField {
                path: self.ctx.key(wire_name).path().clone(),
            }),
        }
    }

    /// Consume the decoder, returning the undeclared leftover keys.
    #[must_use]
    pub fn finish(self) -> UnknownFieldBag {
        UnknownFieldBag::from_map(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeOptions;
    use serde_json::json;

    static FIELDS: [FieldSpec; 4] = [
        FieldSpec::required("name"),
        FieldSpec::optional("count"),
        FieldSpec::optional("comment").nullable(),
        FieldSpec::optional("ratio"),
    ];
    static DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("Sample", &FIELDS);

    fn ctx() -> DecodeContext {
        DecodeContext::root(DecodeOptions::default())
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = ObjectDecoder::new(&json!([1, 2]), &DESCRIPTOR, &ctx()).map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: crate::codec::FieldPath::root(),
                expected: "object",
                actual: "array",
            }
        );
    }

    #[test]
    fn test_required_field_missing() {
        let mut obj = ObjectDecoder::new(&json!({}), &DESCRIPTOR, &ctx()).unwrap();
        let err = obj.required::<String>("name").unwrap_err();
        assert_eq!(err.to_string(), "missing required field 'name'");
    }

    #[test]
    fn test_optional_absent_vs_null() {
        let value = json!({"name": "a", "comment": null});
        let mut obj = ObjectDecoder::new(&value, &DESCRIPTOR, &ctx()).unwrap();
        let _name: String = obj.required("name").unwrap();
        let count: ValueSlot<i64> = obj.slot("count").unwrap();
        let comment: ValueSlot<String> = obj.slot("comment").unwrap();
        assert!(count.is_absent());
        assert!(comment.is_null());
    }

    #[test]
    fn test_null_on_non_nullable_is_a_mismatch() {
        let value = json!({"name": "a", "count": null});
        let mut obj = ObjectDecoder::new(&value, &DESCRIPTOR, &ctx()).unwrap();
        let err = obj.slot::<i64>("count").unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at 'count': expected integer, got null"
        );
    }

    #[test]
    fn test_integer_accepted_for_float_field() {
        let value = json!({"name": "a", "ratio": 2});
        let mut obj = ObjectDecoder::new(&value, &DESCRIPTOR, &ctx()).unwrap();
        let ratio: ValueSlot<f64> = obj.slot("ratio").unwrap();
        assert_eq!(ratio, ValueSlot::Present(2.0));
    }

    #[test]
    fn test_leftover_keys_become_unknown_bag() {
        let value = json!({"name": "a", "first": 1, "second": 2});
        let mut obj = ObjectDecoder::new(&value, &DESCRIPTOR, &ctx()).unwrap();
        let _name: String = obj.required("name").unwrap();
        let bag = obj.finish();
        let keys: Vec<&str> = bag.keys().collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn test_nested_error_paths() {
        let value = json!({"name": "a", "count": "not a number"});
        let mut obj = ObjectDecoder::new(&value, &DESCRIPTOR, &ctx()).unwrap();
        let err = obj.slot::<i64>("count").unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at 'count': expected integer, got string"
        );
    }

    #[test]
    fn test_vec_error_carries_index() {
        let err = Vec::<i64>::decode_value(&json!([1, "two"]), &ctx()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at '[1]': expected integer, got string"
        );
    }

    #[test]
    fn test_datetime_decoding() {
        let dt = DateTime::<Utc>::decode_value(&json!("2024-01-02T03:04:05Z"), &ctx()).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-02T03:04:05+00:00");

        let err = DateTime::<Utc>::decode_value(&json!("yesterday"), &ctx()).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { .. }));
    }
}
