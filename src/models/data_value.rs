//! Extracted data value model.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::codec::{
    Decode, DecodeContext, Encode, FieldSpec, Model, ModelDescriptor, ObjectDecoder,
    ObjectEncoder, UnknownFieldBag, ValueSlot,
};
use crate::error::Result;

static DATA_VALUE_FIELDS: [FieldSpec; 10] = [
    FieldSpec::optional("strValue"),
    FieldSpec::optional("boolValue"),
    FieldSpec::optional("longValue"),
    FieldSpec::optional("doubleValue"),
    FieldSpec::optional("dateValue"),
    FieldSpec::optional("strListValue"),
    FieldSpec::optional("boolListValue"),
    FieldSpec::optional("longListValue"),
    FieldSpec::optional("doubleListValue"),
    FieldSpec::optional("dateListValue"),
];
static DATA_VALUE_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("DataValue", &DATA_VALUE_FIELDS);

/// One extracted value, typed by whichever slot is populated.
///
/// Date fields are RFC 3339 strings on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataValue {
    pub str_value: ValueSlot<String>,
    pub bool_value: ValueSlot<bool>,
    pub long_value: ValueSlot<i64>,
    pub double_value: ValueSlot<f64>,
    pub date_value: ValueSlot<DateTime<Utc>>,
    pub str_list_value: ValueSlot<Vec<String>>,
    pub bool_list_value: ValueSlot<Vec<bool>>,
    pub long_list_value: ValueSlot<Vec<i64>>,
    pub double_list_value: ValueSlot<Vec<f64>>,
    pub date_list_value: ValueSlot<Vec<DateTime<Utc>>>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for DataValue {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let str_value = obj.slot("strValue")?;
        let bool_value = obj.slot("boolValue")?;
        let long_value = obj.slot("longValue")?;
        let double_value = obj.slot("doubleValue")?;
        let date_value = obj.slot("dateValue")?;
        let str_list_value = obj.slot("strListValue")?;
        let bool_list_value = obj.slot("boolListValue")?;
        let long_list_value = obj.slot("longListValue")?;
        let double_list_value = obj.slot("doubleListValue")?;
        let date_list_value = obj.slot("dateListValue")?;
        Ok(Self {
            str_value,
            bool_value,
            long_value,
            double_value,
            date_value,
            str_list_value,
            bool_list_value,
            long_list_value,
            double_list_value,
            date_list_value,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for DataValue {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("strValue", &self.str_value);
        obj.slot("boolValue", &self.bool_value);
        obj.slot("longValue", &self.long_value);
        obj.slot("doubleValue", &self.double_value);
        obj.slot("dateValue", &self.date_value);
        obj.slot("strListValue", &self.str_list_value);
        obj.slot("boolListValue", &self.bool_list_value);
        obj.slot("longListValue", &self.long_list_value);
        obj.slot("doubleListValue", &self.double_list_value);
        obj.slot("dateListValue", &self.date_list_value);
        obj.finish()
    }
}

impl Model for DataValue {
    fn descriptor() -> &'static ModelDescriptor {
        &DATA_VALUE_DESCRIPTOR
    }
}
