//! Item reference models.

use serde_json::Value;

use crate::codec::{
    expect_enum_str, Decode, DecodeContext, Encode, FieldSpec, Model, ModelDescriptor,
    ObjectDecoder, ObjectEncoder, UnknownFieldBag, ValueSlot,
};
use crate::error::{DecodeError, Result};

/// Kind of a referenced item.
///
/// This enum is closed: the schema declares no fallback member, so an
/// unknown wire value is an
/// [`InvalidEnumValue`](crate::DecodeError::InvalidEnumValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemReferenceType {
    File,
    Folder,
}

impl ItemReferenceType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Folder => "FOLDER",
        }
    }
}

impl std::fmt::Display for ItemReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for ItemReferenceType {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        match expect_enum_str(value, ctx)? {
            "FILE" => Ok(Self::File),
            "FOLDER" => Ok(Self::Folder),
            other => Err(DecodeError::InvalidEnumValue {
                path: ctx.path().clone(),
                value: other.to_string(),
            }),
        }
    }
}

impl Encode for ItemReferenceType {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

static ITEM_REFERENCE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("name"),
    FieldSpec::required("type"),
    FieldSpec::optional("path"),
];
static ITEM_REFERENCE_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("ItemReference", &ITEM_REFERENCE_FIELDS);

/// Reference to an item by name and type, e.g. `document.pdf` in
/// `/reports/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReference {
    /// Item name. Required on the wire.
    pub name: String,
    /// Item type. Required on the wire.
    pub item_type: ItemReferenceType,
    /// Directory path containing the item.
    pub path: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for ItemReference {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let name = obj.required("name")?;
        let item_type = obj.required("type")?;
        let path = obj.slot("path")?;
        Ok(Self {
            name,
            item_type,
            path,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for ItemReference {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.required("name", &self.name);
        obj.required("type", &self.item_type);
        obj.slot("path", &self.path);
        obj.finish()
    }
}

impl Model for ItemReference {
    fn descriptor() -> &'static ModelDescriptor {
        &ITEM_REFERENCE_DESCRIPTOR
    }
}
