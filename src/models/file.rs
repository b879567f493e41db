//! File and page-listing models.

use serde_json::Value;

use crate::codec::{
    expect_enum_str, Decode, DecodeContext, Encode, FieldSpec, Model, ModelDescriptor,
    ObjectDecoder, ObjectEncoder, UnknownFieldBag, ValueSlot,
};
use crate::error::{DecodeError, Result};
use crate::models::annotation::UserId;

/// Kind of a stored item.
///
/// This enum is closed: the schema declares no fallback member, so an
/// unknown wire value is an
/// [`InvalidEnumValue`](crate::DecodeError::InvalidEnumValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliseFileInfoType {
    EliseFile,
    File,
    Folder,
}

impl EliseFileInfoType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EliseFile => "ELISE_FILE",
            Self::File => "FILE",
            Self::Folder => "FOLDER",
        }
    }
}

impl std::fmt::Display for EliseFileInfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for EliseFileInfoType {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        match expect_enum_str(value, ctx)? {
            "ELISE_FILE" => Ok(Self::EliseFile),
            "FILE" => Ok(Self::File),
            "FOLDER" => Ok(Self::Folder),
            other => Err(DecodeError::InvalidEnumValue {
                path: ctx.path().clone(),
                value: other.to_string(),
            }),
        }
    }
}

impl Encode for EliseFileInfoType {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

static FILE_INFO_FIELDS: [FieldSpec; 12] = [
    FieldSpec::optional("id"),
    FieldSpec::optional("createdTime"),
    FieldSpec::optional("owner"),
    FieldSpec::optional("providerId"),
    FieldSpec::optional("name"),
    FieldSpec::optional("path"),
    FieldSpec::optional("size"),
    FieldSpec::optional("checksum"),
    FieldSpec::optional("mediaType"),
    FieldSpec::optional("extension"),
    FieldSpec::optional("indexed"),
    FieldSpec::optional("type"),
];
static FILE_INFO_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("EliseFileInfo", &FILE_INFO_FIELDS);

/// Metadata for a stored file or folder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseFileInfo {
    pub id: ValueSlot<String>,
    pub created_time: ValueSlot<i64>,
    pub owner: ValueSlot<UserId>,
    pub provider_id: ValueSlot<String>,
    pub name: ValueSlot<String>,
    pub path: ValueSlot<String>,
    pub size: ValueSlot<i64>,
    pub checksum: ValueSlot<String>,
    pub media_type: ValueSlot<String>,
    pub extension: ValueSlot<String>,
    pub indexed: ValueSlot<bool>,
    pub file_type: ValueSlot<EliseFileInfoType>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseFileInfo {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let id = obj.slot("id")?;
        let created_time = obj.slot("createdTime")?;
        let owner = obj.slot("owner")?;
        let provider_id = obj.slot("providerId")?;
        let name = obj.slot("name")?;
        let path = obj.slot("path")?;
        let size = obj.slot("size")?;
        let checksum = obj.slot("checksum")?;
        let media_type = obj.slot("mediaType")?;
        let extension = obj.slot("extension")?;
        let indexed = obj.slot("indexed")?;
        let file_type = obj.slot("type")?;
        Ok(Self {
            id,
            created_time,
            owner,
            provider_id,
            name,
            path,
            size,
            checksum,
            media_type,
            extension,
            indexed,
            file_type,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseFileInfo {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("id", &self.id);
        obj.slot("createdTime", &self.created_time);
        obj.slot("owner", &self.owner);
        obj.slot("providerId", &self.provider_id);
        obj.slot("name", &self.name);
        obj.slot("path", &self.path);
        obj.slot("size", &self.size);
        obj.slot("checksum", &self.checksum);
        obj.slot("mediaType", &self.media_type);
        obj.slot("extension", &self.extension);
        obj.slot("indexed", &self.indexed);
        obj.slot("type", &self.file_type);
        obj.finish()
    }
}

impl Model for EliseFileInfo {
    fn descriptor() -> &'static ModelDescriptor {
        &FILE_INFO_DESCRIPTOR
    }
}

static PAGE_FILE_INFO_FIELDS: [FieldSpec; 4] = [
    FieldSpec::optional("data"),
    FieldSpec::optional("totalPages"),
    FieldSpec::optional("totalElements"),
    FieldSpec::optional("hasNext"),
];
static PAGE_FILE_INFO_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("PageDataEliseFileInfo", &PAGE_FILE_INFO_FIELDS);

/// One page of a file listing.
///
/// Pagination iteration lives in the SDK layer; this type only defines
/// the wire shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDataEliseFileInfo {
    pub data: ValueSlot<Vec<EliseFileInfo>>,
    pub total_pages: ValueSlot<i64>,
    pub total_elements: ValueSlot<i64>,
    pub has_next: ValueSlot<bool>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for PageDataEliseFileInfo {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let data = obj.slot("data")?;
        let total_pages = obj.slot("totalPages")?;
        let total_elements = obj.slot("totalElements")?;
        let has_next = obj.slot("hasNext")?;
        Ok(Self {
            data,
            total_pages,
            total_elements,
            has_next,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for PageDataEliseFileInfo {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("data", &self.data);
        obj.slot("totalPages", &self.total_pages);
        obj.slot("totalElements", &self.total_elements);
        obj.slot("hasNext", &self.has_next);
        obj.finish()
    }
}

impl Model for PageDataEliseFileInfo {
    fn descriptor() -> &'static ModelDescriptor {
        &PAGE_FILE_INFO_DESCRIPTOR
    }
}
