//! Annotation models.
//!
//! An annotation attaches a statement to a space: a knowledge fact, a
//! review comment, a web citation, or a whole-document reference. The
//! statement payload (`data`) is an untagged union resolved by trial
//! decoding.

use serde_json::Value;

use crate::codec::{
    expect_enum_str, Decode, DecodeContext, DecodeOptions, Encode, FieldSpec, Model,
    ModelDescriptor, ObjectDecoder, ObjectEncoder, UnionCandidate, UnionSpec, UnknownFieldBag,
    ValueSlot,
};
use crate::error::{DecodeError, Result};
use crate::models::position::Position;

static ENTITY_ID_FIELDS: [FieldSpec; 2] = [
    FieldSpec::optional("id"),
    FieldSpec::optional("entityType"),
];
static ENTITY_ID_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("EntityId", &ENTITY_ID_FIELDS);

/// Server-assigned entity identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityId {
    pub id: ValueSlot<String>,
    pub entity_type: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EntityId {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let id = obj.slot("id")?;
        let entity_type = obj.slot("entityType")?;
        Ok(Self {
            id,
            entity_type,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EntityId {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("id", &self.id);
        obj.slot("entityType", &self.entity_type);
        obj.finish()
    }
}

impl Model for EntityId {
    fn descriptor() -> &'static ModelDescriptor {
        &ENTITY_ID_DESCRIPTOR
    }
}

static USER_ID_FIELDS: [FieldSpec; 1] = [FieldSpec::optional("id")];
static USER_ID_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("UserId", &USER_ID_FIELDS);

/// Server-assigned user identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserId {
    pub id: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for UserId {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let id = obj.slot("id")?;
        Ok(Self {
            id,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for UserId {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("id", &self.id);
        obj.finish()
    }
}

impl Model for UserId {
    fn descriptor() -> &'static ModelDescriptor {
        &USER_ID_DESCRIPTOR
    }
}

static ANNOTATION_ID_FIELDS: [FieldSpec; 1] = [FieldSpec::optional("id")];
static ANNOTATION_ID_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("AnnotationId", &ANNOTATION_ID_FIELDS);

/// Server-assigned annotation identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationId {
    pub id: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for AnnotationId {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let id = obj.slot("id")?;
        Ok(Self {
            id,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for AnnotationId {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("id", &self.id);
        obj.finish()
    }
}

impl Model for AnnotationId {
    fn descriptor() -> &'static ModelDescriptor {
        &ANNOTATION_ID_DESCRIPTOR
    }
}

/// Annotation validation status.
///
/// This enum is closed: the schema declares no fallback member, so an
/// unknown wire value is an
/// [`InvalidEnumValue`](crate::DecodeError::InvalidEnumValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliseAnnotationStatus {
    Valid,
    NotValid,
}

impl EliseAnnotationStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::NotValid => "NOTVALID",
        }
    }
}

impl std::fmt::Display for EliseAnnotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for EliseAnnotationStatus {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        match expect_enum_str(value, ctx)? {
            "VALID" => Ok(Self::Valid),
            "NOTVALID" => Ok(Self::NotValid),
            other => Err(DecodeError::InvalidEnumValue {
                path: ctx.path().clone(),
                value: other.to_string(),
            }),
        }
    }
}

impl Encode for EliseAnnotationStatus {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

/// Statement kind tag carried by every annotation statement.
///
/// Unknown wire values decode to [`Unrecognized`](Self::Unrecognized),
/// carrying the raw string so they re-encode unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EliseAnnotationConfigType {
    ExternalDocument,
    FullDocument,
    Knowledge,
    ReviewComment,
    Web,
    Unrecognized(String),
}

impl EliseAnnotationConfigType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ExternalDocument => "EXTERNAL_DOCUMENT",
            Self::FullDocument => "FULL_DOCUMENT",
            Self::Knowledge => "KNOWLEDGE",
            Self::ReviewComment => "REVIEW_COMMENT",
            Self::Web => "WEB",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for EliseAnnotationConfigType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for EliseAnnotationConfigType {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        Ok(match expect_enum_str(value, ctx)? {
            "EXTERNAL_DOCUMENT" => Self::ExternalDocument,
            "FULL_DOCUMENT" => Self::FullDocument,
            "KNOWLEDGE" => Self::Knowledge,
            "REVIEW_COMMENT" => Self::ReviewComment,
            "WEB" => Self::Web,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl Encode for EliseAnnotationConfigType {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

/// Source of a web statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EliseWebStatementSource {
    Brave,
    Web,
    Wikipedia,
    Unrecognized(String),
}

impl EliseWebStatementSource {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Brave => "BRAVE",
            Self::Web => "WEB",
            Self::Wikipedia => "WIKIPEDIA",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for EliseWebStatementSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for EliseWebStatementSource {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        Ok(match expect_enum_str(value, ctx)? {
            "BRAVE" => Self::Brave,
            "WEB" => Self::Web,
            "WIKIPEDIA" => Self::Wikipedia,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl Encode for EliseWebStatementSource {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

static EXTERNAL_DOCUMENT_STATEMENT_FIELDS: [FieldSpec; 2] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("metaData"),
];
static EXTERNAL_DOCUMENT_STATEMENT_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new(
    "EliseExternalDocumentStatement",
    &EXTERNAL_DOCUMENT_STATEMENT_FIELDS,
);

/// Statement referencing a document outside the platform.
///
/// `meta_data` is schemaless on the wire and carried as an opaque JSON
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseExternalDocumentStatement {
    pub statement_type: ValueSlot<EliseAnnotationConfigType>,
    pub meta_data: ValueSlot<Value>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseExternalDocumentStatement {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let statement_type = obj.slot("type")?;
        let meta_data = obj.slot("metaData")?;
        Ok(Self {
            statement_type,
            meta_data,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseExternalDocumentStatement {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.statement_type);
        obj.slot("metaData", &self.meta_data);
        obj.finish()
    }
}

impl Model for EliseExternalDocumentStatement {
    fn descriptor() -> &'static ModelDescriptor {
        &EXTERNAL_DOCUMENT_STATEMENT_DESCRIPTOR
    }
}

static FULL_DOCUMENT_STATEMENT_FIELDS: [FieldSpec; 3] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("documentName"),
    FieldSpec::optional("documentId"),
];
static FULL_DOCUMENT_STATEMENT_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("EliseFullDocumentStatement", &FULL_DOCUMENT_STATEMENT_FIELDS);

/// Statement covering an entire platform document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseFullDocumentStatement {
    pub statement_type: ValueSlot<EliseAnnotationConfigType>,
    pub document_name: ValueSlot<String>,
    pub document_id: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseFullDocumentStatement {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let statement_type = obj.slot("type")?;
        let document_name = obj.slot("documentName")?;
        let document_id = obj.slot("documentId")?;
        Ok(Self {
            statement_type,
            document_name,
            document_id,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseFullDocumentStatement {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.statement_type);
        obj.slot("documentName", &self.document_name);
        obj.slot("documentId", &self.document_id);
        obj.finish()
    }
}

impl Model for EliseFullDocumentStatement {
    fn descriptor() -> &'static ModelDescriptor {
        &FULL_DOCUMENT_STATEMENT_DESCRIPTOR
    }
}

static KNOWLEDGE_STATEMENT_FIELDS: [FieldSpec; 3] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("name"),
    FieldSpec::optional("value"),
];
static KNOWLEDGE_STATEMENT_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("EliseKnowledgeStatement", &KNOWLEDGE_STATEMENT_FIELDS);

/// Free-standing name/value knowledge fact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseKnowledgeStatement {
    pub statement_type: ValueSlot<EliseAnnotationConfigType>,
    pub name: ValueSlot<String>,
    pub value: ValueSlot<String>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseKnowledgeStatement {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let statement_type = obj.slot("type")?;
        let name = obj.slot("name")?;
        let value = obj.slot("value")?;
        Ok(Self {
            statement_type,
            name,
            value,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseKnowledgeStatement {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.statement_type);
        obj.slot("name", &self.name);
        obj.slot("value", &self.value);
        obj.finish()
    }
}

impl Model for EliseKnowledgeStatement {
    fn descriptor() -> &'static ModelDescriptor {
        &KNOWLEDGE_STATEMENT_DESCRIPTOR
    }
}

static REVIEW_COMMENT_FIELDS: [FieldSpec; 5] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("content"),
    FieldSpec::optional("documentName"),
    FieldSpec::optional("documentId"),
    FieldSpec::optional("positions"),
];
static REVIEW_COMMENT_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("EliseReviewComment", &REVIEW_COMMENT_FIELDS);

/// Reviewer comment anchored at document positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseReviewComment {
    pub statement_type: ValueSlot<EliseAnnotationConfigType>,
    pub content: ValueSlot<String>,
    pub document_name: ValueSlot<String>,
    pub document_id: ValueSlot<String>,
    pub positions: ValueSlot<Vec<Position>>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseReviewComment {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let statement_type = obj.slot("type")?;
        let content = obj.slot("content")?;
        let document_name = obj.slot("documentName")?;
        let document_id = obj.slot("documentId")?;
        let positions = obj.slot("positions")?;
        Ok(Self {
            statement_type,
            content,
            document_name,
            document_id,
            positions,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseReviewComment {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.statement_type);
        obj.slot("content", &self.content);
        obj.slot("documentName", &self.document_name);
        obj.slot("documentId", &self.document_id);
        obj.slot("positions", &self.positions);
        obj.finish()
    }
}

impl Model for EliseReviewComment {
    fn descriptor() -> &'static ModelDescriptor {
        &REVIEW_COMMENT_DESCRIPTOR
    }
}

static WEB_STATEMENT_FIELDS: [FieldSpec; 3] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("url"),
    FieldSpec::optional("source"),
];
static WEB_STATEMENT_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("EliseWebStatement", &WEB_STATEMENT_FIELDS);

/// Statement citing a web page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseWebStatement {
    pub statement_type: ValueSlot<EliseAnnotationConfigType>,
    pub url: ValueSlot<String>,
    pub source: ValueSlot<EliseWebStatementSource>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseWebStatement {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let statement_type = obj.slot("type")?;
        let url = obj.slot("url")?;
        let source = obj.slot("source")?;
        Ok(Self {
            statement_type,
            url,
            source,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseWebStatement {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.statement_type);
        obj.slot("url", &self.url);
        obj.slot("source", &self.source);
        obj.finish()
    }
}

impl Model for EliseWebStatement {
    fn descriptor() -> &'static ModelDescriptor {
        &WEB_STATEMENT_DESCRIPTOR
    }
}

/// Untagged union over the annotation statement shapes.
///
/// The statement shapes are all-optional and overlap heavily, so lenient
/// resolution is dominated by candidate order; the order below matches
/// the API definition.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationData {
    ExternalDocument(EliseExternalDocumentStatement),
    FullDocument(EliseFullDocumentStatement),
    Knowledge(EliseKnowledgeStatement),
    ReviewComment(EliseReviewComment),
    Web(EliseWebStatement),
}

impl AnnotationData {
    /// Decode from a parsed JSON value with default options.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`].
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, DecodeOptions::default())
    }

    /// Decode with explicit options (e.g. strict union resolution).
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`].
    pub fn decode_with(value: &Value, options: DecodeOptions) -> Result<Self> {
        Self::decode_value(value, &DecodeContext::root(options))
    }

    /// Encode back into a JSON value.
    #[must_use]
    pub fn encode(&self) -> Value {
        self.encode_value()
    }
}

fn decode_external_document(value: &Value, ctx: &DecodeContext) -> Result<AnnotationData> {
    EliseExternalDocumentStatement::decode_value(value, ctx).map(AnnotationData::ExternalDocument)
}

fn decode_full_document(value: &Value, ctx: &DecodeContext) -> Result<AnnotationData> {
    EliseFullDocumentStatement::decode_value(value, ctx).map(AnnotationData::FullDocument)
}

fn decode_knowledge(value: &Value, ctx: &DecodeContext) -> Result<AnnotationData> {
    EliseKnowledgeStatement::decode_value(value, ctx).map(AnnotationData::Knowledge)
}

fn decode_review_comment(value: &Value, ctx: &DecodeContext) -> Result<AnnotationData> {
    EliseReviewComment::decode_value(value, ctx).map(AnnotationData::ReviewComment)
}

fn decode_web(value: &Value, ctx: &DecodeContext) -> Result<AnnotationData> {
    EliseWebStatement::decode_value(value, ctx).map(AnnotationData::Web)
}

/// Candidates for [`AnnotationData`], in API declaration order.
pub static ANNOTATION_DATA_UNION: UnionSpec<AnnotationData> = UnionSpec {
    name: "AnnotationData",
    candidates: &[
        UnionCandidate {
            name: "EliseExternalDocumentStatement",
            decode: decode_external_document,
        },
        UnionCandidate {
            name: "EliseFullDocumentStatement",
            decode: decode_full_document,
        },
        UnionCandidate {
            name: "EliseKnowledgeStatement",
            decode: decode_knowledge,
        },
        UnionCandidate {
            name: "EliseReviewComment",
            decode: decode_review_comment,
        },
        UnionCandidate {
            name: "EliseWebStatement",
            decode: decode_web,
        },
    ],
};

impl Decode for AnnotationData {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        ANNOTATION_DATA_UNION.resolve(value, ctx)
    }
}

impl Encode for AnnotationData {
    fn encode_value(&self) -> Value {
        match self {
            Self::ExternalDocument(statement) => statement.encode_value(),
            Self::FullDocument(statement) => statement.encode_value(),
            Self::Knowledge(statement) => statement.encode_value(),
            Self::ReviewComment(statement) => statement.encode_value(),
            Self::Web(statement) => statement.encode_value(),
        }
    }
}

static ANNOTATION_FIELDS: [FieldSpec; 9] = [
    FieldSpec::optional("id"),
    FieldSpec::optional("createdTime"),
    FieldSpec::optional("owner"),
    FieldSpec::optional("space"),
    FieldSpec::optional("data"),
    FieldSpec::optional("type"),
    FieldSpec::optional("modifiedTime"),
    FieldSpec::optional("lastModifier"),
    FieldSpec::optional("status"),
];
static ANNOTATION_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("EliseAnnotation", &ANNOTATION_FIELDS);

/// An annotation attached to a space.
///
/// `created_time` and `modified_time` are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EliseAnnotation {
    pub id: ValueSlot<AnnotationId>,
    pub created_time: ValueSlot<i64>,
    pub owner: ValueSlot<UserId>,
    pub space: ValueSlot<EntityId>,
    pub data: ValueSlot<AnnotationData>,
    pub annotation_type: ValueSlot<String>,
    pub modified_time: ValueSlot<i64>,
    pub last_modifier: ValueSlot<UserId>,
    pub status: ValueSlot<EliseAnnotationStatus>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for EliseAnnotation {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let id = obj.slot("id")?;
        let created_time = obj.slot("createdTime")?;
        let owner = obj.slot("owner")?;
        let space = obj.slot("space")?;
        let data = obj.slot("data")?;
        let annotation_type = obj.slot("type")?;
        let modified_time = obj.slot("modifiedTime")?;
        let last_modifier = obj.slot("lastModifier")?;
        let status = obj.slot("status")?;
        Ok(Self {
            id,
            created_time,
            owner,
            space,
            data,
            annotation_type,
            modified_time,
            last_modifier,
            status,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for EliseAnnotation {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("id", &self.id);
        obj.slot("createdTime", &self.created_time);
        obj.slot("owner", &self.owner);
        obj.slot("space", &self.space);
        obj.slot("data", &self.data);
        obj.slot("type", &self.annotation_type);
        obj.slot("modifiedTime", &self.modified_time);
        obj.slot("lastModifier", &self.last_modifier);
        obj.slot("status", &self.status);
        obj.finish()
    }
}

impl Model for EliseAnnotation {
    fn descriptor() -> &'static ModelDescriptor {
        &ANNOTATION_DESCRIPTOR
    }
}
