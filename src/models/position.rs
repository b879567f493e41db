//! Document position models.
//!
//! A position locates an annotation inside a document: a page bounding
//! box, a spreadsheet cell, or a text line. The API emits these as an
//! untagged union; the `type` tag is advisory and not reliably present,
//! so resolution is by trial decoding in declaration order.

use serde_json::Value;

use crate::codec::{
    expect_enum_str, Decode, DecodeContext, DecodeOptions, Encode, FieldSpec, Model,
    ModelDescriptor, ObjectDecoder, ObjectEncoder, UnionCandidate, UnionSpec, UnknownFieldBag,
    ValueSlot,
};
use crate::error::Result;

/// Position kind tag.
///
/// Unknown wire values decode to [`Unrecognized`](Self::Unrecognized),
/// carrying the raw string so they re-encode unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionDtoType {
    Bbox,
    Cell,
    Line,
    Unrecognized(String),
}

impl PositionDtoType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bbox => "BBOX",
            Self::Cell => "CELL",
            Self::Line => "LINE",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for PositionDtoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decode for PositionDtoType {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        Ok(match expect_enum_str(value, ctx)? {
            "BBOX" => Self::Bbox,
            "CELL" => Self::Cell,
            "LINE" => Self::Line,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl Encode for PositionDtoType {
    fn encode_value(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

static BBOX_DTO_FIELDS: [FieldSpec; 4] = [
    FieldSpec::optional("x0"),
    FieldSpec::optional("y0"),
    FieldSpec::optional("x1"),
    FieldSpec::optional("y1"),
];
static BBOX_DTO_DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("BboxDto", &BBOX_DTO_FIELDS);

/// Page-relative bounding box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BboxDto {
    pub x0: ValueSlot<f64>,
    pub y0: ValueSlot<f64>,
    pub x1: ValueSlot<f64>,
    pub y1: ValueSlot<f64>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for BboxDto {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let x0 = obj.slot("x0")?;
        let y0 = obj.slot("y0")?;
        let x1 = obj.slot("x1")?;
        let y1 = obj.slot("y1")?;
        Ok(Self {
            x0,
            y0,
            x1,
            y1,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for BboxDto {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("x0", &self.x0);
        obj.slot("y0", &self.y0);
        obj.slot("x1", &self.x1);
        obj.slot("y1", &self.y1);
        obj.finish()
    }
}

impl Model for BboxDto {
    fn descriptor() -> &'static ModelDescriptor {
        &BBOX_DTO_DESCRIPTOR
    }
}

static POSITION_BBOX_FIELDS: [FieldSpec; 3] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("bbox"),
    FieldSpec::optional("page_number"),
];
static POSITION_BBOX_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("PositionBboxDto", &POSITION_BBOX_FIELDS);

/// Position given as a bounding box on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionBboxDto {
    pub position_type: ValueSlot<PositionDtoType>,
    pub bbox: ValueSlot<BboxDto>,
    pub page_number: ValueSlot<i64>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for PositionBboxDto {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let position_type = obj.slot("type")?;
        let bbox = obj.slot("bbox")?;
        let page_number = obj.slot("page_number")?;
        Ok(Self {
            position_type,
            bbox,
            page_number,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for PositionBboxDto {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.position_type);
        obj.slot("bbox", &self.bbox);
        obj.slot("page_number", &self.page_number);
        obj.finish()
    }
}

impl Model for PositionBboxDto {
    fn descriptor() -> &'static ModelDescriptor {
        &POSITION_BBOX_DESCRIPTOR
    }
}

static POSITION_CELL_FIELDS: [FieldSpec; 4] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("sheet_name"),
    FieldSpec::optional("row"),
    FieldSpec::optional("col"),
];
static POSITION_CELL_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("PositionCellDto", &POSITION_CELL_FIELDS);

/// Position given as a spreadsheet cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionCellDto {
    pub position_type: ValueSlot<PositionDtoType>,
    pub sheet_name: ValueSlot<String>,
    pub row: ValueSlot<i64>,
    pub col: ValueSlot<i64>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for PositionCellDto {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let position_type = obj.slot("type")?;
        let sheet_name = obj.slot("sheet_name")?;
        let row = obj.slot("row")?;
        let col = obj.slot("col")?;
        Ok(Self {
            position_type,
            sheet_name,
            row,
            col,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for PositionCellDto {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.position_type);
        obj.slot("sheet_name", &self.sheet_name);
        obj.slot("row", &self.row);
        obj.slot("col", &self.col);
        obj.finish()
    }
}

impl Model for PositionCellDto {
    fn descriptor() -> &'static ModelDescriptor {
        &POSITION_CELL_DESCRIPTOR
    }
}

static POSITION_LINE_FIELDS: [FieldSpec; 4] = [
    FieldSpec::optional("type"),
    FieldSpec::optional("line_number"),
    FieldSpec::optional("column_index_start"),
    FieldSpec::optional("column_index_stop"),
];
static POSITION_LINE_DESCRIPTOR: ModelDescriptor =
    ModelDescriptor::new("PositionLineDto", &POSITION_LINE_FIELDS);

/// Position given as a text line span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionLineDto {
    pub position_type: ValueSlot<PositionDtoType>,
    pub line_number: ValueSlot<i64>,
    pub column_index_start: ValueSlot<i64>,
    pub column_index_stop: ValueSlot<i64>,
    /// Wire keys not declared by the schema, preserved verbatim.
    pub additional_properties: UnknownFieldBag,
}

impl Decode for PositionLineDto {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        let mut obj = ObjectDecoder::new(value, Self::descriptor(), ctx)?;
        let position_type = obj.slot("type")?;
        let line_number = obj.slot("line_number")?;
        let column_index_start = obj.slot("column_index_start")?;
        let column_index_stop = obj.slot("column_index_stop")?;
        Ok(Self {
            position_type,
            line_number,
            column_index_start,
            column_index_stop,
            additional_properties: obj.finish(),
        })
    }
}

impl Encode for PositionLineDto {
    fn encode_value(&self) -> Value {
        let mut obj = ObjectEncoder::from_unknown(&self.additional_properties);
        obj.slot("type", &self.position_type);
        obj.slot("line_number", &self.line_number);
        obj.slot("column_index_start", &self.column_index_start);
        obj.slot("column_index_stop", &self.column_index_stop);
        obj.finish()
    }
}

impl Model for PositionLineDto {
    fn descriptor() -> &'static ModelDescriptor {
        &POSITION_LINE_DESCRIPTOR
    }
}

/// Untagged union over the position shapes.
///
/// All three shapes are all-optional, so in lenient mode any object
/// resolves to the first candidate; callers that need the tag checked
/// should decode with strict options and disjoint payloads, or inspect
/// `position_type` afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    Bbox(PositionBboxDto),
    Cell(PositionCellDto),
    Line(PositionLineDto),
}

impl Position {
    /// Decode from a parsed JSON value with default options.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`](crate::DecodeError).
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, DecodeOptions::default())
    }

    /// Decode with explicit options (e.g. strict union resolution).
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`](crate::DecodeError).
    pub fn decode_with(value: &Value, options: DecodeOptions) -> Result<Self> {
        Self::decode_value(value, &DecodeContext::root(options))
    }

    /// Encode back into a JSON value.
    #[must_use]
    pub fn encode(&self) -> Value {
        self.encode_value()
    }
}

fn decode_position_bbox(value: &Value, ctx: &DecodeContext) -> Result<Position> {
    PositionBboxDto::decode_value(value, ctx).map(Position::Bbox)
}

fn decode_position_cell(value: &Value, ctx: &DecodeContext) -> Result<Position> {
    PositionCellDto::decode_value(value, ctx).map(Position::Cell)
}

fn decode_position_line(value: &Value, ctx: &DecodeContext) -> Result<Position> {
    PositionLineDto::decode_value(value, ctx).map(Position::Line)
}

/// Candidates for [`Position`], in API declaration order.
pub static POSITION_UNION: UnionSpec<Position> = UnionSpec {
    name: "Position",
    candidates: &[
        UnionCandidate {
            name: "PositionBboxDto",
            decode: decode_position_bbox,
        },
        UnionCandidate {
            name: "PositionCellDto",
            decode: decode_position_cell,
        },
        UnionCandidate {
            name: "PositionLineDto",
            decode: decode_position_line,
        },
    ],
};

impl Decode for Position {
    fn decode_value(value: &Value, ctx: &DecodeContext) -> Result<Self> {
        POSITION_UNION.resolve(value, ctx)
    }
}

impl Encode for Position {
    fn encode_value(&self) -> Value {
        match self {
            Self::Bbox(dto) => dto.encode_value(),
            Self::Cell(dto) => dto.encode_value(),
            Self::Line(dto) => dto.encode_value(),
        }
    }
}
