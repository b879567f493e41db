//! Biolevate Elise API model library.
//!
//! The model and (de)serialization layer of a Biolevate Elise API client:
//! typed models for the Elise REST API plus the generic codec engine they
//! are built on. The transport layer (out of scope here) parses response
//! bodies into [`serde_json::Value`] trees and serializes them back; this
//! crate turns those trees into typed models and vice versa.
//!
//! Three wire subtleties drive the design:
//!
//! - **Absent vs null.** The API distinguishes a missing key from an
//!   explicit `null`, so optional fields are a tri-state [`ValueSlot`]
//!   rather than an `Option`.
//! - **Unknown keys round-trip.** Object keys a model does not declare are
//!   preserved in an [`UnknownFieldBag`] and re-emitted on encode, in
//!   their original order.
//! - **Untagged unions.** Some payloads are one of several shapes with no
//!   reliable discriminator; they are resolved by trial decoding against
//!   an ordered candidate list. By default the first match wins
//!   ([`UnionMode::Lenient`]); strict resolution is available via
//!   [`DecodeOptions`].
//!
//! # Quick Start
//!
//! ```
//! use biolevate_models::{Position, ValueSlot};
//! use serde_json::json;
//!
//! # fn main() -> biolevate_models::Result<()> {
//! let payload = json!({"type": "BBOX", "bbox": {"x0": 1.0}, "page_number": 2});
//!
//! let position = Position::decode(&payload)?;
//! let Position::Bbox(bbox) = &position else { unreachable!() };
//! assert_eq!(bbox.page_number, ValueSlot::Present(2));
//!
//! // Re-encoding reproduces the payload, with no spurious null fields.
//! assert_eq!(position.encode(), payload);
//! # Ok(())
//! # }
//! ```

mod codec;
mod error;
mod models;

// Re-export the codec engine
pub use codec::{
    expect_enum_str, json_type_name, Decode, DecodeContext, DecodeOptions, Encode, FieldPath,
    FieldSpec, Model, ModelDescriptor, ObjectDecoder, ObjectEncoder, PathSegment, UnionCandidate,
    UnionMode, UnionSpec, UnknownFieldBag, ValueSlot,
};
pub use error::{DecodeError, Result};

// Re-export models
pub use models::{
    // Annotations
    AnnotationData,
    AnnotationId,
    EliseAnnotation,
    EliseAnnotationConfigType,
    EliseAnnotationStatus,
    EliseExternalDocumentStatement,
    EliseFullDocumentStatement,
    EliseKnowledgeStatement,
    EliseReviewComment,
    EliseWebStatement,
    EliseWebStatementSource,
    EntityId,
    UserId,
    ANNOTATION_DATA_UNION,
    // Data values
    DataValue,
    // Files
    EliseFileInfo,
    EliseFileInfoType,
    PageDataEliseFileInfo,
    // Items
    ItemReference,
    ItemReferenceType,
    // Jobs
    Job,
    JobStatus,
    // Positions
    BboxDto,
    Position,
    PositionBboxDto,
    PositionCellDto,
    PositionDtoType,
    PositionLineDto,
    POSITION_UNION,
    // Providers
    FsProvider,
    FsProviderAzureConfig,
    FsProviderGcsConfig,
    FsProviderSharepointOnlineConfig,
    FsProviderType,
    ProviderConfig,
    PROVIDER_CONFIG_UNION,
};
