//! Generic JSON (de)serialization engine for Elise models.
//!
//! The transport layer hands this module a parsed [`serde_json::Value`];
//! the engine extracts declared fields into tri-state [`ValueSlot`]s
//! (recursing into nested models and untagged unions), stashes undeclared
//! keys in an [`UnknownFieldBag`], and produces a typed model. Encoding
//! reverses this: preserved unknown keys are written first, typed fields
//! after, so typed data always wins over stale unknown data.
//!
//! The pipeline is a pure, synchronous transformation with no state
//! between calls; descriptors are immutable statics and safe to share
//! across threads.

mod context;
mod decode;
mod descriptor;
mod encode;
mod path;
mod slot;
mod union;
mod unknown;

use serde_json::Value;

pub use context::{DecodeContext, DecodeOptions, UnionMode};
pub use decode::{expect_enum_str, json_type_name, Decode, ObjectDecoder};
pub use descriptor::{FieldSpec, ModelDescriptor};
pub use encode::{Encode, ObjectEncoder};
pub use path::{FieldPath, PathSegment};
pub use slot::ValueSlot;
pub use union::{UnionCandidate, UnionSpec};
pub use unknown::UnknownFieldBag;

/// A typed Elise model backed by a [`ModelDescriptor`].
///
/// Provides the public decode/encode entry points; the per-field work is
/// done by the type's [`Decode`] and [`Encode`] impls.
pub trait Model: Decode + Encode {
    /// The model's field descriptor.
    fn descriptor() -> &'static ModelDescriptor;

    /// Decode a model from a parsed JSON value with default options.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`](crate::DecodeError).
    fn decode(value: &Value) -> crate::Result<Self> {
        Self::decode_with(value, DecodeOptions::default())
    }

    /// Decode with explicit options (e.g. strict union resolution).
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`](crate::DecodeError).
    fn decode_with(value: &Value, options: DecodeOptions) -> crate::Result<Self> {
        Self::decode_value(value, &DecodeContext::root(options))
    }

    /// Encode the model back into a JSON value.
    fn encode(&self) -> Value {
        self.encode_value()
    }
}
