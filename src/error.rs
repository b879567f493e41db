//! Error types for model decoding.

use thiserror::Error;

use crate::codec::FieldPath;

/// Errors that can occur while decoding a JSON value into a typed model.
///
/// All errors are synchronous and fail the decode in progress; the codec
/// never substitutes a default for a value it cannot interpret. Every
/// variant carries the [`FieldPath`] from the decode root to the offending
/// field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    /// A field marked required by the model descriptor was absent.
    #[error("missing required field '{path}'")]
    MissingRequiredField {
        /// Path to the missing field.
        path: FieldPath,
    },

    /// A value had the wrong JSON type for its field.
    #[error("type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Path to the mismatched value.
        path: FieldPath,
        /// What the field's decoder expected.
        expected: &'static str,
        /// The JSON type actually present.
        actual: &'static str,
    },

    /// A closed enum received a value outside its declared set, and the
    /// enum declares no `Unrecognized` fallback variant.
    #[error("invalid value '{value}' for enum field '{path}'")]
    InvalidEnumValue {
        /// Path to the enum field.
        path: FieldPath,
        /// The unrecognized wire value.
        value: String,
    },

    /// Strict union resolution matched more than one candidate.
    #[error("ambiguous value at '{path}' for union {union}: matches {}", candidates.join(", "))]
    AmbiguousUnion {
        /// Path to the union value.
        path: FieldPath,
        /// The union type name.
        union: &'static str,
        /// Names of all candidates that decoded successfully.
        candidates: Vec<&'static str>,
    },

    /// Strict union resolution matched no candidate.
    #[error("value at '{path}' matches no candidate of union {union}")]
    UnresolvedUnion {
        /// Path to the union value.
        path: FieldPath,
        /// The union type name.
        union: &'static str,
    },
}

/// Result type alias for decode operations.
pub type Result<T> = core::result::Result<T, DecodeError>;
