//! Untagged union (oneOf) resolution by ordered trial decoding.
//!
//! Several Elise payloads are one of multiple object shapes with no
//! discriminator the server reliably emits, so the only way to type them
//! is to try each candidate shape in turn. Candidate order is part of a
//! union's public contract: when shapes overlap, order decides.

use serde_json::Value;

use crate::codec::{DecodeContext, UnionMode};
use crate::error::{DecodeError, Result};

/// One candidate shape of an untagged union.
pub struct UnionCandidate<U: 'static> {
    /// Candidate type name, for diagnostics.
    pub name: &'static str,
    /// Trial decoder; any error rejects this candidate.
    pub decode: fn(&Value, &DecodeContext) -> Result<U>,
}

/// Ordered candidate list for one union type.
///
/// Declared once per union as a `static`. The declaration order is the
/// resolution priority and must match the upstream API definition exactly.
pub struct UnionSpec<U: 'static> {
    /// Union type name, for diagnostics.
    pub name: &'static str,
    /// Candidates in priority order.
    pub candidates: &'static [UnionCandidate<U>],
}

impl<U> UnionSpec<U> {
    /// Resolve `value` against the candidates, per `ctx`'s union mode.
    ///
    /// In lenient mode (the default) the first candidate that decodes wins
    /// and the rest are never inspected, even if several would also match;
    /// this mirrors the upstream client and is a documented risk when
    /// candidate shapes overlap. If every candidate fails, the last
    /// candidate's error is returned.
    ///
    /// Strict mode decodes against every candidate and requires exactly
    /// one match.
    ///
    /// # Errors
    ///
    /// Lenient: the last candidate's decode error when none match.
    /// Strict: `AmbiguousUnion` or `UnresolvedUnion`.
    pub fn resolve(&self, value: &Value, ctx: &DecodeContext) -> Result<U> {
        match ctx.options().union_mode {
            UnionMode::Lenient => self.resolve_lenient(value, ctx),
            UnionMode::Strict => self.resolve_strict(value, ctx),
        }
    }

    fn resolve_lenient(&self, value: &Value, ctx: &DecodeContext) -> Result<U> {
        let mut last_err = None;
        for candidate in self.candidates {
            match (candidate.decode)(value, ctx) {
                Ok(resolved) => {
                    tracing::trace!(
                        union = self.name,
                        candidate = candidate.name,
                        "union candidate matched"
                    );
                    return Ok(resolved);
                }
                Err(err) => {
                    tracing::trace!(
                        union = self.name,
                        candidate = candidate.name,
                        %err,
                        "union candidate rejected"
                    );
                    last_err = Some(err);
                }
            }
        }
        // Candidate lists are never empty, so an error was recorded.
        Err(last_err.unwrap_or(DecodeError::UnresolvedUnion {
            path: ctx.path().clone(),
            union: self.name,
        }))
    }

    fn resolve_strict(&self, value: &Value, ctx: &DecodeContext) -> Result<U> {
        let mut resolved: Option<U> = None;
        let mut matched: Vec<&'static str> = Vec::new();
        for candidate in self.candidates {
            match (candidate.decode)(value, ctx) {
                Ok(value) => {
                    matched.push(candidate.name);
                    if resolved.is_none() {
                        resolved = Some(value);
                    }
                }
                Err(err) => {
                    tracing::trace!(
                        union = self.name,
                        candidate = candidate.name,
                        %err,
                        "union candidate rejected"
                    );
                }
            }
        }
        match resolved {
            Some(value) if matched.len() == 1 => {
                tracing::debug!(union = self.name, candidate = matched[0], "union resolved");
                Ok(value)
            }
            Some(_) => Err(DecodeError::AmbiguousUnion {
                path: ctx.path().clone(),
                union: self.name,
                candidates: matched,
            }),
            None => Err(DecodeError::UnresolvedUnion {
                path: ctx.path().clone(),
                union: self.name,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DecodeOptions, FieldPath};
    use serde_json::json;

    fn decode_string(value: &Value, ctx: &DecodeContext) -> Result<&'static str> {
        value
            .as_str()
            .map(|_| "string")
            .ok_or(DecodeError::TypeMismatch {
                path: ctx.path().clone(),
                expected: "string",
                actual: "other",
            })
    }

    fn decode_any(_value: &Value, _ctx: &DecodeContext) -> Result<&'static str> {
        Ok("any")
    }

    fn decode_number(value: &Value, ctx: &DecodeContext) -> Result<&'static str> {
        value
            .as_i64()
            .map(|_| "number")
            .ok_or(DecodeError::TypeMismatch {
                path: ctx.path().clone(),
                expected: "integer",
                actual: "other",
            })
    }

    static OVERLAPPING: UnionSpec<&'static str> = UnionSpec {
        name: "Overlapping",
        candidates: &[
            UnionCandidate { name: "AnyShape", decode: decode_any },
            UnionCandidate { name: "StringShape", decode: decode_string },
        ],
    };

    static DISJOINT: UnionSpec<&'static str> = UnionSpec {
        name: "Disjoint",
        candidates: &[
            UnionCandidate { name: "StringShape", decode: decode_string },
            UnionCandidate { name: "NumberShape", decode: decode_number },
        ],
    };

    fn lenient() -> DecodeContext {
        DecodeContext::root(DecodeOptions::default())
    }

    fn strict() -> DecodeContext {
        DecodeContext::root(DecodeOptions::strict())
    }

    #[test]
    fn test_lenient_first_match_wins() {
        // Both candidates match a string; declaration order decides.
        let resolved = OVERLAPPING.resolve(&json!("hello"), &lenient()).unwrap();
        assert_eq!(resolved, "any");
    }

    #[test]
    fn test_lenient_skips_failed_candidates() {
        let resolved = DISJOINT.resolve(&json!(42), &lenient()).unwrap();
        assert_eq!(resolved, "number");
    }

    #[test]
    fn test_lenient_no_match_propagates_last_error() {
        let err = DISJOINT.resolve(&json!(true), &lenient()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: FieldPath::root(),
                expected: "integer",
                actual: "other",
            }
        );
    }

    #[test]
    fn test_strict_single_match() {
        let resolved = DISJOINT.resolve(&json!("hello"), &strict()).unwrap();
        assert_eq!(resolved, "string");
    }

    #[test]
    fn test_strict_ambiguous_lists_candidates() {
        let err = OVERLAPPING.resolve(&json!("hello"), &strict()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::AmbiguousUnion {
                path: FieldPath::root(),
                union: "Overlapping",
                candidates: vec!["AnyShape", "StringShape"],
            }
        );
        assert_eq!(
            err.to_string(),
            "ambiguous value at '$' for union Overlapping: matches AnyShape, StringShape"
        );
    }

    #[test]
    fn test_strict_no_match_is_unresolved() {
        let err = DISJOINT.resolve(&json!(true), &strict()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnresolvedUnion {
                path: FieldPath::root(),
                union: "Disjoint",
            }
        );
    }
}
