//! Decode configuration and per-call context.

use std::env;

use crate::codec::FieldPath;

/// How untagged union (oneOf) values are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnionMode {
    /// Take the first candidate that decodes, in declaration order, without
    /// checking whether later candidates would also match. This mirrors the
    /// upstream API client's behavior and is the default; when candidate
    /// shapes overlap, the first match wins silently.
    #[default]
    Lenient,
    /// Decode against every candidate and require exactly one match. More
    /// than one is [`AmbiguousUnion`](crate::DecodeError::AmbiguousUnion);
    /// none is [`UnresolvedUnion`](crate::DecodeError::UnresolvedUnion).
    Strict,
}

/// Options applied to a whole decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Union resolution mode.
    pub union_mode: UnionMode,
}

impl DecodeOptions {
    /// Options with strict union resolution.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            union_mode: UnionMode::Strict,
        }
    }

    /// Read options from the environment.
    ///
    /// Set `BIOLEVATE_STRICT_UNIONS` to `1` or `true` to enable strict
    /// union resolution; anything else keeps the lenient default.
    #[must_use]
    pub fn from_env() -> Self {
        let strict = env::var("BIOLEVATE_STRICT_UNIONS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if strict {
            Self::strict()
        } else {
            Self::default()
        }
    }
}

/// Per-call decode state: where we are in the document, and how to behave.
#[derive(Debug, Clone)]
pub struct DecodeContext {
    path: FieldPath,
    options: DecodeOptions,
}

impl DecodeContext {
    /// Context at the decode root.
    #[must_use]
    pub fn root(options: DecodeOptions) -> Self {
        Self {
            path: FieldPath::root(),
            options,
        }
    }

    /// Current field path.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Context for a child object key.
    #[must_use]
    pub fn key(&self, name: &str) -> Self {
        Self {
            path: self.path.key(name),
            options: self.options,
        }
    }

    /// Context for an array element.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: self.path.index(index),
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(DecodeOptions::default().union_mode, UnionMode::Lenient);
        assert_eq!(DecodeOptions::strict().union_mode, UnionMode::Strict);
    }

    #[test]
    fn test_from_env_recognizes_strict_flag() {
        // No other test reads this variable, so set/remove is safe here.
        env::remove_var("BIOLEVATE_STRICT_UNIONS");
        assert_eq!(DecodeOptions::from_env().union_mode, UnionMode::Lenient);

        env::set_var("BIOLEVATE_STRICT_UNIONS", "true");
        assert_eq!(DecodeOptions::from_env().union_mode, UnionMode::Strict);

        env::set_var("BIOLEVATE_STRICT_UNIONS", "0");
        assert_eq!(DecodeOptions::from_env().union_mode, UnionMode::Lenient);
        env::remove_var("BIOLEVATE_STRICT_UNIONS");
    }

    #[test]
    fn test_child_contexts_extend_path() {
        let ctx = DecodeContext::root(DecodeOptions::strict());
        let child = ctx.key("data").index(1);
        assert_eq!(child.path().to_string(), "data[1]");
        assert_eq!(child.options().union_mode, UnionMode::Strict);
    }
}
