//! Field paths for decode diagnostics.

use std::fmt;

/// One step in a [`FieldPath`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A JSON object key (the wire name).
    Key(String),
    /// An index into a JSON array.
    Index(usize),
}

/// Path from the decode root to a field, carried by every decode error.
///
/// Renders like `data.positions[2].bbox.x0`; the bare root renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path (the decode root).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if this is the decode root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// This path extended by an object key.
    #[must_use]
    pub fn key(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(name.to_string()));
        Self { segments }
    }

    /// This path extended by an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// The segments from root to field.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_displays_as_dollar() {
        assert_eq!(FieldPath::root().to_string(), "$");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn test_nested_keys_and_indices() {
        let path = FieldPath::root().key("data").key("positions").index(2).key("x0");
        assert_eq!(path.to_string(), "data.positions[2].x0");
        assert!(!path.is_root());
    }

    #[test]
    fn test_leading_index() {
        let path = FieldPath::root().index(0).key("name");
        assert_eq!(path.to_string(), "[0].name");
    }
}
