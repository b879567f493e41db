//! Per-model field descriptors.

/// Schema knowledge for one wire field of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON object key on the wire.
    pub wire_name: &'static str,
    /// Required fields must decode to a value; absence is an error.
    pub required: bool,
    /// Nullable fields may carry an explicit JSON `null`.
    pub nullable: bool,
}

impl FieldSpec {
    /// An optional, non-nullable field.
    #[must_use]
    pub const fn optional(wire_name: &'static str) -> Self {
        Self {
            wire_name,
            required: false,
            nullable: false,
        }
    }

    /// A required, non-nullable field.
    #[must_use]
    pub const fn required(wire_name: &'static str) -> Self {
        Self {
            wire_name,
            required: true,
            nullable: false,
        }
    }

    /// Marks the field nullable.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Ordered field schema for one model type.
///
/// Descriptors are defined once per model as a `static` and never mutated
/// afterwards, so they are freely shared across threads. Field order is
/// the decode and encode order.
#[derive(Debug)]
pub struct ModelDescriptor {
    model: &'static str,
    fields: &'static [FieldSpec],
}

impl ModelDescriptor {
    /// A descriptor for `model` with `fields` in wire order.
    #[must_use]
    pub const fn new(model: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { model, fields }
    }

    /// The model's type name, for diagnostics.
    #[must_use]
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Declared fields in wire order.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// The spec for a wire key, if declared.
    #[must_use]
    pub fn field(&self, wire_name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: [FieldSpec; 3] = [
        FieldSpec::required("name"),
        FieldSpec::optional("path"),
        FieldSpec::optional("comment").nullable(),
    ];
    static DESCRIPTOR: ModelDescriptor = ModelDescriptor::new("Sample", &FIELDS);

    #[test]
    fn test_lookup_by_wire_name() {
        assert_eq!(DESCRIPTOR.model(), "Sample");
        assert!(DESCRIPTOR.field("name").is_some_and(|f| f.required));
        assert!(DESCRIPTOR.field("comment").is_some_and(|f| f.nullable));
        assert!(DESCRIPTOR.field("missing").is_none());
    }

    #[test]
    fn test_field_order_matches_declaration() {
        let names: Vec<&str> = DESCRIPTOR.fields().iter().map(|f| f.wire_name).collect();
        assert_eq!(names, vec!["name", "path", "comment"]);
    }
}
