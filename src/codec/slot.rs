//! Tri-state representation of optional JSON fields.

/// The three states an optional JSON field can be in on the wire.
///
/// The Elise API distinguishes a key that is missing from a key that is
/// explicitly `null`, and `Option` cannot carry that distinction, so every
/// optional model field is a `ValueSlot`. `Absent` fields are omitted from
/// encoded output entirely; `Null` re-emits an explicit `null`.
///
/// `Null` is only meaningful for fields whose schema marks them nullable.
/// The decoder never produces it for other fields (a JSON `null` there
/// fails the field's decoder with a type mismatch); constructing one by
/// hand for a non-nullable field is a bug in the caller, not a condition
/// this crate checks at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueSlot<T> {
    /// The key was not present in the JSON object.
    #[default]
    Absent,
    /// The key was present with value `null`.
    Null,
    /// The key was present with a decoded value.
    Present(T),
}

impl<T> ValueSlot<T> {
    /// Returns true if a value is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true if the field carried an explicit `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the key was missing entirely.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The contained value, or `default` for `Absent` and `Null`.
    #[must_use]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent | Self::Null => default,
        }
    }

    /// Map the contained value, preserving `Absent`/`Null`.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ValueSlot<U> {
        match self {
            Self::Present(value) => ValueSlot::Present(f(value)),
            Self::Null => ValueSlot::Null,
            Self::Absent => ValueSlot::Absent,
        }
    }

    /// Borrowing view of the slot.
    #[must_use]
    pub fn as_ref(&self) -> ValueSlot<&T> {
        match self {
            Self::Present(value) => ValueSlot::Present(value),
            Self::Null => ValueSlot::Null,
            Self::Absent => ValueSlot::Absent,
        }
    }

    /// Collapse to an `Option`, losing the `Absent`/`Null` distinction.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for ValueSlot<T> {
    /// `Some` becomes `Present`; `None` becomes `Absent` (never `Null`).
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let slot: ValueSlot<i64> = ValueSlot::default();
        assert!(slot.is_absent());
        assert!(!slot.is_present());
        assert!(!slot.is_null());
    }

    #[test]
    fn test_get_or() {
        assert_eq!(ValueSlot::Present(3).get_or(7), 3);
        assert_eq!(ValueSlot::<i64>::Null.get_or(7), 7);
        assert_eq!(ValueSlot::<i64>::Absent.get_or(7), 7);
    }

    #[test]
    fn test_map_preserves_state() {
        assert_eq!(ValueSlot::Present(2).map(|v| v * 2), ValueSlot::Present(4));
        assert_eq!(ValueSlot::<i64>::Null.map(|v| v * 2), ValueSlot::Null);
        assert_eq!(ValueSlot::<i64>::Absent.map(|v| v * 2), ValueSlot::Absent);
    }

    #[test]
    fn test_absent_and_null_are_distinct() {
        assert_ne!(ValueSlot::<i64>::Absent, ValueSlot::<i64>::Null);
    }

    #[test]
    fn test_from_option_never_produces_null() {
        assert_eq!(ValueSlot::from(Some(1)), ValueSlot::Present(1));
        assert_eq!(ValueSlot::<i64>::from(None), ValueSlot::Absent);
    }
}
