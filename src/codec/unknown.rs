//! Preservation of wire keys a model's descriptor does not declare.

use serde_json::{Map, Value};

/// Ordered mapping of unrecognized wire keys to their raw JSON values.
///
/// Keys land here during decode when an object carries properties the model
/// descriptor does not declare. Encode writes them back first, in their
/// original order, so they survive a decode → mutate → encode cycle
/// untouched. Values are carried opaquely and never interpreted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownFieldBag {
    entries: Map<String, Value>,
}

impl UnknownFieldBag {
    /// An empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub(crate) fn to_map(&self) -> Map<String, Value> {
        self.entries.clone()
    }

    /// The raw value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert or replace a key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Remove a key, returning its value. The order of the remaining keys
    /// is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in wire order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Number of preserved keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no unknown keys were preserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_access() {
        let mut bag = UnknownFieldBag::new();
        assert!(bag.is_empty());

        bag.insert("extra", json!({"a": 1}));
        bag.insert("flag", json!(true));
        assert_eq!(bag.len(), 2);
        assert!(bag.contains("extra"));
        assert_eq!(bag.get("flag"), Some(&json!(true)));

        assert_eq!(bag.remove("extra"), Some(json!({"a": 1})));
        assert!(!bag.contains("extra"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let mut bag = UnknownFieldBag::new();
        bag.insert("z", json!(1));
        bag.insert("a", json!(2));
        bag.insert("m", json!(3));
        bag.remove("a");
        let keys: Vec<&str> = bag.keys().collect();
        assert_eq!(keys, vec!["z", "m"]);
    }
}
