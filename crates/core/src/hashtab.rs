//! Hash table collaborator
//!
//! Unordered [`SlotKey`] → value map of one declared value kind. Lookup is
//! O(1); rendering sorts keys so output is stable across runs.
//!
//! Rendered as `#H[ {k :: v} ... ]`.

use crate::composite::Composite;
use crate::error::{Result, expect_kind};
use crate::kind::Kind;
use crate::release::record_release;
use crate::value::{SlotKey, Value};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct HashTab {
    kind: Kind,
    entries: HashMap<SlotKey, Value>,
}

impl HashTab {
    /// Create an empty table whose values are of `kind`
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace; a replaced value is released
    pub fn insert(&mut self, key: impl Into<SlotKey>, value: Value) -> Result<()> {
        expect_kind(self.kind, value.kind())?;
        if let Some(old) = self.entries.insert(key.into(), value) {
            old.release_owned();
        }
        Ok(())
    }

    /// Insert keyed by a value, which must be a Decimal or String
    pub fn insert_by_value(&mut self, key: &Value, value: Value) -> Result<()> {
        let key = SlotKey::from_value(key)?;
        self.insert(key, value)
    }

    pub fn get(&self, key: &SlotKey) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &SlotKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &SlotKey) -> Option<Value> {
        self.entries.remove(key)
    }

    fn sorted(&self) -> Vec<(&SlotKey, &Value)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Composite for HashTab {
    const KIND: Kind = Kind::HashTab;

    fn render(&self, out: &mut String) {
        out.push_str("#H[ ");
        for (key, value) in self.sorted() {
            out.push('{');
            key.render(out);
            out.push_str(" :: ");
            value.render(out);
            out.push_str("} ");
        }
        out.push(']');
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.entries == other.entries
    }

    fn deep_free(self) {
        for (_, value) in self.entries {
            value.release_owned();
        }
        record_release(Self::KIND);
    }
}

impl PartialEq for HashTab {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerError;
    use crate::release::{release_stats, reset_release_stats};

    #[test]
    fn test_render_sorted() {
        let mut table = HashTab::new(Kind::Real);
        table.insert("b", Value::Real(2.0)).unwrap();
        table.insert("a", Value::Real(1.0)).unwrap();
        assert_eq!(table.to_rendered(), "#H[ {'a' :: 1.000000} {'b' :: 2.000000} ]");
    }

    #[test]
    fn test_insert_by_value_rejects_real_key() {
        let mut table = HashTab::new(Kind::Decimal);
        assert_eq!(
            table.insert_by_value(&Value::Real(0.5), Value::Decimal(1)),
            Err(ContainerError::UnsupportedKey(Kind::Real))
        );
        table
            .insert_by_value(&Value::Decimal(7), Value::Decimal(1))
            .unwrap();
        assert!(table.contains_key(&SlotKey::Decimal(7)));
    }

    #[test]
    fn test_structural_eq() {
        let mut a = HashTab::new(Kind::String);
        let mut b = HashTab::new(Kind::String);
        a.insert(1, Value::from("x")).unwrap();
        b.insert(1, Value::from("x")).unwrap();
        assert!(a.structural_eq(&b));
        b.insert(2, Value::from("y")).unwrap();
        assert!(!a.structural_eq(&b));
    }

    #[test]
    fn test_deep_free_releases_strings() {
        let mut table = HashTab::new(Kind::String);
        table.insert(1, Value::from("x")).unwrap();
        table.insert(2, Value::from("y")).unwrap();

        reset_release_stats();
        table.deep_free();
        let stats = release_stats();
        assert_eq!(stats.count(Kind::String), 2);
        assert_eq!(stats.count(Kind::HashTab), 1);
    }
}
