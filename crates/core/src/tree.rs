//! Ordered tree collaborator
//!
//! Maps [`SlotKey`]s to values of one declared kind, kept in key order.
//! Rendered as `#T[ (k :: v) ... ]`, smallest key first.

use crate::composite::Composite;
use crate::error::{Result, expect_kind};
use crate::kind::Kind;
use crate::release::record_release;
use crate::value::{SlotKey, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Tree {
    kind: Kind,
    nodes: BTreeMap<SlotKey, Value>,
}

impl Tree {
    /// Create an empty tree whose values are of `kind`
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            nodes: BTreeMap::new(),
        }
    }

    /// Value kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert or replace; a replaced value is released
    pub fn insert(&mut self, key: impl Into<SlotKey>, value: Value) -> Result<()> {
        expect_kind(self.kind, value.kind())?;
        if let Some(old) = self.nodes.insert(key.into(), value) {
            old.release_owned();
        }
        Ok(())
    }

    pub fn get(&self, key: &SlotKey) -> Option<&Value> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: &SlotKey) -> Option<&mut Value> {
        self.nodes.get_mut(key)
    }

    /// Detach a value, handing ownership back to the caller
    pub fn remove(&mut self, key: &SlotKey) -> Option<Value> {
        self.nodes.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SlotKey, &Value)> {
        self.nodes.iter()
    }
}

impl Composite for Tree {
    const KIND: Kind = Kind::Tree;

    fn render(&self, out: &mut String) {
        out.push_str("#T[ ");
        for (key, value) in &self.nodes {
            out.push('(');
            key.render(out);
            out.push_str(" :: ");
            value.render(out);
            out.push_str(") ");
        }
        out.push(']');
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.nodes == other.nodes
    }

    fn deep_free(self) {
        for (_, value) in self.nodes {
            value.release_owned();
        }
        record_release(Self::KIND);
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}
