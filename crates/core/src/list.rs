//! Ordered list collaborator
//!
//! A growable sequence of values of one declared kind. Only what a container
//! needs from it is provided: build it up, read it back, and the composite
//! capabilities.
//!
//! Rendered as `#L[ a b c ]`.

use crate::composite::Composite;
use crate::error::{Result, expect_kind};
use crate::kind::Kind;
use crate::release::record_release;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct List {
    kind: Kind,
    items: Vec<Value>,
}

impl List {
    /// Create an empty list holding values of `kind`
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Element kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a value, rejecting one of the wrong kind
    pub fn push(&mut self, value: Value) -> Result<()> {
        expect_kind(self.kind, value.kind())?;
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the last value
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl Composite for List {
    const KIND: Kind = Kind::List;

    fn render(&self, out: &mut String) {
        out.push_str("#L[ ");
        for item in &self.items {
            item.render(out);
            out.push(' ');
        }
        out.push(']');
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.items == other.items
    }

    fn deep_free(self) {
        for item in self.items {
            item.release_owned();
        }
        record_release(Self::KIND);
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}
