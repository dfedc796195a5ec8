use crate::bigint::BigInt;
use crate::composite::Composite;
use crate::container::TaggedSlotContainer;
use crate::error::{ContainerError, Result};
use crate::hashtab::HashTab;
use crate::kind::Kind;
use crate::list::List;
use crate::release::record_release;
use crate::render;
use crate::tree::Tree;

/// Value: one element of a container
///
/// Exactly one variant is active and it always matches the declared kind of
/// the container holding it. Composite payloads are boxed and exclusively
/// owned, so a value nested inside another container forms a plain ownership
/// tree with no sharing.
///
/// Equality is structural: scalars compare numerically, strings byte-wise,
/// composites through their own equality. Nested containers compare in
/// array mode. A NaN real equals another NaN so comparison stays reflexive.
#[derive(Debug, Clone)]
pub enum Value {
    /// 32-bit signed integer
    Decimal(i32),

    /// IEEE 754 double
    Real(f64),

    /// Owned byte string
    String(Vec<u8>),

    /// Ordered list of one element kind
    List(Box<List>),

    /// Ordered key/value tree
    Tree(Box<Tree>),

    /// Hash table
    HashTab(Box<HashTab>),

    /// Nested container
    Container(Box<TaggedSlotContainer>),

    /// Arbitrary-precision integer
    BigInt(Box<BigInt>),
}

impl Value {
    /// Build a string value from anything byte-like
    pub fn string(bytes: impl Into<Vec<u8>>) -> Value {
        Value::String(bytes.into())
    }

    /// Kind of the active variant
    pub fn kind(&self) -> Kind {
        match self {
            Value::Decimal(_) => Kind::Decimal,
            Value::Real(_) => Kind::Real,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Tree(_) => Kind::Tree,
            Value::HashTab(_) => Kind::HashTab,
            Value::Container(_) => Kind::Container,
            Value::BigInt(_) => Kind::BigInt,
        }
    }

    pub fn as_decimal(&self) -> Option<i32> {
        match self {
            Value::Decimal(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Value::Tree(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_tree_mut(&mut self) -> Option<&mut Tree> {
        match self {
            Value::Tree(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_hashtab(&self) -> Option<&HashTab> {
        match self {
            Value::HashTab(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_hashtab_mut(&mut self) -> Option<&mut HashTab> {
        match self {
            Value::HashTab(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&TaggedSlotContainer> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut TaggedSlotContainer> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(b) => Some(b),
            _ => None,
        }
    }

    /// Release this value and everything it owns.
    ///
    /// Composites walk their own contents first, then record themselves.
    pub fn release(self) {
        match self {
            Value::Decimal(_) => record_release(Kind::Decimal),
            Value::Real(_) => record_release(Kind::Real),
            Value::String(_) => record_release(Kind::String),
            Value::List(list) => (*list).deep_free(),
            Value::Tree(tree) => (*tree).deep_free(),
            Value::HashTab(table) => (*table).deep_free(),
            Value::Container(container) => (*container).deep_free(),
            Value::BigInt(big) => (*big).deep_free(),
        }
    }

    /// Release owned resources only; inline scalars are skipped
    pub(crate) fn release_owned(self) {
        if self.kind().owns_resources() {
            self.release();
        }
    }

    /// Render this value in the element notation used by the printers
    pub fn render(&self, out: &mut String) {
        render::render_value(self, out);
    }

    /// Rendered form as an owned string
    pub fn to_rendered(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tree(a), Value::Tree(b)) => a == b,
            (Value::HashTab(a), Value::HashTab(b)) => a == b,
            (Value::Container(a), Value::Container(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Decimal(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into_bytes())
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(Box::new(list))
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        Value::Tree(Box::new(tree))
    }
}

impl From<HashTab> for Value {
    fn from(table: HashTab) -> Self {
        Value::HashTab(Box::new(table))
    }
}

impl From<TaggedSlotContainer> for Value {
    fn from(container: TaggedSlotContainer) -> Self {
        Value::Container(Box::new(container))
    }
}

impl From<BigInt> for Value {
    fn from(big: BigInt) -> Self {
        Value::BigInt(Box::new(big))
    }
}

/// SlotKey: orderable, hashable subset of Value used as tree and table keys
///
/// Only Decimal and String can key a collaborator. Real is excluded because
/// NaN breaks equality; composites are excluded because they are owned trees
/// with no stable ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKey {
    Decimal(i32),
    String(Vec<u8>),
}

impl SlotKey {
    /// Try to convert a Value to a SlotKey
    pub fn from_value(value: &Value) -> Result<SlotKey> {
        match value {
            Value::Decimal(n) => Ok(SlotKey::Decimal(*n)),
            Value::String(s) => Ok(SlotKey::String(s.clone())),
            other => Err(ContainerError::UnsupportedKey(other.kind())),
        }
    }

    /// Convert the key back to a Value
    pub fn to_value(&self) -> Value {
        match self {
            SlotKey::Decimal(n) => Value::Decimal(*n),
            SlotKey::String(s) => Value::String(s.clone()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            SlotKey::Decimal(_) => Kind::Decimal,
            SlotKey::String(_) => Kind::String,
        }
    }

    pub(crate) fn render(&self, out: &mut String) {
        match self {
            SlotKey::Decimal(n) => render::render_decimal(*n, out),
            SlotKey::String(s) => render::render_bytes(s, out),
        }
    }
}

impl From<i32> for SlotKey {
    fn from(n: i32) -> Self {
        SlotKey::Decimal(n)
    }
}

impl From<&str> for SlotKey {
    fn from(s: &str) -> Self {
        SlotKey::String(s.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::{release_stats, reset_release_stats};

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::from(3).kind(), Kind::Decimal);
        assert_eq!(Value::from(3.5).kind(), Kind::Real);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(List::new(Kind::Real)).kind(), Kind::List);
        assert_eq!(Value::from(Tree::new(Kind::Decimal)).kind(), Kind::Tree);
        assert_eq!(Value::from(HashTab::new(Kind::Decimal)).kind(), Kind::HashTab);
        assert_eq!(
            Value::from(TaggedSlotContainer::new(1, Kind::Decimal)).kind(),
            Kind::Container
        );
        assert_eq!(Value::from(BigInt::from(9)).kind(), Kind::BigInt);
    }

    #[test]
    fn test_string_equality_is_bytewise() {
        assert_eq!(Value::from("hello"), Value::string(b"hello".to_vec()));
        assert_ne!(Value::from("hello"), Value::from("hellO"));
    }

    #[test]
    fn test_real_equality() {
        assert_eq!(Value::Real(0.0), Value::Real(-0.0));
        assert_eq!(Value::Real(f64::NAN), Value::Real(f64::NAN));
        assert_ne!(Value::Real(f64::NAN), Value::Real(1.0));
        assert_ne!(Value::Real(1.0), Value::Decimal(1));
    }

    #[test]
    fn test_slot_key_conversion() {
        assert_eq!(SlotKey::from_value(&Value::Decimal(4)), Ok(SlotKey::Decimal(4)));
        assert_eq!(SlotKey::from("k").to_value(), Value::from("k"));
        assert_eq!(
            SlotKey::from_value(&Value::Real(1.0)),
            Err(ContainerError::UnsupportedKey(Kind::Real))
        );
    }

    #[test]
    fn test_release_records_kind() {
        reset_release_stats();
        Value::Real(1.5).release();
        Value::from("bytes").release();
        let stats = release_stats();
        assert_eq!(stats.count(Kind::Real), 1);
        assert_eq!(stats.count(Kind::String), 1);
    }
}
