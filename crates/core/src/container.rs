//! TaggedSlotContainer: array view
//!
//! A fixed number of slots, all holding values of one declared [`Kind`].
//! This module covers construction, indexed access, containment, and the
//! lifecycle. The stack view lives in `stack.rs` and structural comparison
//! in `compare.rs`; all three share the same slots.
//!
//! # Ownership
//!
//! The container exclusively owns every present value. Replacing or deleting
//! a value releases the old one; [`Composite::deep_free`] releases everything
//! that is still present, recursing into nested composites.
//!
//! ```
//! use slotstack_core::{Kind, TaggedSlotContainer, Value};
//!
//! let mut c = TaggedSlotContainer::new(4, Kind::String);
//! c.set(2, Value::from("hello")).unwrap();
//! assert_eq!(c.get(2).unwrap(), Some(&Value::from("hello")));
//! assert_eq!(c.get(0).unwrap(), None);
//! assert_eq!(c.render_array(), "#A[ (2 :: 'hello') ]");
//! ```

use crate::composite::Composite;
use crate::error::{ContainerError, Result, expect_kind};
use crate::kind::Kind;
use crate::release::record_release;
use crate::slot::{Slot, StackWindow};
use crate::value::Value;
use std::fmt::{self, Write as _};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct TaggedSlotContainer {
    kind: Kind,
    pub(crate) slots: Box<[Slot]>,
    pub(crate) window: StackWindow,
}

impl TaggedSlotContainer {
    /// Create a container of `capacity` absent slots.
    ///
    /// The stack window starts as the whole buffer with an empty stack.
    pub fn new(capacity: usize, kind: Kind) -> Self {
        let slots: Vec<Slot> = (0..capacity).map(|_| Slot::empty()).collect();
        Self {
            kind,
            slots: slots.into_boxed_slice(),
            window: StackWindow::full(capacity),
        }
    }

    /// Create a container from a numeric kind tag.
    ///
    /// Fails with `UnsupportedKind` without allocating anything when the tag
    /// is not one of the eight kinds.
    pub fn with_tag(capacity: usize, tag: u8) -> Result<Self> {
        let kind = Kind::from_tag(tag).inspect_err(|e| debug!(%e, "rejected container kind"))?;
        Ok(Self::new(capacity, kind))
    }

    /// Declared element kind
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Fixed number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current stack window
    #[inline]
    pub fn window(&self) -> StackWindow {
        self.window
    }

    /// Number of present slots
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_present()).count()
    }

    /// Present values with their indices, ascending
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.value().map(|value| (index, value)))
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.capacity() {
            Ok(())
        } else {
            let err = ContainerError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            };
            debug!(%err, "indexed access rejected");
            Err(err)
        }
    }

    pub(crate) fn check_kind(&self, value: &Value) -> Result<()> {
        expect_kind(self.kind, value.kind()).inspect_err(|e| debug!(%e, "value rejected"))
    }

    /// Whether slot `index` holds a value
    pub fn is_present(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.slots[index].is_present())
    }

    /// Read slot `index`; `None` when the slot is absent
    pub fn get(&self, index: usize) -> Result<Option<&Value>> {
        self.check_index(index)?;
        Ok(self.slots[index].value())
    }

    /// Mutable access to slot `index`, for populating nested composites in place
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut Value>> {
        self.check_index(index)?;
        Ok(self.slots[index].value_mut())
    }

    /// Store `value` at `index`, releasing whatever was there
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        self.check_index(index)?;
        self.check_kind(&value)?;
        self.store(index, value);
        Ok(())
    }

    pub(crate) fn store(&mut self, index: usize, value: Value) {
        trace!(index, kind = %self.kind, "store");
        if let Some(old) = self.slots[index].store(value) {
            old.release_owned();
        }
    }

    /// Release the value at `index` and mark the slot absent.
    ///
    /// Deleting an absent slot succeeds and does nothing.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if let Some(old) = self.slots[index].take() {
            trace!(index, "delete");
            old.release_owned();
        }
        Ok(())
    }

    /// First present index structurally equal to `probe`.
    ///
    /// The probe is consumed: it is released exactly once whether or not a
    /// match is found, and also when it is rejected for its kind.
    pub fn contains(&self, probe: Value) -> Result<Option<usize>> {
        let found = self.position(&probe);
        probe.release();
        found
    }

    /// Borrowing variant of [`contains`](Self::contains)
    pub fn position(&self, probe: &Value) -> Result<Option<usize>> {
        self.check_kind(probe)?;
        Ok(self
            .iter()
            .find(|(_, value)| *value == probe)
            .map(|(index, _)| index))
    }

    /// Array-mode rendering: `#A[ (i :: v) ... ]`, present slots only
    pub fn render_array(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }

    pub fn print_array(&self) {
        print!("{}", self.render_array());
    }

    pub fn println_array(&self) {
        println!("{}", self.render_array());
    }
}

impl Composite for TaggedSlotContainer {
    const KIND: Kind = Kind::Container;

    fn render(&self, out: &mut String) {
        out.push_str("#A[ ");
        for (index, value) in self.iter() {
            // writing into a String cannot fail
            let _ = write!(out, "({} :: ", index);
            value.render(out);
            out.push_str(") ");
        }
        out.push(']');
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.compare_array(other).is_ok()
    }

    fn deep_free(self) {
        let kind = self.kind;
        let slots = self.slots.into_vec();
        debug!(%kind, capacity = slots.len(), "deep free");
        if kind.owns_resources() {
            for value in slots.into_iter().filter_map(Slot::into_value) {
                value.release();
            }
        }
        record_release(Self::KIND);
    }
}

/// Array-mode structural equality
impl PartialEq for TaggedSlotContainer {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl fmt::Display for TaggedSlotContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_array())
    }
}
