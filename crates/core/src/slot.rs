//! Slot storage and the stack window
//!
//! The backing buffer is a fixed run of presence-aware slots. The stack view
//! is nothing more than a `[begin, end)` window with a `top` cursor laid over
//! the same slots.
//!
//! ## Buffer Layout
//!
//! ```text
//! capacity = 8, window = [2, 7), top = 4
//!
//!   0     1     2     3     4     5     6     7
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │  x  │  .  │  a  │  b  │  .  │  .  │  .  │  y  │
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!               ↑ begin     ↑ top             ↑ end
//!
//! x, y: present, reachable only through the indexed API
//! a, b: present and stack-active (begin <= i < top)
//! .   : absent
//! ```
//!
//! - Push: store at top, mark present, increment top
//! - Pop: decrement top, read the slot; presence is left alone
//!
//! Presence has exactly one source of truth, the slot itself. Being below
//! `top` says nothing about presence, and popping never clears it.

use crate::error::{ContainerError, Result};
use crate::value::Value;

/// One storage cell: a value, or nothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    value: Option<Value>,
}

impl Slot {
    pub const fn empty() -> Self {
        Self { value: None }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.as_mut()
    }

    /// Store a value and mark present, handing back what was there
    pub(crate) fn store(&mut self, value: Value) -> Option<Value> {
        self.value.replace(value)
    }

    /// Mark absent, handing back what was there
    pub(crate) fn take(&mut self) -> Option<Value> {
        self.value.take()
    }

    pub(crate) fn into_value(self) -> Option<Value> {
        self.value
    }
}

/// Active stack region `[begin, end)` with cursor `top`
///
/// Always satisfies `begin <= top <= end <= capacity`; the only way to build
/// one is through [`StackWindow::full`] or the validating [`StackWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackWindow {
    begin: usize,
    end: usize,
    top: usize,
}

impl StackWindow {
    /// Whole-buffer window with an empty stack
    pub fn full(capacity: usize) -> Self {
        Self {
            begin: 0,
            end: capacity,
            top: 0,
        }
    }

    /// Validate a window for a buffer of `capacity` slots.
    ///
    /// Checks run in a fixed order so each bad shape maps to one error:
    /// end beyond capacity, then begin after end, then top outside the window.
    pub fn new(top: usize, begin: usize, end: usize, capacity: usize) -> Result<Self> {
        if end > capacity {
            return Err(ContainerError::WindowTooWide { end, capacity });
        }
        if begin > end {
            return Err(ContainerError::InvertedWindow { begin, end });
        }
        if top < begin || top > end {
            return Err(ContainerError::TopOutOfWindow { top, begin, end });
        }
        Ok(Self { begin, end, top })
    }

    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn top(&self) -> usize {
        self.top
    }

    /// Number of slots the stack may use (`end - begin`)
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.begin
    }

    /// Number of stack-active slots (`top - begin`)
    #[inline]
    pub fn depth(&self) -> usize {
        self.top - self.begin
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == self.begin
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.top == self.end
    }

    /// Indices of the stack-active slots, bottom first
    pub fn active(&self) -> std::ops::Range<usize> {
        self.begin..self.top
    }

    pub(crate) fn advance(&mut self) {
        debug_assert!(self.top < self.end);
        self.top += 1;
    }

    pub(crate) fn retreat(&mut self) {
        debug_assert!(self.top > self.begin);
        self.top -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_store_and_take() {
        let mut slot = Slot::empty();
        assert!(!slot.is_present());
        assert_eq!(slot.store(Value::Decimal(1)), None);
        assert_eq!(slot.store(Value::Decimal(2)), Some(Value::Decimal(1)));
        assert_eq!(slot.value(), Some(&Value::Decimal(2)));
        assert_eq!(slot.take(), Some(Value::Decimal(2)));
        assert!(!slot.is_present());
    }

    #[test]
    fn test_full_window() {
        let w = StackWindow::full(5);
        assert_eq!((w.begin(), w.top(), w.end()), (0, 0, 5));
        assert_eq!(w.width(), 5);
        assert_eq!(w.depth(), 0);
        assert!(w.is_empty());
        assert!(!w.is_full());
    }

    #[test]
    fn test_window_validation_order() {
        // end too wide wins even when begin > end as well
        assert_eq!(
            StackWindow::new(0, 9, 6, 5),
            Err(ContainerError::WindowTooWide { end: 6, capacity: 5 })
        );
        assert_eq!(
            StackWindow::new(3, 4, 2, 5),
            Err(ContainerError::InvertedWindow { begin: 4, end: 2 })
        );
        assert_eq!(
            StackWindow::new(1, 2, 4, 5),
            Err(ContainerError::TopOutOfWindow {
                top: 1,
                begin: 2,
                end: 4
            })
        );
        assert_eq!(
            StackWindow::new(5, 2, 4, 5),
            Err(ContainerError::TopOutOfWindow {
                top: 5,
                begin: 2,
                end: 4
            })
        );
    }

    #[test]
    fn test_every_valid_triple_accepted() {
        let capacity = 4;
        for end in 0..=capacity {
            for begin in 0..=end {
                for top in begin..=end {
                    let w = StackWindow::new(top, begin, end, capacity).unwrap();
                    assert_eq!(w.depth(), top - begin);
                    assert_eq!(w.width(), end - begin);
                }
            }
        }
    }

    #[test]
    fn test_empty_window_is_full_and_empty() {
        let w = StackWindow::new(2, 2, 2, 4).unwrap();
        assert!(w.is_empty());
        assert!(w.is_full());
        assert_eq!(w.active(), 2..2);
    }
}
