//! TaggedSlotContainer: stack view
//!
//! Push and pop work over the `[begin, end)` window of the same slots the
//! array view uses.
//!
//! # Stack-active vs present
//!
//! A slot is *stack-active* when `begin <= index < top` and *present* when it
//! holds a value. Push makes a slot both. Pop only moves `top`: the value
//! stays in its slot, still visible to `get`, `contains` and array printing.
//! A later push over that slot releases it like any other replacement.
//!
//! ```
//! use slotstack_core::{Kind, TaggedSlotContainer, Value};
//!
//! let mut c = TaggedSlotContainer::new(3, Kind::Decimal);
//! c.push(Value::Decimal(1)).unwrap();
//! c.push(Value::Decimal(2)).unwrap();
//! assert_eq!(c.pop().unwrap(), &Value::Decimal(2));
//! assert_eq!(c.stack_size(), 1);
//! // still present after the pop
//! assert_eq!(c.get(1).unwrap(), Some(&Value::Decimal(2)));
//! assert_eq!(c.render_stack(), "#S[ 1 ]");
//! ```

use crate::container::TaggedSlotContainer;
use crate::error::{ContainerError, Result};
use crate::render::ABSENT;
use crate::slot::StackWindow;
use crate::value::Value;
use tracing::debug;

impl TaggedSlotContainer {
    /// Replace the stack window.
    ///
    /// Fails with `WindowTooWide`, `InvertedWindow` or `TopOutOfWindow`
    /// (checked in that order) and leaves the window untouched on failure.
    /// Slot contents are never touched.
    pub fn configure_window(&mut self, top: usize, begin: usize, end: usize) -> Result<()> {
        let window = StackWindow::new(top, begin, end, self.capacity())
            .inspect_err(|e| debug!(%e, "window rejected"))?;
        debug!(top, begin, end, "window configured");
        self.window = window;
        Ok(())
    }

    /// Store `value` at `top` and advance it
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.check_kind(&value)?;
        if self.window.is_full() {
            let err = ContainerError::StackOverflow {
                end: self.window.end(),
            };
            debug!(%err, "push rejected");
            return Err(err);
        }
        let index = self.window.top();
        self.store(index, value);
        self.window.advance();
        Ok(())
    }

    /// Move `top` down one slot and return the value found there.
    ///
    /// The slot keeps its value and stays present. If something left the
    /// slot absent (a delete, or a window laid over empty slots) the pop is
    /// rejected with `AbsentSlot` and `top` stays where it was.
    pub fn pop(&mut self) -> Result<&Value> {
        if self.window.is_empty() {
            let err = ContainerError::StackUnderflow {
                begin: self.window.begin(),
            };
            debug!(%err, "pop rejected");
            return Err(err);
        }
        let index = self.window.top() - 1;
        if !self.slots[index].is_present() {
            let err = ContainerError::AbsentSlot(index);
            debug!(%err, "pop rejected");
            return Err(err);
        }
        self.window.retreat();
        self.slots[index]
            .value()
            .ok_or(ContainerError::AbsentSlot(index))
    }

    /// Value just below `top`, without moving it
    pub fn peek(&self) -> Option<&Value> {
        if self.window.is_empty() {
            return None;
        }
        self.slots[self.window.top() - 1].value()
    }

    /// `top - begin`
    #[inline]
    pub fn stack_size(&self) -> usize {
        self.window.depth()
    }

    #[inline]
    pub fn is_stack_empty(&self) -> bool {
        self.window.is_empty()
    }

    #[inline]
    pub fn is_stack_full(&self) -> bool {
        self.window.is_full()
    }

    /// Stack-active slots, bottom first
    pub fn stack_values(&self) -> impl Iterator<Item = Option<&Value>> {
        self.slots[self.window.active()].iter().map(|slot| slot.value())
    }

    /// Stack-mode rendering: `#S[ v1 v2 ... ]`, bottom first
    pub fn render_stack(&self) -> String {
        let mut out = String::from("#S[ ");
        for value in self.stack_values() {
            match value {
                Some(value) => value.render(&mut out),
                None => out.push_str(ABSENT),
            }
            out.push(' ');
        }
        out.push(']');
        out
    }

    pub fn print_stack(&self) {
        print!("{}", self.render_stack());
    }

    pub fn println_stack(&self) {
        println!("{}", self.render_stack());
    }
}

#[cfg(test)]
mod tests {
    use crate::composite::Composite;
    use crate::container::TaggedSlotContainer;
    use crate::error::ContainerError;
    use crate::kind::Kind;
    use crate::list::List;
    use crate::release::{release_stats, reset_release_stats};
    use crate::value::Value;

    #[test]
    fn test_push_pop_reverse_order() {
        let mut c = TaggedSlotContainer::new(4, Kind::Decimal);
        for n in 1..=4 {
            c.push(Value::Decimal(n)).unwrap();
        }
        assert!(c.is_stack_full());
        for n in (1..=4).rev() {
            assert_eq!(c.pop().unwrap(), &Value::Decimal(n));
        }
        assert!(c.is_stack_empty());
        assert_eq!(c.window().top(), 0);
    }

    #[test]
    fn test_overflow_and_underflow() {
        let mut c = TaggedSlotContainer::new(1, Kind::Decimal);
        assert_eq!(c.pop(), Err(ContainerError::StackUnderflow { begin: 0 }));
        c.push(Value::Decimal(1)).unwrap();
        assert_eq!(
            c.push(Value::Decimal(2)),
            Err(ContainerError::StackOverflow { end: 1 })
        );
        // failed push left the slot alone
        assert_eq!(c.get(0).unwrap(), Some(&Value::Decimal(1)));
    }

    #[test]
    fn test_push_checks_kind_before_overflow() {
        let mut c = TaggedSlotContainer::new(0, Kind::Decimal);
        assert!(matches!(
            c.push(Value::Real(1.0)),
            Err(ContainerError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_pop_keeps_presence() {
        let mut c = TaggedSlotContainer::new(2, Kind::String);
        c.push(Value::from("kept")).unwrap();
        reset_release_stats();
        c.pop().unwrap();
        assert!(c.is_present(0).unwrap());
        assert_eq!(c.get(0).unwrap(), Some(&Value::from("kept")));
        assert_eq!(release_stats().total(), 0);
        assert_eq!(c.render_stack(), "#S[ ]");
        assert_eq!(c.render_array(), "#A[ (0 :: 'kept') ]");
    }

    #[test]
    fn test_push_over_popped_slot_releases_it() {
        let mut c = TaggedSlotContainer::new(2, Kind::List);
        c.push(Value::from(List::new(Kind::Decimal))).unwrap();
        c.pop().unwrap();

        reset_release_stats();
        c.push(Value::from(List::new(Kind::Real))).unwrap();
        assert_eq!(release_stats().count(Kind::List), 1);
    }

    #[test]
    fn test_window_subrange() {
        let mut c = TaggedSlotContainer::new(6, Kind::Decimal);
        c.configure_window(2, 2, 4).unwrap();
        c.push(Value::Decimal(10)).unwrap();
        c.push(Value::Decimal(11)).unwrap();
        assert!(matches!(
            c.push(Value::Decimal(12)),
            Err(ContainerError::StackOverflow { end: 4 })
        ));
        assert_eq!(c.get(2).unwrap(), Some(&Value::Decimal(10)));
        assert_eq!(c.get(3).unwrap(), Some(&Value::Decimal(11)));
        assert_eq!(c.stack_size(), 2);
        assert_eq!(c.render_stack(), "#S[ 10 11 ]");
    }

    #[test]
    fn test_configure_window_failure_keeps_window() {
        let mut c = TaggedSlotContainer::new(4, Kind::Decimal);
        c.push(Value::Decimal(1)).unwrap();
        let before = c.window();
        assert!(matches!(
            c.configure_window(0, 0, 5),
            Err(ContainerError::WindowTooWide { .. })
        ));
        assert!(matches!(
            c.configure_window(0, 3, 1),
            Err(ContainerError::InvertedWindow { .. })
        ));
        assert!(matches!(
            c.configure_window(0, 1, 3),
            Err(ContainerError::TopOutOfWindow { .. })
        ));
        assert_eq!(c.window(), before);
    }

    #[test]
    fn test_window_over_absent_slots() {
        let mut c = TaggedSlotContainer::new(3, Kind::Decimal);
        c.set(0, Value::Decimal(5)).unwrap();
        c.configure_window(2, 0, 3).unwrap();
        assert_eq!(c.render_stack(), "#S[ 5 _ ]");
        let before = c.window();
        assert_eq!(c.pop(), Err(ContainerError::AbsentSlot(1)));
        // rejected pop leaves the cursor alone
        assert_eq!(c.window(), before);
        assert_eq!(c.stack_size(), 2);
        assert_eq!(c.render_stack(), "#S[ 5 _ ]");

        c.set(1, Value::Decimal(6)).unwrap();
        assert_eq!(c.pop().unwrap(), &Value::Decimal(6));
        assert_eq!(c.pop().unwrap(), &Value::Decimal(5));
        assert!(c.is_stack_empty());
    }

    #[test]
    fn test_pop_after_delete_inside_stack() {
        let mut c = TaggedSlotContainer::new(3, Kind::String);
        c.push(Value::from("a")).unwrap();
        c.push(Value::from("b")).unwrap();
        c.delete(1).unwrap();
        assert_eq!(c.pop(), Err(ContainerError::AbsentSlot(1)));
        assert_eq!(c.stack_size(), 2);
        assert_eq!(c.peek(), None);
    }

    #[test]
    fn test_peek() {
        let mut c = TaggedSlotContainer::new(2, Kind::Real);
        assert_eq!(c.peek(), None);
        c.push(Value::Real(0.5)).unwrap();
        assert_eq!(c.peek(), Some(&Value::Real(0.5)));
        assert_eq!(c.stack_size(), 1);
    }

    #[test]
    fn test_deep_free_after_pop_still_releases() {
        let mut c = TaggedSlotContainer::new(2, Kind::List);
        c.push(Value::from(List::new(Kind::Decimal))).unwrap();
        c.push(Value::from(List::new(Kind::Decimal))).unwrap();
        c.pop().unwrap();

        reset_release_stats();
        c.deep_free();
        assert_eq!(release_stats().count(Kind::List), 2);
    }
}
