//! Structural comparison of containers
//!
//! Two independent comparators, one per view:
//!
//! - **Array mode** looks at every slot of the buffer. Kind and capacity
//!   must match; then, index by index, both-absent is fine, one-absent is a
//!   difference, and both-present compares the values structurally.
//! - **Stack mode** looks only at the active regions. Kind, window width and
//!   stack depth must match; then the active slots compare pairwise from the
//!   bottom. Windows may sit at different offsets in the two buffers.
//!
//! Both report *where* the containers first diverge rather than a bare bool,
//! so callers can tell a kind mismatch from a capacity mismatch from a single
//! differing element.

use crate::container::TaggedSlotContainer;
use crate::kind::Kind;
use std::fmt;

/// First difference found by the array-mode comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayDivergence {
    Kind { left: Kind, right: Kind },
    Capacity { left: usize, right: usize },
    /// Present on one side only
    Presence(usize),
    /// Present on both sides with unequal values
    Element(usize),
}

/// First difference found by the stack-mode comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDivergence {
    Kind { left: Kind, right: Kind },
    Width { left: usize, right: usize },
    Depth { left: usize, right: usize },
    /// Offset from `begin` of the first unequal pair
    Element(usize),
}

impl fmt::Display for ArrayDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayDivergence::Kind { left, right } => write!(f, "kind {} vs {}", left, right),
            ArrayDivergence::Capacity { left, right } => {
                write!(f, "capacity {} vs {}", left, right)
            }
            ArrayDivergence::Presence(index) => write!(f, "presence differs at index {}", index),
            ArrayDivergence::Element(index) => write!(f, "elements differ at index {}", index),
        }
    }
}

impl fmt::Display for StackDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackDivergence::Kind { left, right } => write!(f, "kind {} vs {}", left, right),
            StackDivergence::Width { left, right } => {
                write!(f, "window width {} vs {}", left, right)
            }
            StackDivergence::Depth { left, right } => {
                write!(f, "stack depth {} vs {}", left, right)
            }
            StackDivergence::Element(offset) => {
                write!(f, "elements differ at stack offset {}", offset)
            }
        }
    }
}

impl TaggedSlotContainer {
    /// Array-mode comparison; `Ok(())` when structurally equal
    pub fn compare_array(&self, other: &Self) -> Result<(), ArrayDivergence> {
        if self.kind() != other.kind() {
            return Err(ArrayDivergence::Kind {
                left: self.kind(),
                right: other.kind(),
            });
        }
        if self.capacity() != other.capacity() {
            return Err(ArrayDivergence::Capacity {
                left: self.capacity(),
                right: other.capacity(),
            });
        }
        for (index, (x, y)) in self.slots.iter().zip(other.slots.iter()).enumerate() {
            match (x.value(), y.value()) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if a != b {
                        return Err(ArrayDivergence::Element(index));
                    }
                }
                _ => return Err(ArrayDivergence::Presence(index)),
            }
        }
        Ok(())
    }

    pub fn array_eq(&self, other: &Self) -> bool {
        self.compare_array(other).is_ok()
    }

    /// Stack-mode comparison; `Ok(())` when the active regions are equal.
    ///
    /// An absent slot inside an active region equals only another absent slot.
    pub fn compare_stack(&self, other: &Self) -> Result<(), StackDivergence> {
        if self.kind() != other.kind() {
            return Err(StackDivergence::Kind {
                left: self.kind(),
                right: other.kind(),
            });
        }
        let (wx, wy) = (self.window(), other.window());
        if wx.width() != wy.width() {
            return Err(StackDivergence::Width {
                left: wx.width(),
                right: wy.width(),
            });
        }
        if wx.depth() != wy.depth() {
            return Err(StackDivergence::Depth {
                left: wx.depth(),
                right: wy.depth(),
            });
        }
        for (offset, (a, b)) in self.stack_values().zip(other.stack_values()).enumerate() {
            if a != b {
                return Err(StackDivergence::Element(offset));
            }
        }
        Ok(())
    }

    pub fn stack_eq(&self, other: &Self) -> bool {
        self.compare_stack(other).is_ok()
    }
}
