//! Container Error Handling
//!
//! Every fallible container operation returns a [`ContainerError`] to the
//! immediate caller. Nothing is printed and nothing is retried; an operation
//! that fails leaves the container exactly as it was.
//!
//! # Usage
//!
//! ```
//! use slotstack_core::{ContainerError, Kind, TaggedSlotContainer, Value};
//!
//! let mut c = TaggedSlotContainer::new(2, Kind::Decimal);
//! match c.set(5, Value::Decimal(1)) {
//!     Err(ContainerError::IndexOutOfRange { index, capacity }) => {
//!         assert_eq!((index, capacity), (5, 2));
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use crate::kind::Kind;

/// Error raised by a container, collaborator, or kind conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Kind tag or name outside the eight supported kinds
    UnsupportedKind(String),
    /// Indexed access at or beyond capacity
    IndexOutOfRange { index: usize, capacity: usize },
    /// Push with `top == end`
    StackOverflow { end: usize },
    /// Pop with `top == begin`
    StackUnderflow { begin: usize },
    /// Window end beyond capacity
    WindowTooWide { end: usize, capacity: usize },
    /// Window begin after window end
    InvertedWindow { begin: usize, end: usize },
    /// Top cursor outside `[begin, end]`
    TopOutOfWindow { top: usize, begin: usize, end: usize },
    /// Value kind disagrees with the declared kind
    KindMismatch { expected: Kind, found: Kind },
    /// Stack cursor landed on a slot with no value
    AbsentSlot(usize),
    /// Value of this kind cannot key a tree or hash table
    UnsupportedKey(Kind),
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerError::UnsupportedKind(kind) => write!(f, "type not supported: {}", kind),
            ContainerError::IndexOutOfRange { index, capacity } => {
                write!(f, "index {} out of range for capacity {}", index, capacity)
            }
            ContainerError::StackOverflow { end } => {
                write!(f, "stack overflow: window end {} reached", end)
            }
            ContainerError::StackUnderflow { begin } => {
                write!(f, "stack underflow: window begin {} reached", begin)
            }
            ContainerError::WindowTooWide { end, capacity } => {
                write!(f, "window end {} exceeds capacity {}", end, capacity)
            }
            ContainerError::InvertedWindow { begin, end } => {
                write!(f, "window begin {} is after end {}", begin, end)
            }
            ContainerError::TopOutOfWindow { top, begin, end } => {
                write!(f, "top {} outside window [{}, {}]", top, begin, end)
            }
            ContainerError::KindMismatch { expected, found } => {
                write!(f, "kind mismatch: expected {}, found {}", expected, found)
            }
            ContainerError::AbsentSlot(index) => write!(f, "slot {} holds no value", index),
            ContainerError::UnsupportedKey(kind) => {
                write!(f, "{} values cannot be used as keys", kind)
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Shorthand for results produced by this crate
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Fail with `KindMismatch` unless `found` is `expected`
pub(crate) fn expect_kind(expected: Kind, found: Kind) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ContainerError::KindMismatch { expected, found })
    }
}
