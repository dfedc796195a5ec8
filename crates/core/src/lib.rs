//! Slotstack Core: one fixed buffer, two views
//!
//! A [`TaggedSlotContainer`] owns a fixed number of slots holding values of a
//! single declared [`Kind`], and exposes them two ways at once:
//!
//! - Array: `get`/`set`/`delete`/`contains` by index, each slot present or absent
//! - Stack: `push`/`pop` over a reconfigurable `[begin, end)` window of the
//!   same slots, with a `top` cursor
//!
//! Key design principles:
//! - Value: closed sum over the eight kinds, exhaustively matched everywhere
//! - Slot: presence is the slot itself; the stack is only a cursor over slots
//! - Composite: nested lists, trees, tables, big integers and containers are
//!   printed, compared and freed through their own capabilities
//!
//! # Modules
//!
//! - `error`: `ContainerError` and the crate `Result`
//! - `kind`: the eight element kinds and their tags
//! - `value`: `Value` and the `SlotKey` subset used by trees and tables
//! - `slot`: slot cells and the validated `StackWindow`
//! - `container`: construction, indexed access, containment, deep-free
//! - `stack`: window configuration, push/pop, stack rendering
//! - `compare`: array-mode and stack-mode structural comparison
//! - `composite`: the print / structural-equals / deep-free capability trait
//! - `list`, `tree`, `hashtab`, `bigint`: composite collaborators
//! - `release`: per-thread release ledger
//! - `render`: element notation shared by all printers

pub mod bigint;
pub mod compare;
pub mod composite;
pub mod container;
pub mod error;
pub mod hashtab;
pub mod kind;
pub mod list;
pub mod release;
mod render;
pub mod slot;
mod stack;
pub mod tree;
pub mod value;

// Re-export key types and functions
pub use bigint::BigInt;
pub use compare::{ArrayDivergence, StackDivergence};
pub use composite::Composite;
pub use container::TaggedSlotContainer;
pub use error::{ContainerError, Result};
pub use hashtab::HashTab;
pub use kind::Kind;
pub use list::List;
pub use release::{ReleaseStats, release_stats, reset_release_stats};
pub use slot::{Slot, StackWindow};
pub use tree::Tree;
pub use value::{SlotKey, Value};
