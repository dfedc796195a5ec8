//! Slotstack CLI library
//!
//! Scenario files and the built-in demos, shared by the `slotstack` binary
//! and its integration tests.

pub mod demo;
pub mod scenario;

pub use scenario::{Literal, Scenario, ScenarioError, Step, WindowSpec};
