//! Capability set of composite element kinds
//!
//! A container never looks inside a List, Tree, HashTab, BigInt or nested
//! container. It only asks each one to print itself, compare itself with a
//! value of the same type, and release everything it owns. Nesting falls out
//! of composition: a List of containers of Trees prints, compares and frees
//! by each layer calling the layer below.

use crate::kind::Kind;

/// Print / structural-equals / deep-free
pub trait Composite: Sized {
    /// Kind tag this composite is stored under
    const KIND: Kind;

    /// Append the textual rendering to `out`
    fn render(&self, out: &mut String);

    /// Element-wise equality, recursing through nested composites
    fn structural_eq(&self, other: &Self) -> bool;

    /// Release every owned value (post-order), then record this composite
    fn deep_free(self);

    /// Rendering as an owned string
    fn to_rendered(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}
