//! Element kinds
//!
//! A container declares one [`Kind`] at construction and keeps it for its
//! whole lifetime. The set is closed: adding a kind means touching every
//! `match` on it, which the compiler enforces.
//!
//! Kind tags follow declaration order:
//!
//! ```text
//! 0 decimal    i32
//! 1 real       f64
//! 2 string     owned bytes
//! 3 list       List
//! 4 tree       Tree
//! 5 hashtab    HashTab
//! 6 container  TaggedSlotContainer (nested)
//! 7 bigint     BigInt
//! ```

use crate::error::ContainerError;
use std::fmt;
use std::str::FromStr;

/// Declared element kind of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Decimal,
    Real,
    String,
    List,
    Tree,
    HashTab,
    Container,
    BigInt,
}

impl Kind {
    /// Every supported kind, in tag order
    pub const ALL: [Kind; 8] = [
        Kind::Decimal,
        Kind::Real,
        Kind::String,
        Kind::List,
        Kind::Tree,
        Kind::HashTab,
        Kind::Container,
        Kind::BigInt,
    ];

    /// Numeric tag of this kind
    pub fn tag(self) -> u8 {
        match self {
            Kind::Decimal => 0,
            Kind::Real => 1,
            Kind::String => 2,
            Kind::List => 3,
            Kind::Tree => 4,
            Kind::HashTab => 5,
            Kind::Container => 6,
            Kind::BigInt => 7,
        }
    }

    /// Resolve a numeric tag, failing with `UnsupportedKind` for unknown tags
    pub fn from_tag(tag: u8) -> Result<Kind, ContainerError> {
        Kind::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| ContainerError::UnsupportedKind(format!("tag {}", tag)))
    }

    /// Lowercase name used in rendering, errors and scenario files
    pub fn name(self) -> &'static str {
        match self {
            Kind::Decimal => "decimal",
            Kind::Real => "real",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Tree => "tree",
            Kind::HashTab => "hashtab",
            Kind::Container => "container",
            Kind::BigInt => "bigint",
        }
    }

    /// Composite kinds delegate print/compare/free to a collaborator
    pub fn is_composite(self) -> bool {
        match self {
            Kind::Decimal | Kind::Real | Kind::String => false,
            Kind::List | Kind::Tree | Kind::HashTab | Kind::Container | Kind::BigInt => true,
        }
    }

    /// Whether a stored element owns resources a deep-free must release.
    ///
    /// Scalars live inline. Strings are owned by the container, so they are
    /// released along with the composites.
    pub fn owns_resources(self) -> bool {
        match self {
            Kind::Decimal | Kind::Real => false,
            Kind::String => true,
            other => other.is_composite(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ContainerError::UnsupportedKind(s.to_string()))
    }
}
