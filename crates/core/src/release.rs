//! Per-thread release ledger
//!
//! Counts every value released through an explicit release path, by kind.
//! Tests use it to check that a deep-free walks each reachable composite
//! exactly once and that consumed probes are released exactly once.
//!
//! # Design
//!
//! Containers are single-owner values that never cross threads mid-operation,
//! so the ledger is a thread-local array of counters rather than a shared
//! registry. Recording is a single `Cell` update.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        LEDGER (thread-local, per thread)     │
//! ├──────────────────────────────────────────────┤
//! │ counts: [u64; 8]   indexed by Kind::tag()    │
//! │  decimal real string list tree hashtab ...   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Dropping a value without going through `release` still frees its memory;
//! it is just not counted.

use crate::kind::Kind;
use std::cell::Cell;

/// Snapshot of the release counters for the current thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseStats {
    counts: [u64; 8],
}

impl ReleaseStats {
    const fn new() -> Self {
        Self { counts: [0; 8] }
    }

    /// Number of released values of `kind`
    pub fn count(&self, kind: Kind) -> u64 {
        self.counts[kind.tag() as usize]
    }

    /// Number of released values across all kinds
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of released composite values
    pub fn composites(&self) -> u64 {
        Kind::ALL
            .into_iter()
            .filter(|kind| kind.is_composite())
            .map(|kind| self.count(kind))
            .sum()
    }
}

thread_local! {
    static LEDGER: Cell<ReleaseStats> = const { Cell::new(ReleaseStats::new()) };
}

/// Record one release of a value of `kind`
#[inline]
pub(crate) fn record_release(kind: Kind) {
    LEDGER.with(|cell| {
        let mut stats = cell.get();
        stats.counts[kind.tag() as usize] += 1;
        cell.set(stats);
    });
}

/// Get the current thread's release counters
pub fn release_stats() -> ReleaseStats {
    LEDGER.with(|cell| cell.get())
}

/// Reset the current thread's release counters to zero
pub fn reset_release_stats() {
    LEDGER.with(|cell| cell.set(ReleaseStats::new()));
}
