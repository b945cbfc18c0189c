//! Layout computation for registered types
//!
//! This module provides the core layout machinery:
//! - [`calc`]: size/alignment derivation (sum-of-parts, first-field align,
//!   union max/lcm rules)
//! - [`resolve`]: recursive flattening of struct fields into placeable leaves
//! - [`bytes`]: the byte-occupancy array and the [`LayoutReport`] every
//!   strategy returns
//! - [`unpacked`], [`packed`], [`heuristic`]: the three placement strategies
//!
//! # Strategies
//!
//! All three are pure functions of the registry and the target type; none is
//! stateful across calls and none can fail - every error condition is
//! detected earlier, at registry insertion or console validation. The word
//! size used by the diagram renderer never reaches placement decisions.

pub mod bytes;
pub mod calc;
pub mod heuristic;
pub mod packed;
pub mod resolve;
pub mod unpacked;

use std::fmt;

pub use bytes::LayoutReport;
pub use heuristic::layout_heuristic;
pub use packed::layout_packed;
pub use unpacked::layout_unpacked;

/// The three placement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Natural alignment with padding.
    Unpacked,
    /// No padding at all.
    Packed,
    /// Alignment-descending reorder with best-fit backfill.
    Heuristic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Unpacked => write!(f, "unpacked"),
            Strategy::Packed => write!(f, "packed"),
            Strategy::Heuristic => write!(f, "heuristic"),
        }
    }
}
