//! # traceseq-lineage
//!
//! Reconstructs the ancestry of a trace node and compares two ancestries.
//!
//! A lineage is a strictly linear chain: every node has at most one parent,
//! and parents always exist before their children, so walking `parent`
//! links from any node ends at a root.

pub mod diff;
pub mod resolver;
pub mod source;

pub use diff::{diff, diff_lineages, FieldDiff, LineageDiff, StepDiff, Trailing};
pub use resolver::{resolve, Lineage};
pub use source::{NodeArena, NodeSource};
