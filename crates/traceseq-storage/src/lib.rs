//! # traceseq-storage
//!
//! File-backed persistence for provenance records.
//!
//! ```text
//! <root>/.traceseq/index.json            checksum -> trace id
//! <root>/.traceseq/nodes/<trace_id>.yaml one record per trace node
//! <root>/.traceseq/.lock                 advisory lock for index updates
//! ```
//!
//! Every document is written whole, via a temporary sibling and a rename.
//! The node record and the index update are two separate writes; a crash
//! between them leaves one without the other and nothing here repairs it.

pub mod atomic;
pub mod index;
pub mod layout;
pub mod lock;
pub mod nodes;

pub use index::ChecksumIndex;
pub use layout::ProjectLayout;
pub use nodes::NodeStore;
