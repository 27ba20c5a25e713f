//! Observability for traceseq.
//! `tracing` crate with `EnvFilter`, per-command spans.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_filter};
