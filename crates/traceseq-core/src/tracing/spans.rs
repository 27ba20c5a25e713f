//! Span definitions per command: annotate, explain, diff, validate.

/// Create an annotate span.
#[macro_export]
macro_rules! annotate_span {
    ($path:expr, $op_class:expr) => {
        tracing::info_span!("traceseq.annotate", path = %$path, op_class = %$op_class)
    };
}

/// Create an explain span.
#[macro_export]
macro_rules! explain_span {
    ($path:expr) => {
        tracing::info_span!("traceseq.explain", path = %$path)
    };
}

/// Create a diff span.
#[macro_export]
macro_rules! diff_span {
    ($left:expr, $right:expr) => {
        tracing::info_span!("traceseq.diff", left = %$left, right = %$right)
    };
}

/// Create a validate span.
#[macro_export]
macro_rules! validate_span {
    ($path:expr) => {
        tracing::info_span!("traceseq.validate", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANNOTATE: &str = "traceseq.annotate";
    pub const EXPLAIN: &str = "traceseq.explain";
    pub const DIFF: &str = "traceseq.diff";
    pub const VALIDATE: &str = "traceseq.validate";
}
