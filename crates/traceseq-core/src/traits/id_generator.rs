//! Unique identifier source for new trace nodes.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::types::TraceId;

pub trait IdGenerator: Send + Sync {
    /// A fresh, collision-improbable identifier.
    fn generate(&self) -> TraceId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> TraceId {
        TraceId::new(Uuid::new_v4().to_string())
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... Deterministic ids for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> TraceId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        TraceId::new(format!("{}-{n}", self.prefix))
    }
}
