//! Timestamp source for new trace nodes.

use chrono::Utc;

use crate::constants::TIMESTAMP_FORMAT;

pub trait Clock: Send + Sync {
    /// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
    fn now_timestamp(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_timestamp(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same timestamp. Used for reproducible records in tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_timestamp(&self) -> String {
        self.0.clone()
    }
}
