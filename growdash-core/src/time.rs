//! Time source abstraction for the polling engine
//!
//! Chart points are stamped client-side at merge time, so the engine needs a
//! clock it can also hold still in tests:
//! - [`SystemClock`] for real deployments (local wall-clock labels)
//! - [`FixedClock`] for deterministic tests

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};

use crate::constants::LABEL_FORMAT;
use crate::series::TimeLabel;

/// Timestamp in milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Source of time for merge stamping.
pub trait Clock: Send + Sync {
    /// Current timestamp in milliseconds.
    fn now(&self) -> Timestamp;

    /// Chart label for a point stamped now.
    fn label(&self) -> TimeLabel;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().timestamp_millis().max(0) as Timestamp
    }

    fn label(&self) -> TimeLabel {
        let text = Local::now().format(LABEL_FORMAT).to_string();
        TimeLabel::new(&text).unwrap_or_default()
    }
}

/// Fixed time source for testing.
///
/// Holds a settable timestamp; labels are formatted from it in UTC so tests
/// are independent of the host timezone.
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: AtomicU64,
}

impl FixedClock {
    /// Clock pinned at the given timestamp.
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            now_ms: AtomicU64::new(timestamp),
        }
    }

    /// Pin the clock to a new timestamp.
    pub fn set(&self, timestamp: Timestamp) {
        self.now_ms.store(timestamp, Ordering::Relaxed);
    }

    /// Advance the clock by some milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now_ms.load(Ordering::Relaxed)
    }

    fn label(&self) -> TimeLabel {
        let text = DateTime::from_timestamp_millis(self.now() as i64)
            .map(|dt| dt.format(LABEL_FORMAT).to_string())
            .unwrap_or_default();
        TimeLabel::new(&text).unwrap_or_default()
    }
}
