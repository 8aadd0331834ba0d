//! Constants for the Growdash display engine
//!
//! Centralized limits and defaults used across the engine. Use these instead
//! of magic numbers; names include units where one applies.

/// Maximum points retained per rolling chart series.
///
/// Matches the depth of history the backend keeps per sensor; older points
/// are evicted FIFO once the window is full.
pub const DISPLAY_WINDOW: usize = 20;

/// Maximum rows shown in the alert table.
///
/// The view is a bounded slice of whatever list the backend returned this
/// cycle, not a client-side accumulator.
pub const ALERT_VIEW_ROWS: usize = 10;

/// Default polling cadence in milliseconds.
///
/// Human-scale refresh; also serves as the only retry mechanism (a failed
/// cycle is simply retried at the next tick).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

/// Default HTTP request timeout in seconds.
///
/// The upstream endpoints enforce no deadline of their own, so the client
/// must bound every fetch or a stalled request would pile up behind the
/// polling cadence.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Placeholder shown when a sensor's current level is absent from a snapshot.
pub const LEVEL_PLACEHOLDER: &str = "N/A";

/// Chart label format for wall-clock timestamps.
pub const LABEL_FORMAT: &str = "%H:%M:%S";
