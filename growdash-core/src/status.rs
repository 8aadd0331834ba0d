//! Per-Sensor Status Views
//!
//! A [`StatusView`] is the display triple behind one status indicator: the
//! backend's label verbatim, the styling class derived from it, and the
//! formatted current level. Views are recomputed statelessly from each
//! successful snapshot; a failed cycle leaves the previously rendered view
//! untouched, so the indicator freezes at its last good value rather than
//! clearing.

use crate::constants::LEVEL_PLACEHOLDER;
use crate::snapshot::{SensorKind, Snapshot};

/// Display data for one sensor's status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Status label exactly as the backend sent it, e.g. "Online".
    pub status: String,
    /// Styling class token derived from the label, e.g. "online".
    pub class: String,
    /// Formatted current level, or the placeholder when absent.
    pub level: String,
}

impl Default for StatusView {
    fn default() -> Self {
        Self {
            status: String::new(),
            class: String::new(),
            level: LEVEL_PLACEHOLDER.to_owned(),
        }
    }
}

impl StatusView {
    /// Recompute one sensor's view from a snapshot.
    pub fn from_snapshot(kind: SensorKind, snapshot: &Snapshot) -> Self {
        let status = snapshot.status(kind);
        Self {
            status: status.to_owned(),
            class: style_class(status),
            level: format_level(kind, snapshot.current(kind)),
        }
    }
}

/// Styling class for a status label.
///
/// Pure function of the label: case-insensitive normalization, never a
/// separate backend field ("Online" and "ONLINE" both style as "online").
pub fn style_class(label: &str) -> String {
    label.to_lowercase()
}

/// Format a sensor's current level for display.
///
/// An absent or null raw level always yields the fixed placeholder, never an
/// empty or stale string.
pub fn format_level(kind: SensorKind, raw: Option<f32>) -> String {
    let Some(value) = raw else {
        return LEVEL_PLACEHOLDER.to_owned();
    };

    match kind {
        SensorKind::Soil => format!("{}%", value.round() as i64),
        SensorKind::Temperature => format!("{value:.1}°C"),
        SensorKind::Light => light_band(value).to_owned(),
    }
}

/// User-friendly light condition for a lux value.
fn light_band(lux: f32) -> &'static str {
    if lux > 50_000.0 {
        "Full Sun"
    } else if lux > 10_000.0 {
        "Bright"
    } else if lux > 2_000.0 {
        "Good"
    } else if lux > 500.0 {
        "Dim"
    } else {
        "Dark"
    }
}
