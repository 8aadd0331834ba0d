//! Process-Wide Display State
//!
//! ## Overview
//!
//! [`DisplayState`] is the single mutable object behind the dashboard: three
//! rolling chart series, three status views, and the current alert view. It
//! lives for the lifetime of the page session, is owned by the composition
//! root, and is handed to each polling pipeline by reference, never held as
//! module-level globals.
//!
//! ## Mutation discipline
//!
//! The two pipelines own disjoint fields:
//!
//! - the readings merge writes the sensor panels (series + status views),
//! - the alerts merge writes the alert view.
//!
//! Neither reads the other's fields, so the pipelines cannot corrupt each
//! other even when their cycles interleave.
//!
//! ## Atomicity
//!
//! [`apply_snapshot`] runs only after a payload has fully decoded and is
//! itself infallible, so a cycle either appends one point to every series or
//! touches none of them. [`apply_alerts`] replaces the whole view in one
//! assignment. Both merges are pure state computation; rendering happens in a
//! separate stage from a `&DisplayState`.
//!
//! [`apply_snapshot`]: DisplayState::apply_snapshot
//! [`apply_alerts`]: DisplayState::apply_alerts

use std::sync::{Arc, Mutex};

use crate::constants::{ALERT_VIEW_ROWS, DISPLAY_WINDOW};
use crate::series::{RollingSeries, SeriesPoint, TimeLabel};
use crate::snapshot::{Alert, SensorKind, Snapshot};
use crate::status::StatusView;

/// Rolling series sized to the dashboard's display window.
pub type ChartSeries = RollingSeries<DISPLAY_WINDOW>;

/// Display state shared between the polling pipelines and the render step.
pub type SharedDisplayState = Arc<Mutex<DisplayState>>;

/// Chart series plus status view for one sensor.
#[derive(Debug, Clone, Default)]
struct SensorPanel {
    series: ChartSeries,
    status: StatusView,
}

/// All state the dashboard renders from.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    soil: SensorPanel,
    temperature: SensorPanel,
    light: SensorPanel,
    alerts: Vec<Alert>,
}

impl DisplayState {
    /// Fresh state wrapped for sharing across pipeline tasks.
    pub fn shared() -> SharedDisplayState {
        Arc::new(Mutex::new(DisplayState::default()))
    }

    /// Fold one snapshot into the sensor panels.
    ///
    /// Appends `(label, value)` to every series in fixed sensor order,
    /// evicting FIFO at the window bound, and recomputes every status view.
    /// Infallible: by the time this runs the cycle can no longer half-apply.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot, label: TimeLabel) {
        for kind in SensorKind::ALL {
            let panel = self.panel_mut(kind);
            panel.series.push(SeriesPoint::new(label, snapshot.value(kind)));
            panel.status = StatusView::from_snapshot(kind, snapshot);
        }
    }

    /// Replace the alert view with the trailing rows of a fetched list.
    ///
    /// Keeps the last `min(len, ALERT_VIEW_ROWS)` entries in original order.
    /// The view never accumulates across cycles; rows the backend dropped
    /// disappear here too.
    pub fn apply_alerts(&mut self, mut fetched: Vec<Alert>) {
        let excess = fetched.len().saturating_sub(ALERT_VIEW_ROWS);
        if excess > 0 {
            fetched.drain(..excess);
        }
        self.alerts = fetched;
    }

    /// Chart series for one sensor.
    pub fn series(&self, kind: SensorKind) -> &ChartSeries {
        &self.panel(kind).series
    }

    /// Status view for one sensor.
    pub fn status(&self, kind: SensorKind) -> &StatusView {
        &self.panel(kind).status
    }

    /// Current alert view, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    fn panel(&self, kind: SensorKind) -> &SensorPanel {
        match kind {
            SensorKind::Soil => &self.soil,
            SensorKind::Temperature => &self.temperature,
            SensorKind::Light => &self.light,
        }
    }

    fn panel_mut(&mut self, kind: SensorKind) -> &mut SensorPanel {
        match kind {
            SensorKind::Soil => &mut self.soil,
            SensorKind::Temperature => &mut self.temperature,
            SensorKind::Light => &mut self.light,
        }
    }
}
