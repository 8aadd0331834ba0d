//! Rendering Capability Seam
//!
//! The engine computes display state; something else draws it. [`Renderer`]
//! is that seam: a chart/DOM backend implements it, the polling pipelines
//! drive it. Splitting the two keeps every merge testable without a chart
//! library in sight.
//!
//! The contract every implementation must honor is *replacement*, not
//! appending: `draw_series` receives the full window each redraw,
//! `replace_alerts` the full table. Rendering the same state twice must
//! therefore produce identical output; the pipelines rely on that when a
//! cycle overlaps or repeats.
//!
//! Implementations that hold per-chart handles should create them lazily on
//! first draw and reuse them afterwards (an `Option` field set once), as
//! [`RecordingRenderer`] demonstrates.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::series::SeriesPoint;
use crate::snapshot::{Alert, SensorKind};
use crate::status::StatusView;

/// Rendering failures.
///
/// Raised by a backend, caught and logged at the pipeline boundary; never
/// fatal and never shown past the last successfully rendered state.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A target widget does not exist in the presentation layer.
    #[error("render target missing: {0}")]
    MissingTarget(&'static str),

    /// The rendering backend itself failed.
    #[error("render backend error: {0}")]
    Backend(String),
}

/// A renderer shared between pipeline tasks.
pub type SharedRenderer = Arc<Mutex<Box<dyn Renderer + Send>>>;

/// The drawing capability the engine drives.
pub trait Renderer {
    /// Replace one chart's dataset with the given window, oldest first.
    fn draw_series(&mut self, kind: SensorKind, points: &[SeriesPoint]) -> Result<(), RenderError>;

    /// Update one sensor's status text, styling class, and level.
    fn update_status(&mut self, kind: SensorKind, view: &StatusView) -> Result<(), RenderError>;

    /// Clear and repopulate the alert table with the given rows.
    fn replace_alerts(&mut self, rows: &[Alert]) -> Result<(), RenderError>;
}

/// Wrap a renderer for sharing across pipeline tasks.
pub fn shared_renderer(renderer: Box<dyn Renderer + Send>) -> SharedRenderer {
    Arc::new(Mutex::new(renderer))
}

/// Forward rendering through a shared handle.
///
/// Lets a host keep its own typed handle on a renderer (to inspect what was
/// drawn, as the tests do) while the pipelines drive it as a trait object.
impl<R: Renderer> Renderer for Arc<Mutex<R>> {
    fn draw_series(&mut self, kind: SensorKind, points: &[SeriesPoint]) -> Result<(), RenderError> {
        self.lock().unwrap().draw_series(kind, points)
    }

    fn update_status(&mut self, kind: SensorKind, view: &StatusView) -> Result<(), RenderError> {
        self.lock().unwrap().update_status(kind, view)
    }

    fn replace_alerts(&mut self, rows: &[Alert]) -> Result<(), RenderError> {
        self.lock().unwrap().replace_alerts(rows)
    }
}

/// Renderer that discards everything.
///
/// Useful when running the engine headless or before a real backend is
/// attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_series(&mut self, _kind: SensorKind, _points: &[SeriesPoint]) -> Result<(), RenderError> {
        Ok(())
    }

    fn update_status(&mut self, _kind: SensorKind, _view: &StatusView) -> Result<(), RenderError> {
        Ok(())
    }

    fn replace_alerts(&mut self, _rows: &[Alert]) -> Result<(), RenderError> {
        Ok(())
    }
}

/// One recorded chart: the handle a real backend would hold.
///
/// Created on the first draw, updated in place afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    /// Last dataset drawn, oldest first.
    pub points: Vec<SeriesPoint>,
    /// How many times this chart has been drawn.
    pub draws: u32,
}

/// Renderer that captures the most recent rendered output.
///
/// For tests and headless hosts: every draw replaces the recorded dataset,
/// so asserting on it checks both content and idempotence.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    charts: [Option<ChartRecord>; 3],
    status: [Option<StatusView>; 3],
    alert_rows: Option<Vec<Alert>>,
    alert_renders: u32,
}

impl RecordingRenderer {
    /// Fresh renderer with nothing rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last dataset drawn for one chart, if it was ever drawn.
    pub fn chart(&self, kind: SensorKind) -> Option<&ChartRecord> {
        self.charts[kind.index()].as_ref()
    }

    /// The last status view rendered for one sensor.
    pub fn status(&self, kind: SensorKind) -> Option<&StatusView> {
        self.status[kind.index()].as_ref()
    }

    /// The last alert rows rendered, if the table was ever rendered.
    pub fn alert_rows(&self) -> Option<&[Alert]> {
        self.alert_rows.as_deref()
    }

    /// How many times the alert table has been repopulated.
    pub fn alert_renders(&self) -> u32 {
        self.alert_renders
    }
}

impl Renderer for RecordingRenderer {
    fn draw_series(&mut self, kind: SensorKind, points: &[SeriesPoint]) -> Result<(), RenderError> {
        let slot = &mut self.charts[kind.index()];
        match slot {
            Some(chart) => {
                chart.points = points.to_vec();
                chart.draws += 1;
            }
            None => {
                *slot = Some(ChartRecord {
                    points: points.to_vec(),
                    draws: 1,
                });
            }
        }
        Ok(())
    }

    fn update_status(&mut self, kind: SensorKind, view: &StatusView) -> Result<(), RenderError> {
        self.status[kind.index()] = Some(view.clone());
        Ok(())
    }

    fn replace_alerts(&mut self, rows: &[Alert]) -> Result<(), RenderError> {
        self.alert_rows = Some(rows.to_vec());
        self.alert_renders += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeLabel;

    fn points(values: &[f32]) -> Vec<SeriesPoint> {
        values
            .iter()
            .map(|v| SeriesPoint::new(TimeLabel::new("08:00:00").unwrap(), *v))
            .collect()
    }

    #[test]
    fn chart_handle_initializes_once_then_updates() {
        let mut renderer = RecordingRenderer::new();
        assert!(renderer.chart(SensorKind::Soil).is_none());

        renderer.draw_series(SensorKind::Soil, &points(&[1.0, 2.0])).unwrap();
        let chart = renderer.chart(SensorKind::Soil).unwrap();
        assert_eq!(chart.draws, 1);
        assert_eq!(chart.points.len(), 2);

        renderer.draw_series(SensorKind::Soil, &points(&[1.0, 2.0, 3.0])).unwrap();
        let chart = renderer.chart(SensorKind::Soil).unwrap();
        assert_eq!(chart.draws, 2);
        // Replaced, not appended
        assert_eq!(chart.points.len(), 3);
    }

    #[test]
    fn redraw_with_same_points_is_idempotent() {
        let mut renderer = RecordingRenderer::new();
        let window = points(&[4.0, 5.0]);

        renderer.draw_series(SensorKind::Light, &window).unwrap();
        let first = renderer.chart(SensorKind::Light).unwrap().points.clone();

        renderer.draw_series(SensorKind::Light, &window).unwrap();
        let second = renderer.chart(SensorKind::Light).unwrap().points.clone();

        assert_eq!(first, second);
    }

    #[test]
    fn alert_table_is_replaced_wholesale() {
        let mut renderer = RecordingRenderer::new();
        renderer.replace_alerts(&[]).unwrap();

        assert_eq!(renderer.alert_rows().unwrap().len(), 0);
        assert_eq!(renderer.alert_renders(), 1);
    }
}
