//! Generic Poll-and-Merge Pipeline
//!
//! ## Overview
//!
//! The readings and alerts pipelines differ only in what they fetch and how
//! the payload folds into [`DisplayState`]. Everything else is identical:
//! running the fetch off the scheduler thread, the all-or-nothing merge, the
//! render pass, the error contract. [`PollTask`] captures that shared shape
//! once, parameterized by the payload type and three functions:
//!
//! ```text
//! fetch: &HttpSource -> PollResult<P>          (blocking, off-thread)
//! merge: &mut DisplayState, P -> ()            (infallible compute stage)
//! render: &DisplayState, &mut dyn Renderer     (fallible render stage)
//! ```
//!
//! [`PollTask::readings`] and [`PollTask::alerts`] are the two
//! instantiations the scheduler runs.
//!
//! ## Cycle atomicity
//!
//! The merge function runs only after the payload has fully decoded, and is
//! itself infallible: a transport or decode failure leaves DisplayState
//! byte-for-byte unchanged, and a success applies completely (every series
//! gains its point, never a subset). A render failure happens strictly after
//! the merge; state is then already consistent and the failure only costs
//! this cycle's redraw.
//!
//! ## Isolation
//!
//! A task touches only its own DisplayState fields (sensor panels for
//! readings, the alert view for alerts) and returns its error to the caller
//! instead of sharing any failure state, so the two pipelines cannot corrupt
//! or stall one another.

use std::sync::Arc;

use growdash_core::{
    Alert, Clock, DisplayState, PollError, PollResult, RenderError, Renderer, SensorKind,
    SharedDisplayState, SharedRenderer, Snapshot,
};

use crate::http::HttpSource;

type FetchFn<P> = Arc<dyn Fn(&HttpSource) -> PollResult<P> + Send + Sync>;
type MergeFn<P> = Box<dyn Fn(&mut DisplayState, P) + Send + Sync>;
type RenderFn = Box<dyn Fn(&DisplayState, &mut dyn Renderer) -> Result<(), RenderError> + Send + Sync>;

/// One independent fetch→merge→render unit.
pub struct PollTask<P> {
    name: &'static str,
    fetch: FetchFn<P>,
    merge: MergeFn<P>,
    render: RenderFn,
}

impl<P: Send + 'static> PollTask<P> {
    /// Assemble a task from its three stages.
    pub fn new(
        name: &'static str,
        fetch: impl Fn(&HttpSource) -> PollResult<P> + Send + Sync + 'static,
        merge: impl Fn(&mut DisplayState, P) + Send + Sync + 'static,
        render: impl Fn(&DisplayState, &mut dyn Renderer) -> Result<(), RenderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            fetch: Arc::new(fetch),
            merge: Box::new(merge),
            render: Box::new(render),
        }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run one full cycle.
    ///
    /// The blocking fetch runs on the blocking pool so a slow endpoint never
    /// stalls the other pipeline's task. State and renderer locks are taken
    /// state-then-renderer, briefly, only after the fetch resolved.
    pub async fn poll(
        &self,
        source: &HttpSource,
        state: &SharedDisplayState,
        renderer: &SharedRenderer,
    ) -> PollResult<()> {
        let fetch = Arc::clone(&self.fetch);
        let source = source.clone();
        let payload = tokio::task::spawn_blocking(move || fetch(&source))
            .await
            .map_err(|e| PollError::Transport(format!("fetch task aborted: {e}")))??;

        // Payload fully decoded: from here the cycle applies in full.
        let mut state = state.lock().unwrap();
        (self.merge)(&mut state, payload);

        let mut renderer = renderer.lock().unwrap();
        (self.render)(&state, renderer.as_mut())?;

        Ok(())
    }
}

impl PollTask<Snapshot> {
    /// The readings pipeline: snapshot → sensor panels → charts + indicators.
    pub fn readings(clock: Arc<dyn Clock>) -> Self {
        PollTask::new(
            "readings",
            |source| source.fetch_readings(),
            move |state, snapshot| {
                // One label per cycle; all three series share it
                state.apply_snapshot(&snapshot, clock.label());
            },
            |state, renderer| {
                for kind in SensorKind::ALL {
                    renderer.draw_series(kind, &state.series(kind).points())?;
                    renderer.update_status(kind, state.status(kind))?;
                }
                Ok(())
            },
        )
    }
}

impl PollTask<Vec<Alert>> {
    /// The alerts pipeline: alert list → bounded view → table.
    pub fn alerts() -> Self {
        PollTask::new(
            "alerts",
            |source| source.fetch_alerts(),
            |state, alerts| state.apply_alerts(alerts),
            |state, renderer| renderer.replace_alerts(state.alerts()),
        )
    }
}
