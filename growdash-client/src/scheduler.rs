//! Fixed-Cadence Scheduler
//!
//! Owns the composition root of the dashboard: the shared [`DisplayState`],
//! the shared renderer, the clock, and the HTTP source. [`Scheduler::run`]
//! dispatches both pipelines once immediately and then every poll interval,
//! indefinitely. There is no stop condition; the scheduler lives as long as
//! the hosting context.
//!
//! Each pipeline runs as its own task with its own ticker, so a slow or
//! blocked cycle in one never delays or skips the other. No coalescing is
//! done: should a cycle outlast the interval, the next one simply runs and
//! the later writer wins on that pipeline's slice of the state. Failures are
//! logged and the cadence continues.
//!
//! [`DisplayState`]: growdash_core::DisplayState

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use growdash_core::{
    shared_renderer, Clock, DisplayState, PollResult, Renderer, SharedDisplayState,
    SharedRenderer, SystemClock,
};

use crate::http::HttpSource;
use crate::pipeline::PollTask;

/// Drives the two polling pipelines against one backend.
pub struct Scheduler {
    source: HttpSource,
    state: SharedDisplayState,
    renderer: SharedRenderer,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl Scheduler {
    /// Composition root: fresh state, wall-clock time, cadence from config.
    pub fn new(source: HttpSource, renderer: Box<dyn Renderer + Send>) -> Self {
        let interval = source.config().poll_interval;
        Self {
            source,
            state: DisplayState::shared(),
            renderer: shared_renderer(renderer),
            clock: Arc::new(SystemClock),
            interval,
        }
    }

    /// Replace the clock; tests pin it to a fixed source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Handle on the shared display state.
    pub fn state(&self) -> SharedDisplayState {
        Arc::clone(&self.state)
    }

    /// Run both pipelines once, concurrently, logging either outcome.
    pub async fn poll_once(&self) {
        let readings = PollTask::readings(Arc::clone(&self.clock));
        let alerts = PollTask::alerts();

        let (r, a) = tokio::join!(
            readings.poll(&self.source, &self.state, &self.renderer),
            alerts.poll(&self.source, &self.state, &self.renderer),
        );
        log_outcome(readings.name(), r);
        log_outcome(alerts.name(), a);
    }

    /// Poll forever: both pipelines immediately, then every interval.
    pub async fn run(self) {
        log::info!(
            "polling {} every {:?}",
            self.source.config().base_url,
            self.interval
        );

        let readings = self.spawn_loop(PollTask::readings(Arc::clone(&self.clock)));
        let alerts = self.spawn_loop(PollTask::alerts());

        // Runs until the hosting context tears the tasks down
        let _ = tokio::join!(readings, alerts);
    }

    fn spawn_loop<P: Send + 'static>(&self, task: PollTask<P>) -> JoinHandle<()> {
        let source = self.source.clone();
        let state = Arc::clone(&self.state);
        let renderer = Arc::clone(&self.renderer);
        let period = self.interval;

        tokio::spawn(async move {
            // The first tick fires immediately, then once per period
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let outcome = task.poll(&source, &state, &renderer).await;
                log_outcome(task.name(), outcome);
            }
        })
    }
}

fn log_outcome(name: &str, outcome: PollResult<()>) {
    match outcome {
        Ok(()) => log::debug!("{name}: cycle complete"),
        Err(e) => log::warn!("{name}: cycle failed: {e}"),
    }
}
