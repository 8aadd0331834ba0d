//! Display-state engine for the Growdash live sensor dashboard
//!
//! Folds polled sensor snapshots and alert lists into bounded, ordered
//! display state and drives a rendering capability through the [`Renderer`]
//! trait. No networking lives here; the engine is fully testable without I/O.
//!
//! Key guarantees:
//! - Rolling series never exceed the display window (FIFO eviction)
//! - A poll cycle mutates state atomically (all sensors or none)
//! - Re-rendering unchanged state is idempotent
//!
//! ```no_run
//! use growdash_core::{DisplayState, NullRenderer, Renderer, SensorKind};
//!
//! let state = DisplayState::default();
//! let mut renderer = NullRenderer;
//!
//! // After a merge, redraw the widgets that depend on the readings.
//! for kind in SensorKind::ALL {
//!     renderer.draw_series(kind, &state.series(kind).points()).ok();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod render;
pub mod series;
pub mod snapshot;
pub mod state;
pub mod status;
pub mod time;

// Public API
pub use errors::{PollError, PollResult};
pub use render::{shared_renderer, NullRenderer, RecordingRenderer, RenderError, Renderer, SharedRenderer};
pub use series::{RollingSeries, SeriesPoint, TimeLabel};
pub use snapshot::{Alert, SensorKind, Snapshot};
pub use state::{ChartSeries, DisplayState, SharedDisplayState};
pub use status::StatusView;
pub use time::{Clock, FixedClock, SystemClock, Timestamp};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
