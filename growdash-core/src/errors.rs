//! Error Types for Poll Cycles
//!
//! One taxonomy covers a whole fetch→merge→render cycle:
//!
//! - [`PollError::Transport`]: the request never produced a usable response
//!   (connection failure, non-success status, timeout)
//! - [`PollError::Decode`]: the response was not the expected JSON shape
//! - [`PollError::Render`]: the rendering capability failed
//!
//! All three are caught at the pipeline boundary and logged; none are
//! surfaced to the user beyond whatever the previous successful cycle already
//! rendered, and none stop the polling cadence. There are no retries beyond
//! the next scheduled tick; the fixed cadence is the backoff.

use thiserror::Error;

use crate::render::RenderError;

/// Result type for poll-cycle operations.
pub type PollResult<T> = Result<T, PollError>;

/// Failure of one poll cycle.
#[derive(Debug, Error)]
pub enum PollError {
    /// Network or request failure, including enforced timeouts.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response is not valid JSON or misses required fields.
    #[error("decode error: {0}")]
    Decode(String),

    /// The rendering capability failed mid-redraw.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl PollError {
    /// Transport failure from any displayable cause.
    pub fn transport(cause: impl ToString) -> Self {
        PollError::Transport(cause.to_string())
    }

    /// Decode failure from any displayable cause.
    pub fn decode(cause: impl ToString) -> Self {
        PollError::Decode(cause.to_string())
    }
}
