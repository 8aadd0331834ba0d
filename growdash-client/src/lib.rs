//! HTTP Polling Layer for the Growdash Dashboard Engine
//!
//! ## Overview
//!
//! This crate connects the display-state engine in `growdash-core` to a live
//! backend: it fetches the readings snapshot and the alert list over HTTP,
//! folds them into shared [`DisplayState`], and drives the attached
//! [`Renderer`], all on a fixed polling cadence.
//!
//! The moving parts:
//!
//! - [`HttpSource`]: the two read endpoints behind one configured agent,
//!   with an enforced request timeout
//! - [`PollTask`]: the single generic fetch→merge→render unit; the readings
//!   and alerts pipelines are its two instantiations
//! - [`Scheduler`]: dispatches both pipelines once immediately and then
//!   every interval, forever, isolating their failures from each other
//!
//! ## Failure model
//!
//! Every cycle fails silently: transport, decode, and render errors are
//! logged at the pipeline boundary and the previously rendered state stays
//! up. There are no retries and no backoff; the next tick is the retry.
//!
//! ```no_run
//! use growdash_client::{HttpConfig, HttpSource, Scheduler};
//! use growdash_core::NullRenderer;
//!
//! # async fn example() -> Result<(), growdash_client::ConfigError> {
//! let source = HttpSource::new(HttpConfig::new("http://hub.local:5000"))?;
//! let scheduler = Scheduler::new(source, Box::new(NullRenderer));
//! scheduler.run().await;
//! # Ok(())
//! # }
//! ```
//!
//! [`DisplayState`]: growdash_core::DisplayState
//! [`Renderer`]: growdash_core::Renderer

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod http;
pub mod pipeline;
pub mod scheduler;

pub use http::{ConfigError, HttpConfig, HttpSource};
pub use pipeline::PollTask;
pub use scheduler::Scheduler;
