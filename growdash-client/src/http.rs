//! HTTP Source for the Two Read Endpoints
//!
//! Wraps a `ureq` agent around the backend's readings and alerts endpoints.
//! Both are parameterless GETs returning JSON; both go through one shared
//! agent so the request timeout is enforced uniformly. The upstream service
//! sets no deadline of its own, so an unbounded fetch would pile up behind
//! the polling cadence.
//!
//! Failures map onto the engine's taxonomy: anything before a readable body
//! is [`PollError::Transport`], an unexpected body shape is
//! [`PollError::Decode`]. No retries happen here; the scheduler's next tick
//! is the retry.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use growdash_core::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_MS};
use growdash_core::{Alert, PollError, PollResult, Snapshot};

/// Configuration errors raised while building a source.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL does not carry an HTTP scheme.
    #[error("base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// HTTP configuration for the dashboard backend.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the backend, e.g. `http://hub.local:5000`.
    pub base_url: String,
    /// Path of the readings endpoint.
    pub readings_path: String,
    /// Path of the alerts endpoint.
    pub alerts_path: String,
    /// Request timeout applied to every fetch.
    pub timeout: Duration,
    /// Polling cadence; the only externally meaningful knob.
    pub poll_interval: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl HttpConfig {
    /// Create new configuration with the default paths and cadence.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            readings_path: "/api/readings".into(),
            alerts_path: "/alerts".into(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            user_agent: format!("growdash/{}", growdash_core::VERSION),
        }
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the polling cadence in milliseconds.
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval = Duration::from_millis(ms);
        self
    }

    /// Override the readings endpoint path.
    pub fn readings_path(mut self, path: impl Into<String>) -> Self {
        self.readings_path = path.into();
        self
    }

    /// Override the alerts endpoint path.
    pub fn alerts_path(mut self, path: impl Into<String>) -> Self {
        self.alerts_path = path.into();
        self
    }
}

/// The backend's two read endpoints behind one configured agent.
#[derive(Clone)]
pub struct HttpSource {
    config: HttpConfig,
    agent: ureq::Agent,
}

impl HttpSource {
    /// Build a source, validating the base URL.
    pub fn new(config: HttpConfig) -> Result<Self, ConfigError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(config.base_url));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self { config, agent })
    }

    /// The configuration this source was built from.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Fetch and decode the latest sensor snapshot.
    pub fn fetch_readings(&self) -> PollResult<Snapshot> {
        self.get_json(&self.config.readings_path)
    }

    /// Fetch and decode the current alert list, oldest first.
    pub fn fetch_alerts(&self) -> PollResult<Vec<Alert>> {
        self.get_json(&self.config.alerts_path)
    }

    /// GET a path and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> PollResult<T> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    PollError::Transport(format!("{url}: server returned status {code}"))
                }
                ureq::Error::Transport(t) => PollError::Transport(t.to_string()),
            })?;

        let body = response.into_string().map_err(PollError::transport)?;
        serde_json::from_str(&body).map_err(PollError::decode)
    }
}
