//! Polled Payload Types
//!
//! The two payloads the backend serves: a [`Snapshot`] of the latest sensor
//! readings and a chronological list of [`Alert`]s. Both are decoded once per
//! poll cycle and consumed immediately by the merge step; neither is retained.
//!
//! Field names mirror the backend's JSON verbatim so the engine stays a thin
//! consumer: required reading/status fields fail the whole decode when absent
//! (the cycle then changes nothing), while optional current-level fields and
//! alert row fields degrade gracefully.

use serde::{Deserialize, Deserializer};

/// The three dashboard sensors, in fixed processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorKind {
    /// Soil moisture probe (percent).
    Soil = 0,
    /// Air temperature probe (degrees Celsius).
    Temperature = 1,
    /// Light sensor (lux).
    Light = 2,
}

impl SensorKind {
    /// All sensors in the order every merge and redraw walks them.
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Soil,
        SensorKind::Temperature,
        SensorKind::Light,
    ];

    /// Get human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Soil => "soil",
            SensorKind::Temperature => "temperature",
            SensorKind::Light => "light",
        }
    }

    /// Get expected unit of measurement.
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorKind::Soil => "%",
            SensorKind::Temperature => "°C",
            SensorKind::Light => "lx",
        }
    }

    /// Stable index for per-sensor storage.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One fetched reading event from the readings endpoint.
///
/// Values and statuses are required; the current-level fields may be absent
/// or null, in which case the displayed level falls back to the placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    /// Soil moisture in percent.
    pub soil_moisture: f32,
    /// Air temperature in degrees Celsius.
    pub temperature: f32,
    /// Light level in lux.
    pub light: f32,

    /// Backend's soil probe classification, shown verbatim.
    pub soil_status: String,
    /// Backend's temperature probe classification, shown verbatim.
    pub temp_status: String,
    /// Backend's light sensor classification, shown verbatim.
    pub light_status: String,

    /// Current soil level, if the backend computed one.
    #[serde(default)]
    pub soil_current: Option<f32>,
    /// Current temperature level, if the backend computed one.
    #[serde(default)]
    pub temp_current: Option<f32>,
    /// Current light level, if the backend computed one.
    #[serde(default)]
    pub light_current: Option<f32>,
}

impl Snapshot {
    /// Reading value for one sensor.
    pub fn value(&self, kind: SensorKind) -> f32 {
        match kind {
            SensorKind::Soil => self.soil_moisture,
            SensorKind::Temperature => self.temperature,
            SensorKind::Light => self.light,
        }
    }

    /// Status label for one sensor.
    pub fn status(&self, kind: SensorKind) -> &str {
        match kind {
            SensorKind::Soil => &self.soil_status,
            SensorKind::Temperature => &self.temp_status,
            SensorKind::Light => &self.light_status,
        }
    }

    /// Current level for one sensor, if present.
    pub fn current(&self, kind: SensorKind) -> Option<f32> {
        match kind {
            SensorKind::Soil => self.soil_current,
            SensorKind::Temperature => self.temp_current,
            SensorKind::Light => self.light_current,
        }
    }
}

/// One alert row as received from the alerts endpoint.
///
/// Every field is display text. A missing or null field decodes to an empty
/// string so one sparse record renders as empty cells instead of aborting the
/// whole table; a numeric `value` is carried as its textual form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    /// When the alert fired, as formatted by the backend.
    #[serde(default, deserialize_with = "display_string")]
    pub time: String,
    /// Alert category, e.g. "Low Moisture".
    #[serde(rename = "type", default, deserialize_with = "display_string")]
    pub kind: String,
    /// Which sensor raised it.
    #[serde(default, deserialize_with = "display_string")]
    pub sensor: String,
    /// The offending reading.
    #[serde(default, deserialize_with = "display_string")]
    pub value: String,
}

/// Decode any JSON scalar into its display text; null becomes empty.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
