//! Common test fixtures for the display-state integration tests

#![allow(dead_code)]

use growdash_core::{Alert, Snapshot, TimeLabel};

/// Snapshot with all sensors online and no current levels.
pub fn snapshot(soil: f32, temp: f32, light: f32) -> Snapshot {
    Snapshot {
        soil_moisture: soil,
        temperature: temp,
        light,
        soil_status: "Online".into(),
        temp_status: "Online".into(),
        light_status: "Online".into(),
        soil_current: None,
        temp_current: None,
        light_current: None,
    }
}

/// Snapshot carrying current levels for every sensor.
pub fn snapshot_with_levels(soil: f32, temp: f32, light: f32) -> Snapshot {
    Snapshot {
        soil_current: Some(soil),
        temp_current: Some(temp),
        light_current: Some(light),
        ..snapshot(soil, temp, light)
    }
}

/// Chart label for the nth poll cycle.
pub fn cycle_label(n: usize) -> TimeLabel {
    TimeLabel::new(&format!("14:{:02}:{:02}", (n / 60) % 60, n % 60)).unwrap()
}

/// Alert row with a recognizable value.
pub fn alert(n: usize) -> Alert {
    Alert {
        time: format!("2024-06-01 14:00:{:02}", n % 60),
        kind: "Low Moisture".into(),
        sensor: "Soil".into(),
        value: format!("{n}"),
    }
}
