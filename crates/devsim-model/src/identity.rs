//! The synthesized device identity record.
//!
//! Field names are the external record format: identities are written to JSON
//! field-for-field and read back by downstream tooling.

use serde::{Deserialize, Serialize};

/// A 3-axis sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SensorReading {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// One simulated device. Produced by the generator, consumed read-only by the
/// directive mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceIdentity {
    /// `"brand model"` label.
    pub model: String,
    pub imei: String,
    pub imsi: String,
    pub mac_address: String,
    /// Device-instance identifier, 16 lowercase hex characters.
    pub android_id: String,
    pub app_version: String,
    pub system_version: String,
    pub ssid: String,
    pub ip_address: String,
    /// Access technology label (`2G`, `3G`, `4G`, `5G`, `WiFi`).
    pub network_type: String,
    pub accelerometer_data: Option<SensorReading>,
    pub gyroscope_data: Option<SensorReading>,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub region: String,
    pub carrier: String,
    pub phone_number: String,
}

/// Split a `"brand model"` label on its first space.
///
/// A label without a space is treated as both brand and model.
pub fn split_model_label(label: &str) -> (&str, &str) {
    label.split_once(' ').unwrap_or((label, label))
}
