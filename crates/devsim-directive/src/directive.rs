//! Typed `dg` directives and their exact text rendering.
//!
//! ```text
//! dg config -a <module>.<key>=<value> [-a <module>.<key>=<value> ...]
//! dg geo fix <longitude> <latitude>
//! dg sensor set acceleration|gyroscope <x> <y> <z>
//! ```

use std::fmt::{self, Write};

use devsim_codec::format_decimal;
use devsim_model::SensorReading;

/// Property addressed by a `dg config` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Manufacturer,
    Brand,
    Model,
    Device,
    SerialNumber,
    Imei,
    SimState,
    SimNumeric,
    Imsi,
    ServiceProviderName,
    OperatorLongName,
    OperatorShortName,
    Iccid,
    Msisdn,
    NetworkType,
    SimCountry,
    MacAddress,
    AndroidId,
    WifiSsid,
    WifiIpAddress,
    BatteryLevel,
    SensorMock,
}

impl PropertyKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyKey::Manufacturer => "prop.ro.product.manufacturer",
            PropertyKey::Brand => "prop.ro.product.brand",
            PropertyKey::Model => "prop.ro.product.model",
            PropertyKey::Device => "prop.ro.product.device",
            PropertyKey::SerialNumber => "prop.ro.serialno",
            PropertyKey::Imei => "sim.imei",
            PropertyKey::SimState => "sim.state",
            PropertyKey::SimNumeric => "sim.numeric",
            PropertyKey::Imsi => "sim.imsi",
            PropertyKey::ServiceProviderName => "sim.spn",
            PropertyKey::OperatorLongName => "sim.operatorLongName",
            PropertyKey::OperatorShortName => "sim.operatorShortName",
            PropertyKey::Iccid => "sim.iccid",
            PropertyKey::Msisdn => "sim.msisdn",
            PropertyKey::NetworkType => "sim.netType",
            PropertyKey::SimCountry => "sim.country",
            PropertyKey::MacAddress => "net.if.mac",
            PropertyKey::AndroidId => "prop.android.id",
            PropertyKey::WifiSsid => "net.wifi.ssid",
            PropertyKey::WifiIpAddress => "net.wifi.ipaddress",
            PropertyKey::BatteryLevel => "battery.batteryLevel",
            PropertyKey::SensorMock => "sensor.mock",
        }
    }

    /// Operator names are quoted even without whitespace.
    fn always_quoted(self) -> bool {
        matches!(
            self,
            PropertyKey::ServiceProviderName
                | PropertyKey::OperatorLongName
                | PropertyKey::OperatorShortName
        )
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `-a key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: PropertyKey,
    pub value: String,
}

impl Assignment {
    pub fn new(key: PropertyKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    fn needs_quotes(&self) -> bool {
        self.key.always_quoted()
            || self
                .value
                .chars()
                .any(|c| c.is_whitespace() || c == '"' || c == '\\')
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_quotes() {
            write!(f, "{}=\"", self.key)?;
            for c in self.value.chars() {
                if c == '"' || c == '\\' {
                    f.write_char('\\')?;
                }
                f.write_char(c)?;
            }
            f.write_char('"')
        } else {
            write!(f, "{}={}", self.key, self.value)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Acceleration,
    Gyroscope,
}

impl SensorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SensorKind::Acceleration => "acceleration",
            SensorKind::Gyroscope => "gyroscope",
        }
    }
}

/// One line of the emulator configuration protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `dg config` with one or more assignments.
    Config(Vec<Assignment>),
    GeoFix { longitude: f64, latitude: f64 },
    Sensor {
        kind: SensorKind,
        reading: SensorReading,
    },
}

impl Directive {
    /// Single-assignment `dg config`.
    pub fn config(key: PropertyKey, value: impl Into<String>) -> Self {
        Directive::Config(vec![Assignment::new(key, value)])
    }

    pub fn is_geo_fix(&self) -> bool {
        matches!(self, Directive::GeoFix { .. })
    }

    /// Value assigned to `key`, if this is a config directive that sets it.
    pub fn value_of(&self, key: PropertyKey) -> Option<&str> {
        match self {
            Directive::Config(assignments) => assignments
                .iter()
                .find(|assignment| assignment.key == key)
                .map(|assignment| assignment.value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Config(assignments) => {
                f.write_str("dg config")?;
                for assignment in assignments {
                    write!(f, " -a {assignment}")?;
                }
                Ok(())
            }
            Directive::GeoFix {
                longitude,
                latitude,
            } => write!(
                f,
                "dg geo fix {} {}",
                format_decimal(*longitude),
                format_decimal(*latitude)
            ),
            Directive::Sensor { kind, reading } => write!(
                f,
                "dg sensor set {} {} {} {}",
                kind.as_str(),
                format_decimal(reading.x),
                format_decimal(reading.y),
                format_decimal(reading.z)
            ),
        }
    }
}
