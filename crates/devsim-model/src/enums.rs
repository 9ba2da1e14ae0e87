//! Type-safe enumerations for identity fields that travel as strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radio access technology reported by a simulated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessTechnology {
    #[serde(rename = "2G")]
    Gen2,
    #[serde(rename = "3G")]
    Gen3,
    #[serde(rename = "4G")]
    Gen4,
    #[serde(rename = "5G")]
    Gen5,
    #[serde(rename = "WiFi")]
    WiFi,
}

impl AccessTechnology {
    pub const ALL: [AccessTechnology; 5] = [
        AccessTechnology::Gen2,
        AccessTechnology::Gen3,
        AccessTechnology::Gen4,
        AccessTechnology::Gen5,
        AccessTechnology::WiFi,
    ];

    /// Returns the label as it appears in identity records.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessTechnology::Gen2 => "2G",
            AccessTechnology::Gen3 => "3G",
            AccessTechnology::Gen4 => "4G",
            AccessTechnology::Gen5 => "5G",
            AccessTechnology::WiFi => "WiFi",
        }
    }
}

impl fmt::Display for AccessTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessTechnology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessTechnology::ALL
            .into_iter()
            .find(|tech| tech.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown access technology: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label() {
        for tech in AccessTechnology::ALL {
            assert_eq!(tech.as_str().parse::<AccessTechnology>(), Ok(tech));
        }
        assert!("6G".parse::<AccessTechnology>().is_err());
    }
}
