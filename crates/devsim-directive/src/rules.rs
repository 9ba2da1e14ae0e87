//! Lookup tables the mapper resolves names through. Rules are evaluated in
//! order and the first match wins.

use devsim_model::AccessTechnology;

pub const UNKNOWN_BRAND: &str = "Unknown";
pub const DEFAULT_NETWORK_TYPE: &str = "wifi";
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Maps a model label to a manufacturer when any needle is a substring.
#[derive(Debug, Clone, Copy)]
pub struct BrandRule {
    pub needles: &'static [&'static str],
    pub brand: &'static str,
}

pub const BRAND_RULES: &[BrandRule] = &[
    BrandRule {
        needles: &["Samsung", "SM-"],
        brand: "samsung",
    },
    BrandRule {
        needles: &["iPhone"],
        brand: "apple",
    },
    BrandRule {
        needles: &["Huawei", "ELE-", "VOG-"],
        brand: "huawei",
    },
    BrandRule {
        needles: &["Xiaomi", "POCO", "Redmi"],
        brand: "xiaomi",
    },
    BrandRule {
        needles: &["OPPO", "CPH"],
        brand: "oppo",
    },
    BrandRule {
        needles: &["Vivo", "V20"],
        brand: "vivo",
    },
];

pub fn infer_brand(model: &str) -> &'static str {
    BRAND_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| model.contains(needle)))
        .map_or(UNKNOWN_BRAND, |rule| rule.brand)
}

#[derive(Debug, Clone, Copy)]
pub enum CarrierMatch {
    Exact(&'static str),
    /// Every needle must be a substring.
    ContainsAll(&'static [&'static str]),
}

impl CarrierMatch {
    fn matches(self, carrier: &str) -> bool {
        match self {
            CarrierMatch::Exact(name) => carrier == name,
            CarrierMatch::ContainsAll(needles) => {
                needles.iter().all(|needle| carrier.contains(needle))
            }
        }
    }
}

/// Operator display names for carriers matching `matcher`. A `None` service
/// provider name keeps the carrier name.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRule {
    pub matcher: CarrierMatch,
    pub service_provider_name: Option<&'static str>,
    pub long_name: &'static str,
    pub short_name: &'static str,
}

pub const OPERATOR_RULES: &[OperatorRule] = &[
    OperatorRule {
        matcher: CarrierMatch::Exact("Verizon"),
        service_provider_name: None,
        long_name: "Verizon Wireless",
        short_name: "Verizon",
    },
    OperatorRule {
        matcher: CarrierMatch::ContainsAll(&["AT&T"]),
        service_provider_name: Some("AT&T Mobility"),
        long_name: "AT&T Mobility",
        short_name: "AT&T",
    },
    OperatorRule {
        matcher: CarrierMatch::ContainsAll(&["China", "Mobile"]),
        service_provider_name: None,
        long_name: "China Mobile",
        short_name: "CMCC",
    },
    OperatorRule {
        matcher: CarrierMatch::ContainsAll(&["China", "Unicom"]),
        service_provider_name: None,
        long_name: "China Unicom",
        short_name: "CU",
    },
    OperatorRule {
        matcher: CarrierMatch::ContainsAll(&["China", "Telecom"]),
        service_provider_name: None,
        long_name: "China Telecom",
        short_name: "CT",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorNames {
    pub service_provider_name: String,
    pub long_name: String,
    pub short_name: String,
}

/// Display names for a carrier; unmatched carriers use their own name for
/// all three.
pub fn operator_names(carrier: &str) -> OperatorNames {
    match OPERATOR_RULES
        .iter()
        .find(|rule| rule.matcher.matches(carrier))
    {
        Some(rule) => OperatorNames {
            service_provider_name: rule.service_provider_name.unwrap_or(carrier).to_string(),
            long_name: rule.long_name.to_string(),
            short_name: rule.short_name.to_string(),
        },
        None => OperatorNames {
            service_provider_name: carrier.to_string(),
            long_name: carrier.to_string(),
            short_name: carrier.to_string(),
        },
    }
}

/// `sim.netType` value for an access technology label.
pub fn sim_network_type(label: &str) -> &'static str {
    match label.parse::<AccessTechnology>() {
        Ok(AccessTechnology::Gen2) => "gsm",
        Ok(AccessTechnology::Gen3) => "cdma",
        Ok(AccessTechnology::Gen4) => "lte",
        Ok(AccessTechnology::Gen5) => "nr",
        Ok(AccessTechnology::WiFi) | Err(_) => DEFAULT_NETWORK_TYPE,
    }
}

pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("China", "CN"),
    ("Hong Kong", "HK"),
    ("Macao", "MO"),
    ("Taiwan", "TW"),
    ("USA", "US"),
];

/// ISO country code for a region name.
pub fn country_code(country: &str) -> &'static str {
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map_or(DEFAULT_COUNTRY_CODE, |(_, code)| *code)
}
