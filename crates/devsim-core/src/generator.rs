#![deny(unsafe_code)]

use tracing::debug;

use devsim_codec::{luhn_check_digit, render_digits, round_to};
use devsim_model::{AccessTechnology, DeviceIdentity, SensorReading, TypeAllocationCode};
use devsim_registry::ReferenceRegistry;

use crate::dialing::{dialing_plan, generic_phone_number};
use crate::random::RandomSource;

/// Placeholder for a model, region or carrier that cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Used when the region has no registered mobile country code.
pub const FALLBACK_MOBILE_COUNTRY_CODE: &str = "000";

pub const IMSI_LEN: usize = 15;
const SERIAL_DIGITS: usize = 6;

const SYSTEM_VERSIONS: [&str; 5] = [
    "Android 10",
    "Android 11",
    "Android 12",
    "Android 13",
    "Android 14",
];

const ACCELEROMETER_RANGE: f64 = 10.0;
const GYROSCOPE_RANGE: f64 = 500.0;

/// Optional constraints on a generated identity.
///
/// Blank hints count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityHints {
    pub model: Option<String>,
    pub region: Option<String>,
    pub carrier: Option<String>,
}

impl IdentityHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }

    fn model(&self) -> Option<&str> {
        non_blank(self.model.as_deref())
    }

    fn region(&self) -> Option<&str> {
        non_blank(self.region.as_deref())
    }

    fn carrier(&self) -> Option<&str> {
        non_blank(self.carrier.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Synthesizes [`DeviceIdentity`] records from the reference tables.
///
/// Generation never fails: every missing lookup falls back to a random or
/// placeholder value and is logged at debug level.
pub struct IdentityGenerator<'a, R> {
    registry: &'a ReferenceRegistry,
    rng: R,
}

impl<'a, R: RandomSource> IdentityGenerator<'a, R> {
    pub fn new(registry: &'a ReferenceRegistry, rng: R) -> Self {
        Self { registry, rng }
    }

    pub fn generate(&mut self, hints: &IdentityHints) -> DeviceIdentity {
        let model = self.select_model(hints.model());
        let region = self.select_region(hints.region());
        let carrier = self.select_carrier(&region, hints.carrier());
        let phone_number = self.phone_number(&region);
        let imei = self.imei(&model);
        let imsi = self.imsi(&region, &carrier);

        let mac_address = self.mac_address();
        let android_id = self.android_id();
        let app_version = self.app_version();
        let system_version = self.system_version();
        let ssid = format!("WiFi_{}", self.rng.int_in(1000, 9999));
        let ip_address = self.ip_address();
        let network_type = self.network_type();
        let accelerometer_data = Some(self.sensor_reading(ACCELEROMETER_RANGE));
        let gyroscope_data = Some(self.sensor_reading(GYROSCOPE_RANGE));
        let latitude = round_to(self.rng.float_in(-90.0, 90.0), 6);
        let longitude = round_to(self.rng.float_in(-180.0, 180.0), 6);

        DeviceIdentity {
            model,
            imei,
            imsi,
            mac_address,
            android_id,
            app_version,
            system_version,
            ssid,
            ip_address,
            network_type,
            accelerometer_data,
            gyroscope_data,
            latitude,
            longitude,
            country: region.clone(),
            region,
            carrier,
            phone_number,
        }
    }

    /// `count` independent identities.
    pub fn generate_batch(&mut self, count: usize, hints: &IdentityHints) -> Vec<DeviceIdentity> {
        (0..count).map(|_| self.generate(hints)).collect()
    }

    fn select_model(&mut self, hint: Option<&str>) -> String {
        if let Some(model) = hint {
            return model.to_string();
        }
        let registry = self.registry;
        let brands = registry.brands();
        let Some(brand) = self.rng.choose(&brands).copied() else {
            debug!("no brands registered, using placeholder model");
            return UNKNOWN.to_string();
        };
        let models = registry.models_of(brand);
        match self.rng.choose(&models) {
            Some(model) => format!("{brand} {model}"),
            None => brand.to_string(),
        }
    }

    fn select_region(&mut self, hint: Option<&str>) -> String {
        let registry = self.registry;
        if let Some(region) = hint {
            if registry.region(region).is_some() {
                return region.to_string();
            }
            debug!(region, "unknown region hint, choosing at random");
        }
        let regions = registry.list_regions();
        match self.rng.choose(&regions) {
            Some(region) => (*region).to_string(),
            None => {
                debug!("no regions registered, using placeholder region");
                UNKNOWN.to_string()
            }
        }
    }

    fn select_carrier(&mut self, region: &str, hint: Option<&str>) -> String {
        let carriers = self.registry.carriers_of(region);
        if let Some(carrier) = hint {
            if carriers.contains(&carrier) {
                return carrier.to_string();
            }
            debug!(region, carrier, "carrier hint not registered for region");
        }
        match self.rng.choose(&carriers) {
            Some(carrier) => (*carrier).to_string(),
            None => {
                debug!(region, "region has no carriers");
                UNKNOWN.to_string()
            }
        }
    }

    fn phone_number(&mut self, region: &str) -> String {
        let prefixes = self.registry.phone_prefixes(region);
        let prefix = self.rng.choose(prefixes);
        match (prefix, dialing_plan(region)) {
            (Some(prefix), Some(plan)) => plan.format(prefix, &mut self.rng),
            _ => {
                debug!(region, "no dialing plan for region, using generic number");
                generic_phone_number(&mut self.rng)
            }
        }
    }

    fn imei(&mut self, model: &str) -> String {
        let registry = self.registry;
        let tac = match registry.type_allocation_code_for_label(model) {
            Some(tac) => tac.clone(),
            None => {
                let known = registry.all_type_allocation_codes();
                let tac = self
                    .rng
                    .choose(&known)
                    .map(|tac| (*tac).clone())
                    .unwrap_or_else(TypeAllocationCode::fallback);
                debug!(model, %tac, "model not in catalog, using random type allocation code");
                tac
            }
        };

        let mut digits: Vec<u8> = tac.digits().collect();
        digits.extend((0..SERIAL_DIGITS).map(|_| self.rng.digit()));
        digits.push(luhn_check_digit(&digits));
        render_digits(&digits)
    }

    fn imsi(&mut self, region: &str, carrier: &str) -> String {
        let registry = self.registry;
        let mobile_country_code = match registry.mobile_country_code(region) {
            Some(code) => code,
            None => {
                debug!(region, "no mobile country code for region");
                FALLBACK_MOBILE_COUNTRY_CODE
            }
        };
        let network_code = match self.rng.choose(registry.network_codes(region, carrier)) {
            Some(code) => code.clone(),
            None => {
                let len = if self.rng.coin() { 3 } else { 2 };
                debug!(region, carrier, len, "no network codes registered, synthesizing one");
                self.rng.digits(len)
            }
        };
        let fill = IMSI_LEN.saturating_sub(mobile_country_code.len() + network_code.len());
        format!(
            "{mobile_country_code}{network_code}{}",
            self.rng.digits(fill)
        )
    }

    fn mac_address(&mut self) -> String {
        let mut octets = [0u8; 6];
        self.rng.fill_bytes(&mut octets);
        octets
            .iter()
            .map(|octet| hex::encode([*octet]))
            .collect::<Vec<_>>()
            .join(":")
    }

    fn android_id(&mut self) -> String {
        let mut bytes = [0u8; 8];
        self.rng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    fn app_version(&mut self) -> String {
        let major = self.rng.int_in(1, 5);
        let minor = self.rng.int_in(0, 20);
        let patch = self.rng.int_in(0, 50);
        format!("{major}.{minor}.{patch}")
    }

    fn system_version(&mut self) -> String {
        self.rng
            .choose(&SYSTEM_VERSIONS)
            .copied()
            .unwrap_or(SYSTEM_VERSIONS[0])
            .to_string()
    }

    /// Unicast dotted quad: first octet 1-223 without loopback, last 1-254.
    fn ip_address(&mut self) -> String {
        let mut first = self.rng.int_in(1, 222);
        if first >= 127 {
            first += 1;
        }
        let second = self.rng.int_in(0, 255);
        let third = self.rng.int_in(0, 255);
        let fourth = self.rng.int_in(1, 254);
        format!("{first}.{second}.{third}.{fourth}")
    }

    fn network_type(&mut self) -> String {
        self.rng
            .choose(&AccessTechnology::ALL)
            .copied()
            .unwrap_or(AccessTechnology::WiFi)
            .to_string()
    }

    fn sensor_reading(&mut self, range: f64) -> SensorReading {
        let mut axis = || round_to(self.rng.float_in(-range, range), 2);
        let x = axis();
        let y = axis();
        let z = axis();
        SensorReading::new(x, y, z)
    }
}
