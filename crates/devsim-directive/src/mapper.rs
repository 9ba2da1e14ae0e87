#![deny(unsafe_code)]

use tracing::debug;

use devsim_core::RandomSource;
use devsim_model::DeviceIdentity;
use devsim_registry::ReferenceRegistry;

use crate::directive::{Assignment, Directive, PropertyKey, SensorKind};
use crate::rules::{country_code, infer_brand, operator_names, sim_network_type};

const SERIAL_NUMBER_BYTES: usize = 8;
const ICCID_PREFIX: &str = "89";
const ICCID_RANDOM_DIGITS: usize = 10;
const BATTERY_LEVEL_MIN: u64 = 20;
const BATTERY_LEVEL_MAX: u64 = 90;

/// Translates identities into the ordered `dg` directive list that
/// configures one emulated device.
pub struct DirectiveMapper<'a, R> {
    registry: &'a ReferenceRegistry,
    rng: R,
}

impl<'a, R: RandomSource> DirectiveMapper<'a, R> {
    pub fn new(registry: &'a ReferenceRegistry, rng: R) -> Self {
        Self { registry, rng }
    }

    /// Directives for one identity. The serial number, ICCID and battery
    /// level are drawn fresh on every call.
    ///
    /// The list always contains exactly one geo fix and ends with the
    /// sensor-mock switch.
    pub fn to_directives(&mut self, identity: &DeviceIdentity) -> Vec<Directive> {
        let mut directives = Vec::new();

        if !identity.model.is_empty() {
            let brand = infer_brand(&identity.model);
            directives.push(Directive::config(PropertyKey::Manufacturer, brand));
            directives.push(Directive::config(PropertyKey::Brand, brand));
            directives.push(Directive::config(PropertyKey::Model, &identity.model));
            directives.push(Directive::config(PropertyKey::Device, &identity.model));
        }

        directives.push(Directive::config(
            PropertyKey::SerialNumber,
            self.serial_number(),
        ));

        if !identity.imei.is_empty() {
            directives.push(Directive::config(PropertyKey::Imei, &identity.imei));
        }

        self.push_sim_block(identity, &mut directives);

        if !identity.country.is_empty() {
            directives.push(Directive::config(
                PropertyKey::SimCountry,
                country_code(&identity.country),
            ));
        }

        let optional = [
            (PropertyKey::MacAddress, &identity.mac_address),
            (PropertyKey::AndroidId, &identity.android_id),
            (PropertyKey::WifiSsid, &identity.ssid),
            (PropertyKey::WifiIpAddress, &identity.ip_address),
        ];
        for (key, value) in optional {
            if !value.is_empty() {
                directives.push(Directive::config(key, value.as_str()));
            }
        }

        directives.push(Directive::GeoFix {
            longitude: identity.longitude,
            latitude: identity.latitude,
        });

        if let Some(reading) = identity.accelerometer_data {
            directives.push(Directive::Sensor {
                kind: SensorKind::Acceleration,
                reading,
            });
        }
        if let Some(reading) = identity.gyroscope_data {
            directives.push(Directive::Sensor {
                kind: SensorKind::Gyroscope,
                reading,
            });
        }

        let battery_level = self.rng.int_in(BATTERY_LEVEL_MIN, BATTERY_LEVEL_MAX);
        directives.push(Directive::config(
            PropertyKey::BatteryLevel,
            battery_level.to_string(),
        ));
        directives.push(Directive::config(PropertyKey::SensorMock, "true"));

        directives
    }

    /// One directive list per identity, in input order.
    pub fn to_directives_batch(&mut self, identities: &[DeviceIdentity]) -> Vec<Vec<Directive>> {
        identities
            .iter()
            .map(|identity| self.to_directives(identity))
            .collect()
    }

    /// SIM state, operator names, ICCID, MSISDN and network type. Skipped
    /// unless the region and carrier resolve to registered codes.
    fn push_sim_block(&mut self, identity: &DeviceIdentity, directives: &mut Vec<Directive>) {
        if identity.imsi.is_empty() || identity.region.is_empty() || identity.carrier.is_empty() {
            return;
        }
        let registry = self.registry;
        let mobile_country_code = registry.mobile_country_code(&identity.region);
        let network_code = registry
            .network_codes(&identity.region, &identity.carrier)
            .first();
        let (Some(mobile_country_code), Some(network_code)) = (mobile_country_code, network_code)
        else {
            debug!(
                region = %identity.region,
                carrier = %identity.carrier,
                "carrier codes not registered, skipping SIM directives"
            );
            return;
        };

        directives.push(Directive::Config(vec![
            Assignment::new(PropertyKey::SimState, "1"),
            Assignment::new(
                PropertyKey::SimNumeric,
                format!("{mobile_country_code}{network_code}"),
            ),
            Assignment::new(PropertyKey::Imsi, &identity.imsi),
        ]));

        let names = operator_names(&identity.carrier);
        directives.push(Directive::Config(vec![
            Assignment::new(PropertyKey::ServiceProviderName, names.service_provider_name),
            Assignment::new(PropertyKey::OperatorLongName, names.long_name),
            Assignment::new(PropertyKey::OperatorShortName, names.short_name),
        ]));

        let iccid = format!(
            "{ICCID_PREFIX}{mobile_country_code}{network_code}{}",
            self.rng.digits(ICCID_RANDOM_DIGITS)
        );
        directives.push(Directive::config(PropertyKey::Iccid, iccid));

        if !identity.phone_number.is_empty() {
            directives.push(Directive::config(
                PropertyKey::Msisdn,
                &identity.phone_number,
            ));
        }
        if !identity.network_type.is_empty() {
            directives.push(Directive::config(
                PropertyKey::NetworkType,
                sim_network_type(&identity.network_type),
            ));
        }
    }

    /// 16 uppercase hex characters, unrelated to the IMEI.
    fn serial_number(&mut self) -> String {
        let mut bytes = [0u8; SERIAL_NUMBER_BYTES];
        self.rng.fill_bytes(&mut bytes);
        hex::encode_upper(bytes)
    }
}

/// Render each directive as one line of text.
pub fn render_lines(directives: &[Directive]) -> Vec<String> {
    directives.iter().map(ToString::to_string).collect()
}
