//! Reference-table records: regions with their carriers, and brand catalogs.
//!
//! Both records are immutable once validated. The registry crate owns the
//! collections of them and the lookup contract.

use std::collections::BTreeMap;

use devsim_codec::{is_digits, is_digits_in};
use serde::{Deserialize, Serialize};

use crate::{ModelError, TypeAllocationCode};

/// A country/region with its mobile country code, carriers and dialing prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// Exactly 3 digits.
    pub mobile_country_code: String,
    /// Carrier name to its registered network codes, in registration order.
    pub carriers: BTreeMap<String, Vec<String>>,
    /// Local phone-number prefixes.
    pub phone_prefixes: Vec<String>,
}

impl Region {
    /// Build a region, rejecting malformed country or network codes.
    pub fn new(
        name: impl Into<String>,
        mobile_country_code: impl Into<String>,
        carriers: BTreeMap<String, Vec<String>>,
        phone_prefixes: Vec<String>,
    ) -> Result<Self, ModelError> {
        let region = Self {
            name: name.into(),
            mobile_country_code: mobile_country_code.into(),
            carriers,
            phone_prefixes,
        };
        region.validate()?;
        Ok(region)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyRegionName);
        }
        if !is_digits(&self.mobile_country_code, 3) {
            return Err(ModelError::InvalidMobileCountryCode {
                region: self.name.clone(),
                code: self.mobile_country_code.clone(),
            });
        }
        for (carrier, codes) in &self.carriers {
            if let Some(bad) = codes.iter().find(|code| !is_digits_in(code, 2..=3)) {
                return Err(ModelError::InvalidNetworkCode {
                    region: self.name.clone(),
                    carrier: carrier.clone(),
                    code: bad.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn carrier_names(&self) -> impl Iterator<Item = &str> {
        self.carriers.keys().map(String::as_str)
    }

    pub fn network_codes(&self, carrier: &str) -> &[String] {
        self.carriers.get(carrier).map(Vec::as_slice).unwrap_or_default()
    }
}

/// All registered models of one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCatalog {
    pub brand: String,
    /// Model name to type allocation code.
    pub models: BTreeMap<String, TypeAllocationCode>,
}

impl BrandCatalog {
    pub fn new(
        brand: impl Into<String>,
        models: BTreeMap<String, TypeAllocationCode>,
    ) -> Result<Self, ModelError> {
        let brand = brand.into();
        if brand.trim().is_empty() {
            return Err(ModelError::EmptyBrandName);
        }
        Ok(Self { brand, models })
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn type_allocation_code(&self, model: &str) -> Option<&TypeAllocationCode> {
        self.models.get(model)
    }
}
