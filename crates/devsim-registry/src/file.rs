//! On-disk shape of the reference tables.
//!
//! ```json
//! {
//!   "regions": {
//!     "China": {
//!       "mobile_country_code": "460",
//!       "phone_prefixes": ["139", "138"],
//!       "carriers": { "China Mobile": ["00", "02", "07"] }
//!     }
//!   },
//!   "models": { "Samsung": { "Galaxy S25": "35050556" } }
//! }
//! ```
//!
//! The same structure is accepted as TOML.

#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use devsim_model::{BrandCatalog, Region, TypeAllocationCode};

use crate::error::RegistryError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceFile {
    #[serde(default)]
    pub regions: BTreeMap<String, RegionEntry>,
    /// Brand to model name to type allocation code.
    #[serde(default)]
    pub models: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub mobile_country_code: String,
    #[serde(default)]
    pub phone_prefixes: Vec<String>,
    /// Carrier name to network codes.
    #[serde(default)]
    pub carriers: BTreeMap<String, Vec<String>>,
}

impl ReferenceFile {
    /// Read and parse a `.json` or `.toml` reference file.
    pub fn read(path: &Path) -> Result<Self, RegistryError> {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
            _ => {
                return Err(RegistryError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        let contents =
            std::fs::read_to_string(path).map_err(|source| RegistryError::io(path, source))?;
        match format {
            FileFormat::Json => {
                serde_json::from_str(&contents).map_err(|source| RegistryError::Json {
                    path: path.to_path_buf(),
                    source,
                })
            }
            FileFormat::Toml => toml::from_str(&contents).map_err(|source| RegistryError::Toml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn into_records(self) -> Result<(Vec<Region>, Vec<BrandCatalog>), RegistryError> {
        let mut regions = Vec::with_capacity(self.regions.len());
        for (name, entry) in self.regions {
            regions.push(Region::new(
                name,
                entry.mobile_country_code,
                entry.carriers,
                entry.phone_prefixes,
            )?);
        }

        let mut brands = Vec::with_capacity(self.models.len());
        for (brand, models) in self.models {
            let mut codes = BTreeMap::new();
            for (model, code) in models {
                let tac = TypeAllocationCode::new(code).map_err(|source| {
                    RegistryError::InvalidModel {
                        brand: brand.clone(),
                        model: model.clone(),
                        source,
                    }
                })?;
                codes.insert(model, tac);
            }
            brands.push(BrandCatalog::new(brand, codes)?);
        }
        Ok((regions, brands))
    }

    pub(crate) fn from_records<'a>(
        regions: impl Iterator<Item = &'a Region>,
        brands: impl Iterator<Item = &'a BrandCatalog>,
    ) -> Self {
        let regions = regions
            .map(|region| {
                (
                    region.name.clone(),
                    RegionEntry {
                        mobile_country_code: region.mobile_country_code.clone(),
                        carriers: region.carriers.clone(),
                        phone_prefixes: region.phone_prefixes.clone(),
                    },
                )
            })
            .collect();
        let models = brands
            .map(|catalog| {
                let models = catalog
                    .models
                    .iter()
                    .map(|(model, tac)| (model.clone(), tac.as_str().to_string()))
                    .collect();
                (catalog.brand.clone(), models)
            })
            .collect();
        Self { regions, models }
    }
}

enum FileFormat {
    Json,
    Toml,
}
