#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use devsim_model::{BrandCatalog, Region, TypeAllocationCode, split_model_label};

use crate::error::RegistryError;
use crate::file::ReferenceFile;

/// Immutable reference tables: regions with their carriers and dialing
/// prefixes, and brands with their models' type allocation codes.
///
/// Every lookup on an unknown key returns an empty slice or `None`. Callers
/// are expected to fall back rather than fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRegistry {
    regions: BTreeMap<String, Region>,
    brands: BTreeMap<String, BrandCatalog>,
}

impl ReferenceRegistry {
    /// Build a registry from validated records.
    pub fn new<R, B>(regions: R, brands: B) -> Result<Self, RegistryError>
    where
        R: IntoIterator<Item = Region>,
        B: IntoIterator<Item = BrandCatalog>,
    {
        let mut region_map = BTreeMap::new();
        for region in regions {
            region.validate()?;
            if region_map.contains_key(&region.name) {
                return Err(RegistryError::DuplicateRegion(region.name));
            }
            region_map.insert(region.name.clone(), region);
        }
        let mut brand_map = BTreeMap::new();
        for catalog in brands {
            if brand_map.contains_key(&catalog.brand) {
                return Err(RegistryError::DuplicateBrand(catalog.brand));
            }
            brand_map.insert(catalog.brand.clone(), catalog);
        }
        Ok(Self {
            regions: region_map,
            brands: brand_map,
        })
    }

    /// The built-in catalog: China, Hong Kong, Macao, Taiwan and USA, with six
    /// handset brands.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_reference_file(crate::builtin::reference_file())
    }

    /// Load a reference file; the format is chosen by extension.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let file = ReferenceFile::read(path)?;
        Self::from_reference_file(file)
    }

    pub fn from_reference_file(file: ReferenceFile) -> Result<Self, RegistryError> {
        let (regions, brands) = file.into_records()?;
        Self::new(regions, brands)
    }

    /// Export the tables in the on-disk reference-file shape.
    pub fn to_reference_file(&self) -> ReferenceFile {
        ReferenceFile::from_records(self.regions.values(), self.brands.values())
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn brand_catalogs(&self) -> impl Iterator<Item = &BrandCatalog> {
        self.brands.values()
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    pub fn list_regions(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn mobile_country_code(&self, region: &str) -> Option<&str> {
        self.region(region)
            .map(|region| region.mobile_country_code.as_str())
    }

    pub fn carriers_of(&self, region: &str) -> Vec<&str> {
        self.region(region)
            .map(|region| region.carrier_names().collect())
            .unwrap_or_default()
    }

    pub fn network_codes(&self, region: &str, carrier: &str) -> &[String] {
        self.region(region)
            .map(|region| region.network_codes(carrier))
            .unwrap_or_default()
    }

    pub fn phone_prefixes(&self, region: &str) -> &[String] {
        self.region(region)
            .map(|region| region.phone_prefixes.as_slice())
            .unwrap_or_default()
    }

    pub fn brands(&self) -> Vec<&str> {
        self.brands.keys().map(String::as_str).collect()
    }

    pub fn models_of(&self, brand: &str) -> Vec<&str> {
        self.brands
            .get(brand)
            .map(|catalog| catalog.model_names().collect())
            .unwrap_or_default()
    }

    pub fn type_allocation_code(&self, brand: &str, model: &str) -> Option<&TypeAllocationCode> {
        self.brands
            .get(brand)
            .and_then(|catalog| catalog.type_allocation_code(model))
    }

    /// Look up the code for a `"brand model"` label.
    pub fn type_allocation_code_for_label(&self, label: &str) -> Option<&TypeAllocationCode> {
        let (brand, model) = split_model_label(label);
        self.type_allocation_code(brand, model)
    }

    /// Every registered code, in brand then model order.
    pub fn all_type_allocation_codes(&self) -> Vec<&TypeAllocationCode> {
        self.brands
            .values()
            .flat_map(|catalog| catalog.models.values())
            .collect()
    }

    /// Every `"brand model"` label.
    pub fn all_models(&self) -> Vec<String> {
        self.brands
            .values()
            .flat_map(|catalog| {
                catalog
                    .model_names()
                    .map(move |model| format!("{} {model}", catalog.brand))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_return_empty_results() {
        let registry = ReferenceRegistry::builtin().unwrap();
        assert!(registry.mobile_country_code("Atlantis").is_none());
        assert!(registry.carriers_of("Atlantis").is_empty());
        assert!(registry.network_codes("China", "Atlantis Telecom").is_empty());
        assert!(registry.network_codes("Atlantis", "China Mobile").is_empty());
        assert!(registry.phone_prefixes("Atlantis").is_empty());
        assert!(registry.models_of("Nokia").is_empty());
        assert!(registry.type_allocation_code("Nokia", "3310").is_none());
        assert!(registry.type_allocation_code_for_label("Nokia").is_none());
    }

    #[test]
    fn rejects_duplicate_regions() {
        let china = ReferenceRegistry::builtin()
            .unwrap()
            .region("China")
            .cloned()
            .unwrap();
        let err = ReferenceRegistry::new([china.clone(), china], Vec::<BrandCatalog>::new()).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRegion(name) if name == "China"));
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = ReferenceRegistry::new(Vec::<Region>::new(), Vec::<BrandCatalog>::new()).unwrap();
        assert!(registry.list_regions().is_empty());
        assert!(registry.all_type_allocation_codes().is_empty());
    }
}
