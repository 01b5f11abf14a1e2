//! Species reference catalog.
//!
//! A [`SpeciesRegistry`] is the load-once table of species profiles the
//! dashboards select from. Profiles are keyed by common name; inventories
//! reference species by botanical name, so a secondary lookup is provided.

use canopy_core::errors::{CanopyError, CanopyResult};
use canopy_core::species::SpeciesProfile;
use log::debug;
use serde::{Deserialize, Serialize};

/// Catalog file format: a list of `[[species]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    species: Vec<SpeciesProfile>,
}

/// A load-once collection of species profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeciesRegistry {
    profiles: Vec<SpeciesProfile>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from profiles, validating each as it is added.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = SpeciesProfile>,
    ) -> CanopyResult<Self> {
        let mut registry = Self::new();
        for profile in profiles {
            registry.add_profile(profile)?;
        }
        Ok(registry)
    }

    /// Parse a TOML catalog with `[[species]]` tables.
    pub fn from_toml_str(content: &str) -> CanopyResult<Self> {
        let catalog: CatalogFile =
            toml::from_str(content).map_err(|e| CanopyError::InvalidCatalog(e.to_string()))?;
        Self::from_profiles(catalog.species)
    }

    /// Add a profile to the registry.
    ///
    /// The profile is validated and duplicate common names are rejected.
    pub fn add_profile(&mut self, profile: SpeciesProfile) -> CanopyResult<()> {
        profile.validate()?;
        if self
            .profiles
            .iter()
            .any(|existing| existing.common_name == profile.common_name)
        {
            return Err(CanopyError::DuplicateSpecies(profile.common_name));
        }

        debug!(
            "registered species {} ({})",
            profile.common_name, profile.scientific_name
        );
        self.profiles.push(profile);
        Ok(())
    }

    /// Look a species up by common name.
    pub fn get(&self, common_name: &str) -> CanopyResult<&SpeciesProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.common_name == common_name)
            .ok_or_else(|| CanopyError::MissingSpecies(common_name.to_string()))
    }

    /// Look a species up by botanical name, as used by tree inventories.
    pub fn get_scientific(&self, scientific_name: &str) -> CanopyResult<&SpeciesProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.scientific_name == scientific_name)
            .ok_or_else(|| CanopyError::MissingSpecies(scientific_name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Common names in registration order, for populating pickers.
    pub fn common_names(&self) -> Vec<&str> {
        self.profiles
            .iter()
            .map(|profile| profile.common_name.as_str())
            .collect()
    }

    /// Built-in catalog of common urban species.
    ///
    /// Growth rates and survival rates are typical street-tree values;
    /// carbon fractions follow the usual ~0.5 of dry biomass.
    pub fn reference_catalog() -> Self {
        let profiles = [
            ("Neem", "Azadirachta indica", 1.9, 0.50, 0.90),
            ("Banyan", "Ficus benghalensis", 2.2, 0.48, 0.85),
            ("Teak", "Tectona grandis", 1.4, 0.49, 0.80),
            ("Red Maple", "Acer rubrum", 0.8, 0.48, 0.85),
            ("Live Oak", "Quercus virginiana", 0.9, 0.50, 0.88),
            ("London Plane", "Platanus acerifolia", 1.1, 0.47, 0.82),
            ("Honey Locust", "Gleditsia triacanthos", 0.9, 0.46, 0.78),
            ("Silver Birch", "Betula pendula", 0.7, 0.48, 0.70),
        ]
        .map(|(common, scientific, growth, carbon, survival)| {
            SpeciesProfile::new(common, scientific, growth, carbon, survival)
        });

        Self::from_profiles(profiles).expect("reference catalog is valid")
    }
}
