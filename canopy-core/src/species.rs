//! Per-species reference data.
//!
//! A [`SpeciesProfile`] carries the growth and carbon parameters for a single
//! tree species. Profiles are immutable reference data: loaded once from a
//! catalog and shared by every estimate that follows.

use crate::errors::{CanopyError, CanopyResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Growth and carbon parameters for a single tree species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Common name used for catalog lookups (e.g. "Red Maple")
    pub common_name: String,
    /// Botanical name, matching the naming used by tree inventories
    /// (e.g. "Acer rubrum")
    pub scientific_name: String,
    /// Mean annual increase in diameter at breast height
    /// unit: cm / yr
    pub avg_dbh_growth_cm_per_year: FloatValue,
    /// Fraction of dry biomass that is elemental carbon
    /// unit: dimensionless, 0-1
    pub carbon_fraction: FloatValue,
    /// Probability a planted tree remains alive over the projection period
    /// unit: dimensionless, 0-1
    pub survival_rate: FloatValue,
}

impl SpeciesProfile {
    pub fn new(
        common_name: impl Into<String>,
        scientific_name: impl Into<String>,
        avg_dbh_growth_cm_per_year: FloatValue,
        carbon_fraction: FloatValue,
        survival_rate: FloatValue,
    ) -> Self {
        Self {
            common_name: common_name.into(),
            scientific_name: scientific_name.into(),
            avg_dbh_growth_cm_per_year,
            carbon_fraction,
            survival_rate,
        }
    }

    /// Check that the profile is physically meaningful.
    ///
    /// Carbon fraction and survival rate must lie in `[0, 1]` and the growth
    /// rate must be finite. A negative growth rate is accepted; the estimator
    /// clamps the derived DBH at zero.
    pub fn validate(&self) -> CanopyResult<()> {
        if !self.avg_dbh_growth_cm_per_year.is_finite() {
            return Err(self.invalid("DBH growth rate must be finite"));
        }
        if !(0.0..=1.0).contains(&self.carbon_fraction) {
            return Err(self.invalid("carbon fraction must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.survival_rate) {
            return Err(self.invalid("survival rate must be within [0, 1]"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> CanopyError {
        CanopyError::InvalidProfile {
            species: self.common_name.clone(),
            reason: reason.to_string(),
        }
    }
}
