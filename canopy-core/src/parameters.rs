//! Allometric Estimation Parameters
//!
//! Parameters of the allometric chain from tree size to stored CO2, shared by
//! every species. Species-specific inputs (growth rate, carbon fraction,
//! survival rate) live on [`crate::species::SpeciesProfile`] instead.

use crate::constants::CO2_PER_CARBON;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters of the allometric sequestration formula.
///
/// The estimate follows the standard chain from size to stored CO2:
///
/// $$\text{biomass} = a \times \text{DBH}^{b} \times t$$
/// $$\text{CO}_2 = \text{biomass} \times f_C \times r_{CO_2/C}$$
///
/// Where:
/// - $a$ is the biomass coefficient
/// - $b$ is the DBH exponent
/// - $t$ is the horizon in years
/// - $f_C$ is the species carbon fraction
/// - $r_{CO_2/C}$ is the CO2-to-carbon mass ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllometricParameters {
    /// Coefficient of the biomass allometry
    /// unit: kg / cm^2 / yr
    /// default: 0.25
    pub biomass_coefficient: FloatValue,

    /// Exponent applied to DBH in the biomass allometry
    /// unit: dimensionless
    /// default: 2.0
    pub dbh_exponent: FloatValue,

    /// Mass of CO2 formed per unit mass of elemental carbon
    /// unit: kg / kg
    /// default: 3.67 (molar mass ratio 44/12)
    pub co2_per_carbon: FloatValue,
}

impl Default for AllometricParameters {
    fn default() -> Self {
        Self {
            biomass_coefficient: 0.25,
            dbh_exponent: 2.0,
            co2_per_carbon: CO2_PER_CARBON,
        }
    }
}

impl AllometricParameters {
    /// Standing dry biomass of a single tree (kg).
    ///
    /// Calculated as `biomass_coefficient * dbh^dbh_exponent * years`.
    pub fn biomass_kg(&self, dbh_cm: FloatValue, years: FloatValue) -> FloatValue {
        self.biomass_coefficient * dbh_cm.powf(self.dbh_exponent) * years
    }

    /// CO2 mass equivalent of a carbon mass (kg).
    pub fn co2_kg(&self, carbon_kg: FloatValue) -> FloatValue {
        carbon_kg * self.co2_per_carbon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = AllometricParameters::default();
        assert!((params.biomass_coefficient - 0.25).abs() < 1e-12);
        assert!((params.dbh_exponent - 2.0).abs() < 1e-12);
        assert!((params.co2_per_carbon - 3.67).abs() < 1e-12);
    }

    #[test]
    fn test_biomass_is_quadratic_in_dbh() {
        let params = AllometricParameters::default();
        let single = params.biomass_kg(10.0, 20.0);
        let doubled = params.biomass_kg(20.0, 20.0);
        assert!(
            (doubled / single - 4.0).abs() < 1e-12,
            "Doubling DBH should quadruple biomass, got factor {}",
            doubled / single
        );
    }

    #[test]
    fn test_biomass_reference_value() {
        // DBH 10 cm over 20 years: 0.25 * 100 * 20 = 500 kg
        let params = AllometricParameters::default();
        assert!((params.biomass_kg(10.0, 20.0) - 500.0).abs() < 1e-9);
    }
}
