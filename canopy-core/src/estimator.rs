//! Sequestration estimator component
//!
//! Estimates the CO2 a planting sequesters over a time horizon from a species
//! profile and a validated request.
//!
//! # What This Component Does
//!
//! 1. Projects DBH linearly from the species growth rate, clamped at zero
//! 2. Converts DBH to standing dry biomass via the allometric formula
//! 3. Converts biomass to elemental carbon, then to CO2 mass
//! 4. Scales by tree count and survival rate and reports metric tons
//!
//! # Inputs
//!
//! - [`SpeciesProfile`] - per-species growth and carbon parameters
//! - [`EstimateRequest`] - horizon (yr) and number of trees planted
//!
//! # Outputs
//!
//! - [`EstimateResult`] - sequestered CO2 (t) plus the per-tree intermediate
//!   quantities surfaced in reports

use crate::constants::KG_PER_TONNE;
use crate::errors::{CanopyError, CanopyResult};
use crate::parameters::AllometricParameters;
use crate::projection::SequestrationSeries;
use crate::species::SpeciesProfile;
use crate::FloatValue;
use log::trace;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A validated estimation request.
///
/// Construction rejects a zero horizon or a zero tree count, so every request
/// that reaches the estimator is usable as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    years: u32,
    tree_count: u32,
}

impl EstimateRequest {
    pub fn new(years: u32, tree_count: u32) -> CanopyResult<Self> {
        if years == 0 {
            return Err(CanopyError::InvalidInput(
                "projection horizon must be at least one year".to_string(),
            ));
        }
        if tree_count == 0 {
            return Err(CanopyError::InvalidInput(
                "tree count must be at least one".to_string(),
            ));
        }
        Ok(Self { years, tree_count })
    }

    /// Projection horizon (yr).
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Number of trees planted.
    pub fn tree_count(&self) -> u32 {
        self.tree_count
    }
}

/// Result of a sequestration estimate.
///
/// The headline figure is [`co2_metric_tons`](Self::co2_metric_tons); the
/// remaining fields are the per-tree intermediates of the allometric chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Total sequestered CO2 across the planting
    /// unit: t
    pub co2_metric_tons: FloatValue,
    /// Projected diameter at breast height of a single tree at the horizon
    /// unit: cm
    pub avg_dbh_cm: FloatValue,
    /// Standing dry biomass of a single tree at the horizon
    /// unit: kg
    pub biomass_kg: FloatValue,
    /// Elemental carbon stored in a single tree at the horizon
    /// unit: kg
    pub carbon_kg: FloatValue,
}

/// Sequestration estimator.
///
/// Implements the closed-form estimate:
///
/// $$\text{CO}_2 = \frac{a \cdot (g t)^b \cdot t \cdot f_C \cdot r \cdot n \cdot s}{1000}$$
///
/// Where:
/// - $g$ is the species DBH growth rate (cm/yr), with $g t$ clamped at zero
/// - $t$ is the horizon (yr), $n$ the tree count, $s$ the survival rate
/// - $a$, $b$, $r$ come from [`AllometricParameters`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequestrationEstimator {
    parameters: AllometricParameters,
}

impl SequestrationEstimator {
    /// Create an estimator with default allometric parameters.
    pub fn new() -> Self {
        Self::from_parameters(AllometricParameters::default())
    }

    /// Create an estimator from parameters.
    pub fn from_parameters(parameters: AllometricParameters) -> Self {
        Self { parameters }
    }

    /// Solve the allometric chain for one horizon.
    ///
    /// This is the core arithmetic, extracted for testability. The profile is
    /// assumed valid; [`estimate`](Self::estimate) validates before calling.
    ///
    /// # Returns
    ///
    /// (dbh_cm, biomass_kg, carbon_kg, co2_metric_tons)
    pub fn solve_horizon(
        &self,
        profile: &SpeciesProfile,
        years: FloatValue,
        tree_count: FloatValue,
    ) -> (FloatValue, FloatValue, FloatValue, FloatValue) {
        // A shrinking DBH has no physical meaning for a new planting
        let dbh_cm = (profile.avg_dbh_growth_cm_per_year * years).max(0.0);
        let biomass_kg = self.parameters.biomass_kg(dbh_cm, years);
        let carbon_kg = biomass_kg * profile.carbon_fraction;
        let co2_kg = self.parameters.co2_kg(carbon_kg);
        let co2_metric_tons = co2_kg * tree_count * profile.survival_rate / KG_PER_TONNE;

        (dbh_cm, biomass_kg, carbon_kg, co2_metric_tons)
    }

    /// Estimate the CO2 sequestered by a planting over the request's horizon.
    pub fn estimate(
        &self,
        profile: &SpeciesProfile,
        request: &EstimateRequest,
    ) -> CanopyResult<EstimateResult> {
        profile.validate()?;
        trace!(
            "estimating {} over {} yr for {} trees",
            profile.common_name,
            request.years(),
            request.tree_count()
        );

        let (avg_dbh_cm, biomass_kg, carbon_kg, co2_metric_tons) = self.solve_horizon(
            profile,
            FloatValue::from(request.years()),
            FloatValue::from(request.tree_count()),
        );

        Ok(EstimateResult {
            co2_metric_tons,
            avg_dbh_cm,
            biomass_kg,
            carbon_kg,
        })
    }

    /// Evaluate the estimate at the end of each year up to the horizon.
    ///
    /// The resulting series is cumulative; its final point equals the scalar
    /// [`estimate`](Self::estimate) at the same horizon.
    pub fn project(
        &self,
        profile: &SpeciesProfile,
        request: &EstimateRequest,
    ) -> CanopyResult<SequestrationSeries> {
        profile.validate()?;
        let tree_count = FloatValue::from(request.tree_count());

        let years = Array1::from_iter((1..=request.years()).map(FloatValue::from));
        let totals = years.mapv(|year| {
            let (_, _, _, co2_metric_tons) = self.solve_horizon(profile, year, tree_count);
            co2_metric_tons
        });

        SequestrationSeries::from_values(totals, years)
    }

    /// Get the parameters.
    pub fn parameters(&self) -> &AllometricParameters {
        &self.parameters
    }
}
