//! Tree CO2 sequestration estimation.
//!
//! `canopy` ties together the estimation core ([`canopy_core`]) and the
//! species catalog and selection logic ([`canopy_species`]) behind one
//! import, and adds the lookup-then-estimate entry point the dashboards use.

pub use canopy_core::errors::{CanopyError, CanopyResult};
pub use canopy_core::estimator::{EstimateRequest, EstimateResult, SequestrationEstimator};
pub use canopy_core::parameters::AllometricParameters;
pub use canopy_core::projection::SequestrationSeries;
pub use canopy_core::species::SpeciesProfile;
pub use canopy_core::FloatValue;
pub use canopy_species::{
    best_alternative, rank_candidates, suggest_for_city, ComparisonSummary, RankedCandidate,
    SpeciesRegistry, TreeRecord,
};

/// Look a species up by common name and estimate with default parameters.
///
/// Surfaces [`CanopyError::MissingSpecies`] on a lookup miss and
/// [`CanopyError::InvalidInput`] from request construction unchanged.
pub fn estimate_for_species(
    registry: &SpeciesRegistry,
    common_name: &str,
    request: &EstimateRequest,
) -> CanopyResult<EstimateResult> {
    let profile = registry.get(common_name)?;
    SequestrationEstimator::new().estimate(profile, request)
}
