//! Candidate ranking and species suggestion.
//!
//! # What This Module Does
//!
//! 1. Ranks candidate species by their estimate under a shared request
//! 2. Picks the best alternative strictly ahead of a baseline estimate
//! 3. Suggests a species for a city from inventory observations, preferring
//!    the species with the largest mean observed DBH that the catalog knows
//!
//! Candidates that fail to estimate (an out-of-range profile, typically) are
//! skipped with a log line rather than poisoning the whole ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use canopy_core::estimator::{EstimateRequest, EstimateResult, SequestrationEstimator};
use canopy_core::species::SpeciesProfile;
use canopy_core::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::registry::SpeciesRegistry;

/// One observation row of a municipal tree inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub city: String,
    /// Botanical name, matching [`SpeciesProfile::scientific_name`]
    pub scientific_name: String,
    /// Observed diameter at breast height
    /// unit: cm
    pub dbh_cm: FloatValue,
}

impl TreeRecord {
    pub fn new(
        city: impl Into<String>,
        scientific_name: impl Into<String>,
        dbh_cm: FloatValue,
    ) -> Self {
        Self {
            city: city.into(),
            scientific_name: scientific_name.into(),
            dbh_cm,
        }
    }
}

/// A candidate species paired with its estimate under the shared request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub profile: SpeciesProfile,
    pub result: EstimateResult,
}

/// Estimate every candidate and sort descending by sequestered CO2.
///
/// The sort is stable, so candidates with equal estimates keep their input
/// order. Candidates whose estimate fails are skipped.
pub fn rank_candidates(
    estimator: &SequestrationEstimator,
    candidates: &[SpeciesProfile],
    request: &EstimateRequest,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .filter_map(|profile| match estimator.estimate(profile, request) {
            Ok(result) => Some(RankedCandidate {
                profile: profile.clone(),
                result,
            }),
            Err(err) => {
                debug!("skipping candidate {}: {}", profile.common_name, err);
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .co2_metric_tons
            .partial_cmp(&a.result.co2_metric_tons)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Find the candidate with the highest estimate strictly greater than the
/// baseline, or none.
pub fn best_alternative(
    estimator: &SequestrationEstimator,
    candidates: &[SpeciesProfile],
    baseline: &EstimateResult,
    request: &EstimateRequest,
) -> Option<RankedCandidate> {
    rank_candidates(estimator, candidates, request)
        .into_iter()
        .find(|candidate| candidate.result.co2_metric_tons > baseline.co2_metric_tons)
}

/// Suggest a catalog species for a city from inventory observations.
///
/// Observations of the given city are grouped by botanical name and ordered
/// by mean observed DBH, largest first. The first species present in the
/// registry wins; a city with no observations, or none the catalog knows,
/// yields no suggestion.
pub fn suggest_for_city<'a>(
    inventory: &[TreeRecord],
    city: &str,
    registry: &'a SpeciesRegistry,
) -> Option<&'a SpeciesProfile> {
    let mut accumulated: HashMap<&str, (FloatValue, usize)> = HashMap::new();
    for record in inventory.iter().filter(|record| record.city == city) {
        let entry = accumulated
            .entry(record.scientific_name.as_str())
            .or_insert((0.0, 0));
        entry.0 += record.dbh_cm;
        entry.1 += 1;
    }

    let mut mean_dbh: Vec<(&str, FloatValue)> = accumulated
        .into_iter()
        .map(|(name, (total, count))| (name, total / count as FloatValue))
        .collect();

    // Largest mean DBH first; ties broken by name for determinism
    mean_dbh.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    mean_dbh
        .into_iter()
        .find_map(|(scientific_name, _)| registry.get_scientific(scientific_name).ok())
}
