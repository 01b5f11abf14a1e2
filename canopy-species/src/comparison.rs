//! Comparison summary.
//!
//! The plain-data bundle behind the dashboards' comparison chart and report:
//! the user's selection, its estimate, and the suggested alternative when one
//! exists. Rendering is the collaborators' job.

use canopy_core::estimator::EstimateResult;
use canopy_core::species::SpeciesProfile;
use canopy_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Summary of a baseline estimate against an optional suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Label for the user's selection (a custom nickname or the common name)
    pub selection: String,
    /// CO2 estimate for the user's selection
    /// unit: t
    pub baseline_co2_metric_tons: FloatValue,
    /// Common name of the suggested species, when a suggestion exists
    pub suggested_species: Option<String>,
    /// CO2 estimate for the suggested species
    /// unit: t
    pub suggested_co2_metric_tons: Option<FloatValue>,
}

impl ComparisonSummary {
    pub fn new(
        selection: impl Into<String>,
        baseline: &EstimateResult,
        suggestion: Option<(&SpeciesProfile, &EstimateResult)>,
    ) -> Self {
        Self {
            selection: selection.into(),
            baseline_co2_metric_tons: baseline.co2_metric_tons,
            suggested_species: suggestion.map(|(profile, _)| profile.common_name.clone()),
            suggested_co2_metric_tons: suggestion.map(|(_, result)| result.co2_metric_tons),
        }
    }

    /// Margin by which the suggestion beats the baseline, when it does.
    pub fn advantage_metric_tons(&self) -> Option<FloatValue> {
        self.suggested_co2_metric_tons
            .map(|suggested| suggested - self.baseline_co2_metric_tons)
            .filter(|advantage| *advantage > 0.0)
    }

    /// Whether the suggestion strictly outperforms the baseline.
    pub fn suggestion_wins(&self) -> bool {
        self.advantage_metric_tons().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::estimator::{EstimateRequest, SequestrationEstimator};

    fn estimate(growth: FloatValue) -> EstimateResult {
        let profile = SpeciesProfile::new("Any", "Arbor quaelibet", growth, 0.5, 0.9);
        let request = EstimateRequest::new(20, 10).unwrap();
        SequestrationEstimator::new()
            .estimate(&profile, &request)
            .unwrap()
    }

    #[test]
    fn summary_without_suggestion() {
        let summary = ComparisonSummary::new("My Green Hero", &estimate(0.5), None);

        assert_eq!(summary.suggested_species, None);
        assert_eq!(summary.advantage_metric_tons(), None);
        assert!(!summary.suggestion_wins());
    }

    #[test]
    fn winning_suggestion_reports_its_margin() {
        let baseline = estimate(0.5);
        let better = estimate(1.0);
        let profile = SpeciesProfile::new("Neem", "Azadirachta indica", 1.0, 0.5, 0.9);

        let summary = ComparisonSummary::new("My Tree", &baseline, Some((&profile, &better)));

        assert_eq!(summary.suggested_species.as_deref(), Some("Neem"));
        assert!(summary.suggestion_wins());
        let advantage = summary.advantage_metric_tons().unwrap();
        assert!(
            (advantage - (better.co2_metric_tons - baseline.co2_metric_tons)).abs() < 1e-12
        );
    }

    #[test]
    fn losing_suggestion_has_no_advantage() {
        let baseline = estimate(1.0);
        let worse = estimate(0.5);
        let profile = SpeciesProfile::new("Birch", "Betula pendula", 0.5, 0.5, 0.9);

        let summary = ComparisonSummary::new("My Tree", &baseline, Some((&profile, &worse)));

        assert!(!summary.suggestion_wins());
        assert_eq!(summary.advantage_metric_tons(), None);
    }

    #[test]
    fn summary_serializes_for_rendering_collaborators() {
        let summary = ComparisonSummary::new("My Tree", &estimate(0.5), None);
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"selection\":\"My Tree\""));
        assert!(json.contains("baseline_co2_metric_tons"));
    }
}
