//! Property tests for the sequestration estimator.
//!
//! These tests verify the behavioural guarantees the dashboards rely on:
//! - the estimate never decreases when the horizon or planting grows
//! - the estimate is never negative

use approx::assert_relative_eq;
use canopy_core::estimator::{EstimateRequest, SequestrationEstimator};
use canopy_core::species::SpeciesProfile;

fn profile(growth: f64) -> SpeciesProfile {
    SpeciesProfile::new("Test Species", "Arbor exempli", growth, 0.5, 0.9)
}

#[test]
fn estimate_is_monotonic_in_years() {
    let estimator = SequestrationEstimator::new();
    let profile = profile(0.7);

    let mut previous = 0.0;
    for years in 1..=50 {
        let request = EstimateRequest::new(years, 10).unwrap();
        let result = estimator.estimate(&profile, &request).unwrap();
        assert!(
            result.co2_metric_tons >= previous,
            "estimate decreased at year {}: {} -> {}",
            years,
            previous,
            result.co2_metric_tons
        );
        previous = result.co2_metric_tons;
    }
}

#[test]
fn estimate_is_monotonic_in_tree_count() {
    let estimator = SequestrationEstimator::new();
    let profile = profile(0.7);

    let mut previous = 0.0;
    for tree_count in 1..=100 {
        let request = EstimateRequest::new(20, tree_count).unwrap();
        let result = estimator.estimate(&profile, &request).unwrap();
        assert!(
            result.co2_metric_tons >= previous,
            "estimate decreased at {} trees",
            tree_count
        );
        previous = result.co2_metric_tons;
    }
}

#[test]
fn estimate_scales_linearly_with_tree_count() {
    let estimator = SequestrationEstimator::new();
    let profile = profile(0.7);

    let one = estimator
        .estimate(&profile, &EstimateRequest::new(20, 1).unwrap())
        .unwrap();
    let forty = estimator
        .estimate(&profile, &EstimateRequest::new(20, 40).unwrap())
        .unwrap();

    assert_relative_eq!(forty.co2_metric_tons, one.co2_metric_tons * 40.0);
}

#[test]
fn estimate_is_never_negative() {
    let estimator = SequestrationEstimator::new();

    for growth in [-1.0, -0.1, 0.0, 0.1, 2.5] {
        let profile = profile(growth);
        for years in [1, 5, 50] {
            let request = EstimateRequest::new(years, 25).unwrap();
            let result = estimator.estimate(&profile, &request).unwrap();
            assert!(
                result.co2_metric_tons >= 0.0,
                "negative estimate for growth {} over {} yr",
                growth,
                years
            );
        }
    }
}

#[test]
fn zero_growth_sequesters_nothing() {
    let estimator = SequestrationEstimator::new();
    let request = EstimateRequest::new(30, 100).unwrap();
    let result = estimator.estimate(&profile(0.0), &request).unwrap();
    assert_eq!(result.co2_metric_tons, 0.0);
}
