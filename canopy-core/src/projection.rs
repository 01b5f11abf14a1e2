//! Annual sequestration series.
//!
//! Dashboards that render the estimate over time consume a
//! [`SequestrationSeries`]: the cumulative estimate sampled at the end of each
//! year of the horizon. Rendering itself happens elsewhere; this module only
//! holds the data.

use crate::errors::{CanopyError, CanopyResult};
use crate::FloatValue;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Cumulative sequestration sampled at the end of each year of the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequestrationSeries {
    years: Array1<FloatValue>,
    co2_metric_tons: Array1<FloatValue>,
}

impl SequestrationSeries {
    /// Build a series from matching value and year axes.
    pub fn from_values(
        co2_metric_tons: Array1<FloatValue>,
        years: Array1<FloatValue>,
    ) -> CanopyResult<Self> {
        if co2_metric_tons.len() != years.len() {
            return Err(CanopyError::InvalidInput(format!(
                "series axes differ in length: {} values vs {} years",
                co2_metric_tons.len(),
                years.len()
            )));
        }
        Ok(Self {
            years,
            co2_metric_tons,
        })
    }

    pub fn years(&self) -> &Array1<FloatValue> {
        &self.years
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.co2_metric_tons
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Cumulative total at the end of the horizon.
    pub fn final_total(&self) -> Option<FloatValue> {
        self.co2_metric_tons.last().copied()
    }

    /// Iterate over `(year, cumulative metric tons)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FloatValue, FloatValue)> + '_ {
        self.years
            .iter()
            .copied()
            .zip(self.co2_metric_tons.iter().copied())
    }
}
