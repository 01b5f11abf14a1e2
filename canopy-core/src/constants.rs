//! Physical constants shared across the estimation pipeline.

use crate::FloatValue;

/// Mass of CO2 formed per unit mass of elemental carbon
/// unit: kg / kg
///
/// Molar mass ratio of CO2 to C (44 / 12), rounded to the value used in
/// urban forestry carbon accounting.
pub const CO2_PER_CARBON: FloatValue = 3.67;

/// Kilograms per metric ton
/// unit: kg / t
pub const KG_PER_TONNE: FloatValue = 1000.0;
