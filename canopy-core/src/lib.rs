pub mod constants;
pub mod errors;
pub mod estimator;
pub mod parameters;
pub mod projection;
pub mod species;

/// Floating point type used for all derived quantities.
pub type FloatValue = f64;
