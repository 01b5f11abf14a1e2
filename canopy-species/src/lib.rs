pub mod comparison;
pub mod registry;
pub mod selection;

pub use comparison::ComparisonSummary;
pub use registry::SpeciesRegistry;
pub use selection::{best_alternative, rank_candidates, suggest_for_city, RankedCandidate, TreeRecord};
