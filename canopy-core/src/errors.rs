use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum CanopyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Species not found in catalog: {0}")]
    MissingSpecies(String),
    #[error("Invalid profile for {species}: {reason}")]
    InvalidProfile { species: String, reason: String },
    #[error("Species already registered in catalog: {0}")]
    DuplicateSpecies(String),
    #[error("Could not parse species catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenience type for `Result<T, CanopyError>`.
pub type CanopyResult<T> = Result<T, CanopyError>;
