pub mod assistant;
pub mod extraction;
pub mod generator;
pub mod repository;

pub use assistant::TravelAssistant;
pub use extraction::{Confidence, Extraction, PreferenceExtractor};
pub use generator::{GeneratorError, PackageGenerator};
pub use repository::{PackageRepository, RepositoryResult};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
