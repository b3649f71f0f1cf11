use async_trait::async_trait;
use wayfarer_shared::{PackageDraft, Preferences};

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Package generator is not configured")]
    Unavailable,

    #[error("Generator request failed: {0}")]
    Transport(String),

    #[error("Generator returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("Generator did not answer within {0} seconds")]
    Timeout(u64),
}

/// External source of synthetic packages, consulted when the catalog has no match
#[async_trait]
pub trait PackageGenerator: Send + Sync {
    /// Best-effort drafts for the given preferences. May be empty.
    async fn generate_packages(
        &self,
        preferences: &Preferences,
    ) -> Result<Vec<PackageDraft>, GeneratorError>;
}
