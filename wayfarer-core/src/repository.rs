use async_trait::async_trait;
use wayfarer_shared::Package;

pub type RepositoryResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Repository trait for the package catalog
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// All packages, in stored order.
    async fn list_packages(&self) -> RepositoryResult<Vec<Package>>;

    /// Replace the stored catalog.
    async fn persist(&self, packages: &[Package]) -> RepositoryResult<()>;
}
