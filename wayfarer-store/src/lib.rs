pub mod app_config;
pub mod assistant_client;
pub mod chat;
pub mod generator_client;
pub mod package_repo;

pub use app_config::Config;
pub use assistant_client::ChatTravelAssistant;
pub use chat::{read_api_key, ChatClient};
pub use generator_client::{ChatPackageGenerator, DisabledGenerator};
pub use package_repo::{FilePackageRepository, InMemoryPackageRepository};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed package file: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
