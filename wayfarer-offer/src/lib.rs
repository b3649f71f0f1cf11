pub mod assisted;
pub mod consultation;
pub mod fallback;
pub mod ranker;
pub mod scoring;
pub mod service;

pub use assisted::{AssistedConsultant, PreferenceCapture};
pub use consultation::Consultant;
pub use fallback::{FallbackConfig, OnlineFallback};
pub use ranker::{rank_packages, PackageRecommender};
pub use scoring::{BaselineScorer, CompatibilityScorer, EnhancedScorer};
pub use service::{Recommendation, RecommendationService, RecommendationSource};
