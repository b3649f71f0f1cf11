use std::sync::Arc;
use std::time::Duration;
use wayfarer_catalog::BookingLinkBuilder;
use wayfarer_core::assistant::TravelAssistant;
use wayfarer_core::generator::PackageGenerator;
use wayfarer_core::repository::PackageRepository;
use wayfarer_core::PreferenceExtractor;
use wayfarer_offer::{
    AssistedConsultant, FallbackConfig, OnlineFallback, PackageRecommender, PreferenceCapture, RecommendationService,
};
use wayfarer_shared::Season;
use wayfarer_store::{
    read_api_key, ChatClient, ChatPackageGenerator, ChatTravelAssistant, Config, DisabledGenerator,
    FilePackageRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecommendationService>,
    pub capture: Arc<PreferenceCapture>,
    pub consultant: Arc<AssistedConsultant>,
}

impl AppState {
    pub fn new(service: RecommendationService, capture: PreferenceCapture, consultant: AssistedConsultant) -> Self {
        Self {
            service: Arc::new(service),
            capture: Arc::new(capture),
            consultant: Arc::new(consultant),
        }
    }

    /// Wires the file-backed catalog and, when an API key is present, the
    /// chat completion generator and assistant.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let file_repo = FilePackageRepository::new(&config.catalog.path);
        tracing::info!("Package catalog at {}", file_repo.path().display());
        let repo: Arc<dyn PackageRepository> = Arc::new(file_repo);
        let recommender = PackageRecommender::new(repo, config.ranking.clone(), config.catalog.clone());

        let api_key = config
            .generator
            .api_key_file
            .as_deref()
            .and_then(|path| read_api_key(path));
        let chat = api_key.map(|key| ChatClient::new(&config.generator, key)).transpose()?;
        let generator: Arc<dyn PackageGenerator>;
        let assistant: Arc<dyn TravelAssistant>;
        match chat {
            Some(chat) => {
                generator = Arc::new(ChatPackageGenerator::new(chat.clone(), &config.generator));
                assistant = Arc::new(ChatTravelAssistant::new(chat));
            }
            None => {
                tracing::warn!("No API key configured; online packages and chat answers disabled");
                generator = Arc::new(DisabledGenerator);
                assistant = Arc::new(DisabledGenerator);
            }
        }

        let links = BookingLinkBuilder::from_today(
            config.booking.lead_days,
            config.booking.nights,
            config.booking.adults,
        );
        let fallback = OnlineFallback::new(
            generator,
            links,
            FallbackConfig::new(config.generator.timeout_secs, Season::current()),
        );
        let timeout = Duration::from_secs(config.generator.timeout_secs);

        Ok(Self::new(
            RecommendationService::new(recommender, fallback),
            PreferenceCapture::new(PreferenceExtractor::new()?, assistant.clone(), timeout),
            AssistedConsultant::new(assistant, timeout),
        ))
    }
}
