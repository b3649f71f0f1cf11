use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Where the package catalog lives and how an empty one is reseeded
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_sample_seed")]
    pub sample_seed: u64,
}

fn default_sample_size() -> usize {
    20
}

fn default_sample_seed() -> u64 {
    42
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/travel_packages.json".to_string(),
            sample_size: default_sample_size(),
            sample_seed: default_sample_seed(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankingConfig {
    pub top_n: usize,
    /// Packages at or below this baseline percentage are dropped.
    pub min_compatibility: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            min_compatibility: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// File holding the bearer token. No file, no online fallback.
    pub api_key_file: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key_file: Some("openai_api_key.txt".to_string()),
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 30,
            max_tokens: 1500,
            temperature: 0.7,
        }
    }
}

/// Stay window used for dated booking links
#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    pub lead_days: u32,
    pub nights: u32,
    pub adults: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            lead_days: 30,
            nights: 5,
            adults: 2,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `WAYFARER__RANKING__TOP_N=5`
            .add_source(config::Environment::with_prefix("WAYFARER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
