use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub suggestions: SuggestionConfig,
    pub form: FormConfig,
    pub offline: OfflineConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestionConfig {
    pub endpoint: String,
    /// Trimmed queries shorter than this never reach the endpoint
    pub min_query_length: usize,
    pub timeout_ms: u64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:10000/search-airports".to_string(),
            min_query_length: 2,
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FormConfig {
    pub submit_label: String,
    pub working_label: String,
    pub multi_city_message: String,
    pub lookup_failed_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_label: "Search Flights".to_string(),
            working_label: "Searching...".to_string(),
            multi_city_message: "Please select a second destination for Multi-City".to_string(),
            lookup_failed_message: "Airport suggestions are unavailable right now".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OfflineConfig {
    pub cache_name: String,
    pub fallback_path: String,
    /// Origin that relative request paths are resolved against
    pub origin: String,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            cache_name: "flightfinder-v1".to_string(),
            fallback_path: "/offline".to_string(),
            origin: "http://localhost:10000".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layer `default`, `{RUN_MODE}` and `local` files from `dir`, then the
    /// `FLIGHTFINDER__*` environment on top.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a built-in default, so all files are optional
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::from(dir.join("local")).required(false))
            // Eg.. `FLIGHTFINDER__SUGGESTIONS__MIN_QUERY_LENGTH=1`
            .add_source(config::Environment::with_prefix("FLIGHTFINDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
