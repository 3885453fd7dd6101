pub mod app_config;
pub mod suggestion_client;
pub mod network;
pub mod cache;

pub use app_config::Config;
pub use suggestion_client::HttpSuggestionSource;
pub use network::HttpNetwork;
pub use cache::MemoryCacheStorage;
