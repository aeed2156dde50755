//! Configuration system for reviewlens.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod defaults;
pub mod model_config;
pub mod observability_config;
pub mod reviewlens_config;
pub mod scraper_config;
pub mod server_config;
pub mod text_config;

pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use reviewlens_config::{CliOverrides, ReviewLensConfig};
pub use scraper_config::ScraperConfig;
pub use server_config::ServerConfig;
pub use text_config::{LexicalReduction, SpellingProvider, TextConfig};
