//! Error handling for reviewlens.
//! One error enum per subsystem, `thiserror` only, aggregated by `ReviewLensError`.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod reviewlens_error;
pub mod scrape_error;
pub mod text_error;
pub mod training_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use model_error::ModelError;
pub use reviewlens_error::{ReviewLensError, ReviewLensResult};
pub use scrape_error::ScrapeError;
pub use text_error::TextError;
pub use training_error::TrainingError;
