/// reviewlens version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rating substituted whenever a rating field cannot be parsed as a finite float.
pub const DEFAULT_RATING: f64 = 3.0;

/// Placeholder the scraper emits for a missing rating or review text.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of leading non-embedding features: rating and token count.
pub const LEADING_FEATURES: usize = 2;

/// Display label for genuine reviews.
pub const LABEL_REAL: &str = "Real (Original)";

/// Display label for computer-generated reviews.
pub const LABEL_FAKE: &str = "Fake (Computer Generated)";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "REVIEWLENS_LOG";
