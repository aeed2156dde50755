// Single source of truth for all default values.

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "reviewlens.toml";

// --- Text ---
pub const DEFAULT_MAX_REVIEW_CHARS: usize = 10_000;
pub const DEFAULT_NORMALIZATION_CACHE_SIZE: u64 = 10_000;

// --- Model ---
pub const DEFAULT_EMBEDDINGS_PATH: &str = "models/word2vec.txt";
pub const DEFAULT_CLASSIFIER_PATH: &str = "models/classifier.json";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 100;
pub const DEFAULT_WORD2VEC_WINDOW: usize = 5;
pub const DEFAULT_WORD2VEC_MIN_COUNT: usize = 1;
pub const DEFAULT_WORD2VEC_EPOCHS: usize = 5;
pub const DEFAULT_WORD2VEC_NEGATIVE_SAMPLES: usize = 5;
pub const DEFAULT_SVM_LAMBDA: f64 = 1e-4;
pub const DEFAULT_SVM_EPOCHS: usize = 20;
pub const DEFAULT_TRAINING_SEED: u64 = 42;

// --- Scraper ---
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US, en;q=0.9";
pub const DEFAULT_SCRAPE_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_SCRAPE_MAX_RETRIES: u32 = 2;
pub const DEFAULT_SCRAPE_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_SCRAPE_MAX_BACKOFF_MS: u64 = 5_000;
pub const DEFAULT_REVIEW_SELECTOR: &str = ".review";
pub const DEFAULT_TEXT_SELECTOR: &str = ".review-text";
pub const DEFAULT_FULL_TEXT_SELECTOR: &str = ".full-review";
pub const DEFAULT_RATING_SELECTOR: &str = ".review-rating";
pub const DEFAULT_ENGLISH_ONLY: bool = true;

// --- Server ---
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_REVIEWS: usize = 200;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
