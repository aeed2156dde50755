mod classifier;
mod embedding;
mod scraper;
mod spelling;

pub use classifier::IClassifier;
pub use embedding::IEmbeddingLookup;
pub use scraper::IReviewScraper;
pub use spelling::ISpellCorrector;
