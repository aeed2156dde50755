//! # reviewlens-embeddings
//!
//! Read-only token to vector table consulted by the feature extractor, plus
//! the offline skip-gram trainer that produces it.

pub mod table;
pub mod word2vec;

pub use table::EmbeddingTable;
pub use word2vec::{Word2VecParams, Word2VecTrainer};
