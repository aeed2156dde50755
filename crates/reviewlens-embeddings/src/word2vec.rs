//! Skip-gram word2vec with negative sampling.
//!
//! Vocabulary is ordered by frequency (ties by token) and the RNG is seeded,
//! so the same corpus and parameters always produce the same table.

use std::collections::HashMap;

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reviewlens_core::config::ModelConfig;
use reviewlens_core::errors::TrainingError;
use tracing::{debug, info};

use crate::table::EmbeddingTable;

/// Training hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Word2VecParams {
    pub dimensions: usize,
    pub window: usize,
    pub min_count: usize,
    pub epochs: usize,
    pub negative_samples: usize,
    pub learning_rate: f32,
    pub seed: u64,
}

impl Default for Word2VecParams {
    fn default() -> Self {
        Self::from(&ModelConfig::default())
    }
}

impl From<&ModelConfig> for Word2VecParams {
    fn from(config: &ModelConfig) -> Self {
        Self {
            dimensions: config.dimensions,
            window: config.window,
            min_count: config.min_count,
            epochs: config.epochs,
            negative_samples: config.negative_samples,
            learning_rate: 0.025,
            seed: config.seed,
        }
    }
}

pub struct Word2VecTrainer {
    params: Word2VecParams,
}

struct Vocabulary {
    index: HashMap<String, usize>,
    words: Vec<String>,
    counts: Vec<usize>,
}

impl Word2VecTrainer {
    pub fn new(params: Word2VecParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Word2VecParams {
        &self.params
    }

    /// Train on tokenized sentences and return the input-vector table.
    pub fn train(&self, sentences: &[Vec<String>]) -> Result<EmbeddingTable, TrainingError> {
        let p = &self.params;
        let vocab = self.build_vocab(sentences);
        if vocab.words.is_empty() {
            return Err(TrainingError::EmptyCorpus);
        }
        info!(
            vocab_size = vocab.words.len(),
            dimensions = p.dimensions,
            epochs = p.epochs,
            "training word2vec"
        );

        let weights = vocab.counts.iter().map(|&c| (c as f64).powf(0.75));
        let negatives = WeightedIndex::new(weights).map_err(|_| TrainingError::EmptyCorpus)?;

        let mut rng = StdRng::seed_from_u64(p.seed);
        let dim = p.dimensions;
        let v = vocab.words.len();
        let mut syn0: Vec<f32> = (0..v * dim)
            .map(|_| (rng.gen::<f32>() - 0.5) / dim as f32)
            .collect();
        let mut syn1 = vec![0.0f32; v * dim];
        let mut neu1e = vec![0.0f32; dim];

        let encoded: Vec<Vec<usize>> = sentences
            .iter()
            .map(|s| s.iter().filter_map(|w| vocab.index.get(w).copied()).collect())
            .collect();

        let epochs = p.epochs.max(1);
        let floor = p.learning_rate * 1e-4;
        for epoch in 0..epochs {
            let lr = (p.learning_rate * (1.0 - epoch as f32 / epochs as f32)).max(floor);
            for sentence in &encoded {
                if sentence.len() < 2 {
                    continue;
                }
                for (pos, &center) in sentence.iter().enumerate() {
                    let window = rng.gen_range(1..=p.window.max(1));
                    let start = pos.saturating_sub(window);
                    let end = (pos + window + 1).min(sentence.len());
                    for (ctx_pos, &context) in sentence.iter().enumerate().take(end).skip(start) {
                        if ctx_pos == pos {
                            continue;
                        }
                        neu1e.iter_mut().for_each(|x| *x = 0.0);
                        let c0 = center * dim;

                        update(&syn0[c0..c0 + dim], &mut syn1, context, 1.0, lr, &mut neu1e);
                        for _ in 0..p.negative_samples {
                            let negative = negatives.sample(&mut rng);
                            if negative == context {
                                continue;
                            }
                            update(&syn0[c0..c0 + dim], &mut syn1, negative, 0.0, lr, &mut neu1e);
                        }
                        for (w, e) in syn0[c0..c0 + dim].iter_mut().zip(&neu1e) {
                            *w += e;
                        }
                    }
                }
            }
            debug!(epoch, lr, "word2vec epoch complete");
        }

        let entries = vocab
            .words
            .into_iter()
            .enumerate()
            .map(|(i, w)| (w, syn0[i * dim..(i + 1) * dim].to_vec()));
        Ok(EmbeddingTable::from_entries(dim, entries)?)
    }

    fn build_vocab(&self, sentences: &[Vec<String>]) -> Vocabulary {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for sentence in sentences {
            for word in sentence {
                *counts.entry(word.as_str()).or_insert(0) += 1;
            }
        }
        let mut entries: Vec<(&str, usize)> = counts
            .into_iter()
            .filter(|&(_, c)| c >= self.params.min_count.max(1))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut vocab = Vocabulary {
            index: HashMap::with_capacity(entries.len()),
            words: Vec::with_capacity(entries.len()),
            counts: Vec::with_capacity(entries.len()),
        };
        for (i, (word, count)) in entries.into_iter().enumerate() {
            vocab.index.insert(word.to_string(), i);
            vocab.words.push(word.to_string());
            vocab.counts.push(count);
        }
        vocab
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// One logistic update of output row `target` toward `label`.
/// Accumulates the input-vector gradient into `neu1e`.
fn update(center: &[f32], syn1: &mut [f32], target: usize, label: f32, lr: f32, neu1e: &mut [f32]) {
    let dim = center.len();
    let row = &mut syn1[target * dim..(target + 1) * dim];
    let dot: f32 = center.iter().zip(row.iter()).map(|(a, b)| a * b).sum();
    let g = lr * (label - sigmoid(dot));
    for j in 0..dim {
        neu1e[j] += g * row[j];
        row[j] += g * center[j];
    }
}
