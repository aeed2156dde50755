//! Offline training from a labelled CSV corpus.
//!
//! Columns: `text_`, `label` (`CG` computer-generated, `OR` original) and an
//! optional `rating`. Rows with any other label are skipped.

use std::io::Read;
use std::path::Path;

use reviewlens_classifier::{ClassificationMetrics, PegasosParams, PegasosTrainer};
use reviewlens_core::config::ModelConfig;
use reviewlens_core::errors::ReviewLensResult;
use reviewlens_core::ReviewLensConfig;
use reviewlens_core::constants::DEFAULT_RATING;
use reviewlens_core::errors::TrainingError;
use reviewlens_core::models::{parse_rating, FeatureVector, Prediction};
use reviewlens_core::traits::IClassifier;
use reviewlens_embeddings::{Word2VecParams, Word2VecTrainer};
use reviewlens_text::TextNormalizer;
use tracing::{info, warn};

use crate::features::FeatureExtractor;
use crate::models::ModelBundle;

const TEXT_COLUMN: &str = "text_";
const LABEL_COLUMN: &str = "label";
const RATING_COLUMN: &str = "rating";

/// One corpus row.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledReview {
    pub text: String,
    pub rating: f64,
    pub label: Prediction,
}

/// Trained models plus their metrics on the training set.
#[derive(Debug)]
pub struct TrainingOutcome {
    pub bundle: ModelBundle,
    pub metrics: ClassificationMetrics,
    pub samples: usize,
}

fn parse_label(label: &str) -> Option<Prediction> {
    match label.trim() {
        "CG" => Some(Prediction::Fake),
        "OR" => Some(Prediction::Real),
        _ => None,
    }
}

/// Read a corpus file.
pub fn read_corpus(path: &Path) -> Result<Vec<LabelledReview>, TrainingError> {
    let file = std::fs::File::open(path).map_err(|e| TrainingError::CorpusReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    read_corpus_from(file, &path.display().to_string())
}

/// Read a corpus from any reader. `label` names the source in errors.
pub fn read_corpus_from(reader: impl Read, label: &str) -> Result<Vec<LabelledReview>, TrainingError> {
    let read_failed = |e: csv::Error| TrainingError::CorpusReadFailed {
        path: label.to_string(),
        reason: e.to_string(),
    };
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv.headers().map_err(read_failed)?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let text_idx = column(TEXT_COLUMN).ok_or_else(|| TrainingError::MissingColumn {
        column: TEXT_COLUMN.to_string(),
    })?;
    let label_idx = column(LABEL_COLUMN).ok_or_else(|| TrainingError::MissingColumn {
        column: LABEL_COLUMN.to_string(),
    })?;
    let rating_idx = column(RATING_COLUMN);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (line, record) in csv.records().enumerate() {
        let record = record.map_err(read_failed)?;
        let (Some(text), Some(raw_label)) = (record.get(text_idx), record.get(label_idx)) else {
            skipped += 1;
            continue;
        };
        let Some(prediction) = parse_label(raw_label) else {
            warn!(row = line + 1, label = raw_label, "skipping row with unknown label");
            skipped += 1;
            continue;
        };
        let rating = rating_idx
            .and_then(|i| record.get(i))
            .map(parse_rating)
            .unwrap_or(DEFAULT_RATING);
        rows.push(LabelledReview {
            text: text.to_string(),
            rating,
            label: prediction,
        });
    }
    info!(source = label, rows = rows.len(), skipped, "corpus loaded");
    Ok(rows)
}

/// Train the embedding table and the classifier on `corpus`.
pub fn train_models(
    corpus: &[LabelledReview],
    normalizer: &TextNormalizer,
    config: &ModelConfig,
) -> Result<TrainingOutcome, TrainingError> {
    if corpus.is_empty() {
        return Err(TrainingError::EmptyCorpus);
    }

    let normalized: Vec<String> = corpus.iter().map(|r| normalizer.normalize(&r.text)).collect();
    let sentences: Vec<Vec<String>> = normalized
        .iter()
        .map(|text| text.split_whitespace().map(str::to_string).collect())
        .collect();
    let embeddings = Word2VecTrainer::new(Word2VecParams::from(config)).train(&sentences)?;

    let extractor = FeatureExtractor::new();
    let features: Vec<FeatureVector> = normalized
        .iter()
        .zip(corpus)
        .map(|(text, row)| extractor.extract(text, row.rating, &embeddings))
        .collect();
    let labels: Vec<Prediction> = corpus.iter().map(|r| r.label).collect();

    let classifier = PegasosTrainer::new(PegasosParams::from(config)).train(&features, &labels)?;
    let predicted = features
        .iter()
        .map(|f| classifier.classify(f))
        .collect::<Result<Vec<_>, _>>()?;
    let metrics = ClassificationMetrics::calculate(&labels, &predicted);

    let bundle = ModelBundle::new(embeddings, classifier)?;
    info!(
        samples = corpus.len(),
        vocab_size = bundle.vocab_size(),
        accuracy = metrics.accuracy,
        f1 = metrics.f1,
        "training complete"
    );
    Ok(TrainingOutcome {
        bundle,
        metrics,
        samples: corpus.len(),
    })
}

/// Read the corpus at `data`, train on it and write both artifacts to the
/// configured model paths.
pub fn train_from_csv(data: &Path, config: &ReviewLensConfig) -> ReviewLensResult<TrainingOutcome> {
    let corpus = read_corpus(data)?;
    let normalizer = TextNormalizer::new(&config.text)?;
    let outcome = train_models(&corpus, &normalizer, &config.model)?;
    outcome.bundle.save(&config.model)?;
    info!(
        embeddings = %config.model.embeddings_path,
        classifier = %config.model.classifier_path,
        "artifacts written"
    );
    Ok(outcome)
}
