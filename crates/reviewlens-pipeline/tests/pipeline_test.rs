mod common;

use proptest::prelude::*;
use reviewlens_classifier::LinearClassifier;
use reviewlens_core::config::ModelConfig;
use reviewlens_core::errors::ModelError;
use reviewlens_core::models::{Prediction, Review};
use reviewlens_pipeline::{FeatureExtractor, ModelBundle, ReviewPipeline};

#[test]
fn bundle_rejects_width_mismatch() {
    let classifier = LinearClassifier::new(vec![1.0; 5], 0.0).unwrap();
    let err = ModelBundle::new(common::table(), classifier).unwrap_err();
    assert!(matches!(
        err,
        ModelError::DimensionMismatch {
            expected: 4,
            actual: 5
        }
    ));
}

#[test]
fn bundle_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelConfig {
        embeddings_path: dir.path().join("nested/w2v.txt").display().to_string(),
        classifier_path: dir.path().join("nested/clf.json").display().to_string(),
        ..ModelConfig::default()
    };
    common::bundle().save(&config).unwrap();
    let loaded = ModelBundle::load(&config).unwrap();
    assert_eq!(loaded.vocab_size(), 2);
    assert_eq!(loaded.dimensions(), 2);
    assert_eq!(loaded.embeddings(), &common::table());
}

#[test]
fn bundle_load_missing_files_fails() {
    let config = ModelConfig {
        embeddings_path: "/nonexistent/w2v.txt".to_string(),
        ..ModelConfig::default()
    };
    assert!(matches!(
        ModelBundle::load(&config),
        Err(ModelError::LoadFailed { .. })
    ));
}

#[test]
fn classifies_by_embedding() {
    let normalizer = common::normalizer();
    let bundle = common::bundle();
    let pipeline = ReviewPipeline::new(&normalizer, &bundle);

    let fake = pipeline
        .classify_review(&Review::new("Robot robot!", "2.0"))
        .unwrap();
    assert_eq!(fake.prediction, Prediction::Fake);
    assert_eq!(fake.rating, 2.0);
    assert_eq!(fake.original_text, "Robot robot!");

    let real = pipeline
        .classify_review(&Review::new("A human wrote this", "N/A"))
        .unwrap();
    assert_eq!(real.prediction, Prediction::Real);
    assert_eq!(real.rating, 3.0);
}

#[test]
fn unknown_tokens_use_zero_embedding() {
    let normalizer = common::normalizer();
    let bundle = common::bundle();
    let pipeline = ReviewPipeline::new(&normalizer, &bundle);
    let features = pipeline.features(&Review::new("zzz qqq", "4"));
    assert_eq!(features.embedding(), &[0.0, 0.0]);
    // w·x + b == 0 is not strictly positive
    let result = pipeline.classify_review(&Review::new("zzz qqq", "4")).unwrap();
    assert_eq!(result.prediction, Prediction::Real);
}

#[test]
fn empty_batch() {
    let normalizer = common::normalizer();
    let bundle = common::bundle();
    let results = ReviewPipeline::new(&normalizer, &bundle)
        .classify_batch(&[])
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn results_serialize_with_display_keys() {
    let normalizer = common::normalizer();
    let bundle = common::bundle();
    let result = ReviewPipeline::new(&normalizer, &bundle)
        .classify_review(&Review::new("robot", "5"))
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["Review"], "robot");
    assert_eq!(json["Rating"], 5.0);
    assert!(json["Prediction"].is_string());
}

proptest! {
    #[test]
    fn feature_width_is_fixed(text in "\\PC{0,80}", rating in -10.0f64..10.0) {
        let normalizer = common::normalizer();
        let table = common::table();
        let normalized = normalizer.normalize(&text);
        let v = FeatureExtractor::new().extract(&normalized, rating, &table);
        prop_assert_eq!(v.len(), 4);
        prop_assert_eq!(v.rating(), rating);
    }

    #[test]
    fn batch_preserves_order_and_length(words in prop::collection::vec("(robot|human|blender)( [a-z]{1,6}){0,4}", 0..12)) {
        let normalizer = common::normalizer();
        let bundle = common::bundle();
        let pipeline = ReviewPipeline::new(&normalizer, &bundle);
        let reviews: Vec<Review> = words.iter().map(|w| Review::new(w.clone(), "3")).collect();
        let batch = pipeline.classify_batch(&reviews).unwrap();
        prop_assert_eq!(batch.len(), reviews.len());
        for (result, review) in batch.iter().zip(&reviews) {
            prop_assert_eq!(&result.original_text, &review.original_text);
            let single = pipeline.classify_review(review).unwrap();
            prop_assert_eq!(single.prediction, result.prediction);
        }
    }
}
