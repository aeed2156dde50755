//! Skip-gram trainer behaviour.

use reviewlens_embeddings::{Word2VecParams, Word2VecTrainer};

fn corpus() -> Vec<Vec<String>> {
    let lines = [
        "great product love qualiti",
        "love great phone",
        "excel product great valu",
        "batteri die fast bad",
        "bad batteri return refund",
        "return broken bad",
    ];
    lines
        .iter()
        .cycle()
        .take(60)
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .collect()
}

fn params(seed: u64) -> Word2VecParams {
    Word2VecParams {
        dimensions: 16,
        window: 3,
        min_count: 1,
        epochs: 5,
        negative_samples: 3,
        learning_rate: 0.025,
        seed,
    }
}

#[test]
fn table_has_configured_width_and_vocab() {
    let table = Word2VecTrainer::new(params(1)).train(&corpus()).unwrap();
    assert_eq!(table.dimensions(), 16);
    assert_eq!(table.vocab_size(), 14);
    for word in table.words() {
        let v = table.get(word).unwrap();
        assert!(v.iter().all(|x| x.is_finite()));
    }
}

#[test]
fn same_seed_same_table() {
    let a = Word2VecTrainer::new(params(9)).train(&corpus()).unwrap();
    let b = Word2VecTrainer::new(params(9)).train(&corpus()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seed_different_table() {
    let a = Word2VecTrainer::new(params(1)).train(&corpus()).unwrap();
    let b = Word2VecTrainer::new(params(2)).train(&corpus()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn single_token_sentences_still_get_vectors() {
    let sentences = vec![vec!["solo".to_string()]];
    let table = Word2VecTrainer::new(params(3)).train(&sentences).unwrap();
    assert!(table.contains("solo"));
}
