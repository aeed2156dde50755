//! Loading and saving embedding tables in word2vec text format.

use std::io::Write;

use reviewlens_core::errors::ModelError;
use reviewlens_core::traits::IEmbeddingLookup;
use reviewlens_embeddings::EmbeddingTable;

fn write_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_well_formed_file() {
    let file = write_file("2 3\ngood 0.1 0.2 0.3\nbad -1 0 1e-2\n");
    let table = EmbeddingTable::load(file.path()).unwrap();
    assert_eq!(table.vocab_size(), 2);
    assert_eq!(table.dimensions(), 3);
    assert_eq!(table.get("bad"), Some(&[-1.0, 0.0, 0.01][..]));
    assert!(table.get("ugly").is_none());
    assert_eq!(table.lookup("good").map(<[f32]>::len), Some(3));
}

#[test]
fn save_then_load_preserves_vectors() {
    let table = EmbeddingTable::from_entries(
        2,
        vec![
            ("great".to_string(), vec![0.125, -3.5]),
            ("cheap".to_string(), vec![1e-7, 42.0]),
        ],
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("w2v.txt");
    table.save(&path).unwrap();
    assert_eq!(EmbeddingTable::load(&path).unwrap(), table);
}

#[test]
fn missing_file_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = EmbeddingTable::load(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ModelError::LoadFailed { .. }));
}

#[test]
fn malformed_files_are_rejected() {
    let cases = [
        ("", "empty"),
        ("2\nx 1\n", "short header"),
        ("a b\n", "non-numeric header"),
        ("1 0\nx\n", "zero dimensions"),
        ("1 2\nx 1\n", "too few values"),
        ("1 2\nx 1 2 3\n", "too many values"),
        ("1 2\nx 1 abc\n", "bad float"),
        ("1 2\nx 1 NaN\n", "non-finite"),
        ("2 2\nx 1 2\nx 3 4\n", "duplicate token"),
        ("3 2\nx 1 2\ny 3 4\n", "row count"),
    ];
    for (contents, what) in cases {
        let file = write_file(contents);
        let err = EmbeddingTable::load(file.path());
        assert!(
            matches!(err, Err(ModelError::InvalidFormat { .. })),
            "{what}: {err:?}"
        );
    }
}

#[test]
fn invalid_format_reports_line() {
    let file = write_file("2 2\nx 1 2\ny 3\n");
    match EmbeddingTable::load(file.path()) {
        Err(ModelError::InvalidFormat { line, .. }) => assert_eq!(line, 3),
        other => panic!("unexpected {other:?}"),
    }
}
