//! Embedding table in word2vec text format.
//!
//! ```text
//! <vocab_size> <dimensions>
//! <token> <f_0> ... <f_{k-1}>
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use reviewlens_core::errors::ModelError;
use reviewlens_core::traits::IEmbeddingLookup;
use tracing::info;

/// Immutable after load. Vectors are stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    dimensions: usize,
    index: HashMap<String, usize>,
    words: Vec<String>,
    vectors: Vec<f32>,
}

impl EmbeddingTable {
    /// An empty table of width `dimensions`.
    pub fn new(dimensions: usize) -> Result<Self, ModelError> {
        if dimensions == 0 {
            return Err(ModelError::InvalidFormat {
                path: "<memory>".to_string(),
                line: 0,
                reason: "dimensions must be greater than 0".to_string(),
            });
        }
        Ok(Self {
            dimensions,
            index: HashMap::new(),
            words: Vec::new(),
            vectors: Vec::new(),
        })
    }

    /// Build a table from `(token, vector)` pairs.
    pub fn from_entries<I>(dimensions: usize, entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut table = Self::new(dimensions)?;
        for (token, vector) in entries {
            table.insert(token, &vector)?;
        }
        Ok(table)
    }

    /// Append a token. Duplicates and wrong widths are rejected.
    pub fn insert(&mut self, token: String, vector: &[f32]) -> Result<(), ModelError> {
        if vector.len() != self.dimensions {
            return Err(ModelError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        if self.index.contains_key(&token) {
            return Err(ModelError::InvalidFormat {
                path: "<memory>".to_string(),
                line: 0,
                reason: format!("duplicate token {token:?}"),
            });
        }
        self.index.insert(token.clone(), self.words.len());
        self.words.push(token);
        self.vectors.extend_from_slice(vector);
        Ok(())
    }

    /// Load a word2vec text file. Any malformed line fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let file = File::open(path).map_err(|e| ModelError::LoadFailed {
            path: label.clone(),
            reason: e.to_string(),
        })?;
        let table = Self::read_from(BufReader::new(file), &label)?;
        info!(
            path = %label,
            vocab_size = table.vocab_size(),
            dimensions = table.dimensions,
            "embedding table loaded"
        );
        Ok(table)
    }

    /// Parse word2vec text from any reader. `label` names the source in errors.
    pub fn read_from(reader: impl BufRead, label: &str) -> Result<Self, ModelError> {
        let invalid = |line: usize, reason: String| ModelError::InvalidFormat {
            path: label.to_string(),
            line,
            reason,
        };
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(Ok(h)) => h,
            Some(Err(e)) => {
                return Err(ModelError::LoadFailed {
                    path: label.to_string(),
                    reason: e.to_string(),
                })
            }
            None => return Err(invalid(1, "empty file".to_string())),
        };
        let parts: Vec<&str> = header.split_whitespace().collect();
        let [vocab, dims] = parts.as_slice() else {
            return Err(invalid(1, format!("expected `<vocab_size> <dimensions>`, got {header:?}")));
        };
        let vocab_size: usize = vocab
            .parse()
            .map_err(|_| invalid(1, format!("invalid vocab size {vocab:?}")))?;
        let dimensions: usize = dims
            .parse()
            .map_err(|_| invalid(1, format!("invalid dimensions {dims:?}")))?;
        if dimensions == 0 {
            return Err(invalid(1, "dimensions must be greater than 0".to_string()));
        }

        let mut table = Self::new(dimensions)?;
        table.words.reserve(vocab_size);
        table.vectors.reserve(vocab_size.saturating_mul(dimensions));
        let mut row = Vec::with_capacity(dimensions);

        for (i, line) in lines.enumerate() {
            let line_no = i + 2;
            let line = line.map_err(|e| ModelError::LoadFailed {
                path: label.to_string(),
                reason: e.to_string(),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else { continue };
            row.clear();
            for field in fields {
                let value: f32 = field
                    .parse()
                    .map_err(|_| invalid(line_no, format!("unparseable value {field:?}")))?;
                if !value.is_finite() {
                    return Err(invalid(line_no, format!("non-finite value {field:?}")));
                }
                row.push(value);
            }
            if row.len() != dimensions {
                return Err(invalid(
                    line_no,
                    format!("expected {dimensions} values for {token:?}, got {}", row.len()),
                ));
            }
            if table.index.contains_key(token) {
                return Err(invalid(line_no, format!("duplicate token {token:?}")));
            }
            table.index.insert(token.to_string(), table.words.len());
            table.words.push(token.to_string());
            table.vectors.extend_from_slice(&row);
        }

        if table.words.len() != vocab_size {
            return Err(invalid(
                1,
                format!(
                    "header declares {vocab_size} tokens, file has {}",
                    table.words.len()
                ),
            ));
        }
        Ok(table)
    }

    /// Write the table in word2vec text format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let save_failed = |e: std::io::Error| ModelError::SaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        let file = File::create(path).map_err(save_failed)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(save_failed)?;
        writer.flush().map_err(save_failed)?;
        Ok(())
    }

    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "{} {}", self.vocab_size(), self.dimensions)?;
        for (idx, word) in self.words.iter().enumerate() {
            write!(writer, "{word}")?;
            for value in self.row(idx) {
                write!(writer, " {value}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    fn row(&self, idx: usize) -> &[f32] {
        let start = idx * self.dimensions;
        &self.vectors[start..start + self.dimensions]
    }

    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.index.get(token).map(|&idx| self.row(idx))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn vocab_size(&self) -> usize {
        self.words.len()
    }

    /// Tokens in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl IEmbeddingLookup for EmbeddingTable {
    fn lookup(&self, token: &str) -> Option<&[f32]> {
        self.get(token)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn vocab_size(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EmbeddingTable {
        EmbeddingTable::from_entries(
            2,
            vec![
                ("good".to_string(), vec![1.0, 0.0]),
                ("product".to_string(), vec![0.0, 1.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn average_of_matches() {
        let (avg, matched) = table().average(&["good", "product", "unknown"]);
        assert_eq!(matched, 2);
        assert_eq!(avg, vec![0.5, 0.5]);
    }

    #[test]
    fn average_without_matches_is_zero() {
        let (avg, matched) = table().average(&["nothing", "here"]);
        assert_eq!(matched, 0);
        assert_eq!(avg, vec![0.0, 0.0]);
    }

    #[test]
    fn insert_rejects_wrong_width_and_duplicates() {
        let mut t = table();
        assert!(matches!(
            t.insert("x".to_string(), &[1.0]),
            Err(ModelError::DimensionMismatch { expected: 2, actual: 1 })
        ));
        assert!(t.insert("good".to_string(), &[1.0, 1.0]).is_err());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(EmbeddingTable::new(0).is_err());
    }
}
