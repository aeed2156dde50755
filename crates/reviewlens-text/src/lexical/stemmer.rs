use rust_stemmers::{Algorithm, Stemmer};

/// Snowball stemmer wrapper.
pub struct WordStemmer {
    inner: Stemmer,
}

impl WordStemmer {
    /// Snowball English (Porter2).
    pub fn english() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }

    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_common_suffixes() {
        let s = WordStemmer::english();
        assert_eq!(s.stem("running"), "run");
        assert_eq!(s.stem("products"), "product");
        assert_eq!(s.stem("loved"), "love");
    }
}
