//! Stopword removal and lexical reduction (step 8).

pub mod lemmatizer;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

use reviewlens_core::config::LexicalReduction;

pub use lemmatizer::Lemmatizer;
pub use stemmer::WordStemmer;
pub use stopwords::is_stopword;
pub use tokenizer::{tokenize, Token};

/// Tokenizes, drops stopwords and reduces each remaining word.
pub struct LexicalReducer {
    mode: LexicalReduction,
    stemmer: WordStemmer,
    lemmatizer: Lemmatizer,
}

impl LexicalReducer {
    pub fn new(mode: LexicalReduction) -> Self {
        Self {
            mode,
            stemmer: WordStemmer::english(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    pub fn mode(&self) -> LexicalReduction {
        self.mode
    }

    /// Reduce `text` to space-joined tokens.
    ///
    /// Shortcodes and punctuation are kept verbatim. Word tokens in the
    /// stopword set are dropped; the rest are stemmed or lemmatized.
    pub fn reduce(&self, text: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        for token in tokenize(text) {
            match token {
                Token::Word(word) => {
                    if is_stopword(word) {
                        continue;
                    }
                    let reduced = match self.mode {
                        LexicalReduction::Stem => self.stemmer.stem(word),
                        LexicalReduction::Lemma => self.lemmatizer.lemmatize(word),
                    };
                    out.push(reduced);
                }
                Token::Shortcode(code) => out.push(code.to_string()),
                Token::Punct(p) => out.push(p.to_string()),
            }
        }
        out.join(" ")
    }
}

impl Default for LexicalReducer {
    fn default() -> Self {
        Self::new(LexicalReduction::default())
    }
}
