//! Noun lemmatizer: irregular forms plus regular plural suffix rules.

use std::collections::HashMap;
use std::sync::LazyLock;

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("data", "datum"),
];

/// `(suffix, replacement)`, longest suffix first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("ses", "s"),
    ("s", ""),
];

static IRREGULAR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR.iter().copied().collect());

#[derive(Debug, Default, Clone, Copy)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_TABLE.get(word) {
            return (*lemma).to_string();
        }
        // Short words and -ss/-us/-is endings are not plurals.
        if word.chars().count() <= 3
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
        {
            return word.to_string();
        }
        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{stem}{replacement}");
            }
        }
        word.to_string()
    }
}
