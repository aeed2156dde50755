//! English contraction expansion over whitespace tokens.

use std::collections::HashMap;
use std::sync::LazyLock;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "can not"),
    ("can't've", "can not have"),
    ("cause", "because"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he's", "he is"),
    ("how's", "how is"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what's", "what is"),
    ("where's", "where is"),
    ("who's", "who is"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("you're", "you are"),
    ("you've", "you have"),
];

static TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CONTRACTIONS.iter().copied().collect());

/// Expansion for a single whitespace token, if it is a known contraction.
pub fn expansion(token: &str) -> Option<&'static str> {
    TABLE.get(token).copied()
}

/// Every word that appears in an expansion.
pub fn expansion_words() -> impl Iterator<Item = &'static str> {
    CONTRACTIONS
        .iter()
        .flat_map(|(_, expanded)| expanded.split_whitespace())
}

/// Split on whitespace, expand whole-token contractions, rejoin with single spaces.
///
/// Only exact token matches expand: `don't,` keeps its trailing comma and
/// stays as is.
pub fn expand_contractions(text: &str) -> String {
    text.split_whitespace()
        .map(|token| expansion(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}
