//! Frequency-ranked edit-distance spelling corrector.
//!
//! For each word: keep it if known, else pick the most frequent known word
//! at edit distance 1, else at distance 2, else keep it. Ties go to the
//! lexicographically smallest candidate so output is deterministic.
//!
//! Distance 1 enumerates edits of the input. Distance 2 scans dictionary
//! words within two characters of the input's length with a bounded
//! restricted-edit-distance check, so its cost is linear in the dictionary
//! bucket rather than quadratic in the edit set. Per-word results are
//! memoized.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use moka::sync::Cache;
use regex::{Captures, Regex};
use reviewlens_core::errors::TextError;
use reviewlens_core::traits::ISpellCorrector;
use tracing::debug;

use crate::contractions::expansion_words;
use crate::symbols::spelled_out_words;

const BUILTIN_DICTIONARY: &str = include_str!("../../data/en_frequency.txt");

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

const MEMO_CAPACITY: u64 = 50_000;

static RE_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

/// Words earlier normalization steps write themselves. Never rewritten.
static NORMALIZER_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| spelled_out_words().chain(expansion_words()).collect());

/// Norvig-style corrector over a `word count` frequency table.
#[derive(Clone)]
pub struct NorvigCorrector {
    counts: HashMap<String, u64>,
    /// Correctable dictionary words grouped by byte length.
    by_len: HashMap<usize, Vec<(String, u64)>>,
    memo: Cache<String, String>,
}

impl fmt::Debug for NorvigCorrector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NorvigCorrector")
            .field("vocab_size", &self.counts.len())
            .finish_non_exhaustive()
    }
}

impl NorvigCorrector {
    /// Corrector over the compact built-in English frequency list.
    pub fn builtin() -> Self {
        Self::from_frequency_list(BUILTIN_DICTIONARY)
    }

    /// Load a `word count` file. Blank lines and `#` comments are skipped.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TextError::DictionaryLoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let corrector = Self::from_frequency_list(&content);
        if corrector.counts.is_empty() {
            return Err(TextError::DictionaryLoadFailed {
                path: path.display().to_string(),
                reason: "no `word count` entries".to_string(),
            });
        }
        debug!(path = %path.display(), words = corrector.counts.len(), "loaded spelling dictionary");
        Ok(corrector)
    }

    /// Parse `word count` lines. A line with only a word counts as 1.
    /// Malformed lines are skipped.
    pub fn from_frequency_list(text: &str) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            let count = match parts.next() {
                Some(c) => match c.parse::<u64>() {
                    Ok(c) => c,
                    Err(_) => continue,
                },
                None => 1,
            };
            *counts.entry(word.to_lowercase()).or_insert(0) += count;
        }

        let mut by_len: HashMap<usize, Vec<(String, u64)>> = HashMap::new();
        for (word, &count) in &counts {
            if is_correctable(word) {
                by_len
                    .entry(word.len())
                    .or_default()
                    .push((word.clone(), count));
            }
        }
        Self {
            counts,
            by_len,
            memo: Cache::new(MEMO_CAPACITY),
        }
    }

    pub fn vocab_size(&self) -> usize {
        self.counts.len()
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Correct a single word.
    pub fn correct_word(&self, word: &str) -> String {
        if !is_correctable(word) || self.is_known(word) || NORMALIZER_WORDS.contains(word) {
            return word.to_string();
        }
        if let Some(hit) = self.memo.get(word) {
            return hit;
        }
        let corrected = self
            .best_at_distance_one(word)
            .or_else(|| self.best_at_distance_two(word))
            .unwrap_or(word)
            .to_string();
        self.memo.insert(word.to_string(), corrected.clone());
        corrected
    }

    fn best_at_distance_one(&self, word: &str) -> Option<&str> {
        let mut best: Option<(&str, u64)> = None;
        for candidate in edits1(word) {
            if let Some((known, count)) = self.counts.get_key_value(candidate.as_str()) {
                if is_better(known, *count, best) {
                    best = Some((known.as_str(), *count));
                }
            }
        }
        best.map(|(word, _)| word)
    }

    /// Only called once distance 1 found nothing, so every match is at
    /// distance exactly 2.
    fn best_at_distance_two(&self, word: &str) -> Option<&str> {
        let n = word.len();
        let mut best: Option<(&str, u64)> = None;
        for len in n.saturating_sub(2)..=n + 2 {
            let Some(bucket) = self.by_len.get(&len) else { continue };
            for (known, count) in bucket {
                if is_better(known, *count, best) && within_distance(word.as_bytes(), known.as_bytes(), 2) {
                    best = Some((known.as_str(), *count));
                }
            }
        }
        best.map(|(word, _)| word)
    }
}

impl Default for NorvigCorrector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ISpellCorrector for NorvigCorrector {
    /// Corrects each `\w+` run in place; separators are preserved.
    fn correct(&self, text: &str) -> Result<String, TextError> {
        let re = RE_WORD.as_ref().ok_or_else(|| TextError::SpellingFailed {
            reason: "word pattern failed to compile".to_string(),
        })?;
        Ok(re
            .replace_all(text, |caps: &Captures<'_>| self.correct_word(&caps[0]))
            .into_owned())
    }

    fn name(&self) -> &str {
        "norvig"
    }
}

/// Only lowercase ASCII words of two or more letters are corrected.
/// Single characters, numbers and mixed tokens are left alone.
fn is_correctable(word: &str) -> bool {
    word.len() > 1 && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_better(word: &str, count: u64, best: Option<(&str, u64)>) -> bool {
    match best {
        None => true,
        Some((best_word, best_count)) => {
            count > best_count || (count == best_count && word < best_word)
        }
    }
}

/// Restricted edit distance (adjacent transposes count 1) of `a` and `b`
/// is at most `max`. Stops as soon as a whole row exceeds `max`.
fn within_distance(a: &[u8], b: &[u8], max: usize) -> bool {
    if a.len().abs_diff(b.len()) > max {
        return false;
    }
    let m = b.len();
    let mut two_back: Vec<usize> = vec![0; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut cur: Vec<usize> = vec![0; m + 1];
    for i in 1..=a.len() {
        cur[0] = i;
        let mut row_min = cur[0];
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut d = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d = d.min(two_back[j - 2] + 1);
            }
            cur[j] = d;
            row_min = row_min.min(d);
        }
        if row_min > max {
            return false;
        }
        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[m] <= max
}

/// All strings one delete, transpose, replace or insert away from `word`.
/// `word` must be ASCII.
fn edits1(word: &str) -> Vec<String> {
    let bytes = word.as_bytes();
    let n = bytes.len();
    let mut out = Vec::with_capacity(54 * n + 25);
    for i in 0..=n {
        let (left, right) = bytes.split_at(i);
        if !right.is_empty() {
            let mut s = Vec::with_capacity(n - 1);
            s.extend_from_slice(left);
            s.extend_from_slice(&right[1..]);
            out.push(s);
        }
        if right.len() > 1 {
            let mut s = Vec::with_capacity(n);
            s.extend_from_slice(left);
            s.push(right[1]);
            s.push(right[0]);
            s.extend_from_slice(&right[2..]);
            out.push(s);
        }
        for &c in ALPHABET {
            if !right.is_empty() && right[0] != c {
                let mut s = Vec::with_capacity(n);
                s.extend_from_slice(left);
                s.push(c);
                s.extend_from_slice(&right[1..]);
                out.push(s);
            }
            let mut s = Vec::with_capacity(n + 1);
            s.extend_from_slice(left);
            s.push(c);
            s.extend_from_slice(right);
            out.push(s);
        }
    }
    out.into_iter()
        .filter_map(|s| String::from_utf8(s).ok())
        .collect()
}
