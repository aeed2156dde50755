//! Numeric magnitude contraction: `1,000` -> `1k`, `2000000` -> `2m`.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! magnitude_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// Comma groups must be followed by whitespace or end of text.
magnitude_pattern!(RE_COMMA_BILLION, r",000,000,000(\s|$)");
magnitude_pattern!(RE_COMMA_MILLION, r",000,000(\s|$)");
magnitude_pattern!(RE_COMMA_THOUSAND, r",000(\s|$)");

// Greedy digit run followed by zero groups, anywhere in the text.
magnitude_pattern!(RE_DIGIT_BILLION, r"([0-9]+)000000000");
magnitude_pattern!(RE_DIGIT_MILLION, r"([0-9]+)000000");
magnitude_pattern!(RE_DIGIT_THOUSAND, r"([0-9]+)000");

/// (pattern, replacement) in application order, billions first.
fn rules() -> [(&'static LazyLock<Option<Regex>>, &'static str); 6] {
    [
        (&RE_COMMA_BILLION, "b${1}"),
        (&RE_COMMA_MILLION, "m${1}"),
        (&RE_COMMA_THOUSAND, "k${1}"),
        (&RE_DIGIT_BILLION, "${1}b"),
        (&RE_DIGIT_MILLION, "${1}m"),
        (&RE_DIGIT_THOUSAND, "${1}k"),
    ]
}

/// Contract comma-grouped and plain zero-padded numbers to `k`/`m`/`b` suffixes.
pub fn contract_magnitudes(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in rules() {
        if let Some(re) = pattern.as_ref() {
            out = re.replace_all(&out, replacement).into_owned();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_groups() {
        assert_eq!(contract_magnitudes("1,000,000,000 "), "1b ");
        assert_eq!(contract_magnitudes("paid 5,000,000 once"), "paid 5m once");
        assert_eq!(contract_magnitudes("only 3,000"), "only 3k");
    }

    #[test]
    fn comma_group_needs_a_boundary() {
        assert_eq!(contract_magnitudes("1,000x"), "1,000x");
    }

    #[test]
    fn digit_runs() {
        assert_eq!(contract_magnitudes("2000000"), "2m");
        assert_eq!(contract_magnitudes("3000"), "3k");
        assert_eq!(contract_magnitudes("7000000000"), "7b");
        assert_eq!(contract_magnitudes("12000 and 45000"), "12k and 45k");
    }

    #[test]
    fn greedy_run_keeps_leading_digits() {
        assert_eq!(contract_magnitudes("10000"), "10k");
        // Rules run in sequence, so a contracted prefix can contract again.
        assert_eq!(contract_magnitudes("1000000000000"), "1kb");
    }

    #[test]
    fn short_numbers_untouched() {
        assert_eq!(contract_magnitudes("999 and 100"), "999 and 100");
    }
}
