//! Markup stripping.

use std::sync::LazyLock;

use regex::Regex;

static RE_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<.*?>").ok());

/// Remove tag-like substrings, keeping the text between them.
pub fn strip_tags(text: &str) -> String {
    match RE_TAG.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_tags_keeps_text() {
        assert_eq!(strip_tags("<b>great</b> product"), "great product");
        assert_eq!(strip_tags("a<br/>b"), "ab");
    }

    #[test]
    fn non_greedy() {
        assert_eq!(strip_tags("<i>x</i> and <i>y</i>"), "x and y");
    }

    #[test]
    fn unclosed_angle_is_kept() {
        assert_eq!(strip_tags("3 < 4"), "3 < 4");
    }
}
