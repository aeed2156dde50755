use std::sync::LazyLock;

use regex::Regex;

static RE_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r":\w+:|\w+|[^\w\s]").ok());

/// One token of normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// An emoji shortcode such as `:thumbs_up:`.
    Shortcode(&'a str),
    /// A `\w+` run.
    Word(&'a str),
    /// Any other single non-space character.
    Punct(&'a str),
}

/// Split text into shortcodes, words and punctuation, in order.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let Some(re) = RE_TOKEN.as_ref() else {
        return text.split_whitespace().map(Token::Word).collect();
    };
    re.find_iter(text)
        .map(|m| {
            let s = m.as_str();
            if s.len() > 2 && s.starts_with(':') && s.ends_with(':') {
                Token::Shortcode(s)
            } else if s.chars().all(|c| c.is_alphanumeric() || c == '_') {
                Token::Word(s)
            } else {
                Token::Punct(s)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(
            tokenize("great, really!"),
            vec![
                Token::Word("great"),
                Token::Punct(","),
                Token::Word("really"),
                Token::Punct("!"),
            ]
        );
    }

    #[test]
    fn shortcode_is_one_token() {
        assert_eq!(
            tokenize("nice :thumbs_up:"),
            vec![Token::Word("nice"), Token::Shortcode(":thumbs_up:")]
        );
    }

    #[test]
    fn non_ascii_shortcode_is_one_token() {
        assert_eq!(
            tokenize(":piñata: :flag_côte_divoire:"),
            vec![
                Token::Shortcode(":piñata:"),
                Token::Shortcode(":flag_côte_divoire:"),
            ]
        );
    }

    #[test]
    fn lone_colons_are_punctuation() {
        assert_eq!(
            tokenize("a : b"),
            vec![Token::Word("a"), Token::Punct(":"), Token::Word("b")]
        );
    }
}
