//! Emoji substitution: each emoji grapheme becomes its `:name:` shortcode.

use unicode_segmentation::UnicodeSegmentation;

const VARIATION_SELECTORS: [char; 2] = ['\u{FE0E}', '\u{FE0F}'];

/// Canonical shortcode for `name`: lowercase, spaces and hyphens to `_`,
/// other non-alphanumerics dropped.
fn shortcode(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(':');
    for c in name.chars() {
        if c == ' ' || c == '-' {
            out.push('_');
        } else if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        }
    }
    out.push(':');
    out
}

fn lookup(grapheme: &str) -> Option<&'static emojis::Emoji> {
    if let Some(e) = emojis::get(grapheme) {
        return Some(e);
    }
    if grapheme.contains(VARIATION_SELECTORS) {
        let bare: String = grapheme
            .chars()
            .filter(|c| !VARIATION_SELECTORS.contains(c))
            .collect();
        if bare.is_empty() {
            return None;
        }
        return emojis::get(&bare);
    }
    None
}

/// Replace every emoji grapheme with its shortcode. Other graphemes pass through.
pub fn demojize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        match lookup(grapheme) {
            Some(emoji) => out.push_str(&shortcode(emoji.name())),
            None => out.push_str(grapheme),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcode_keeps_non_ascii_letters() {
        assert_eq!(shortcode("piñata"), ":piñata:");
        assert_eq!(shortcode("flag: Côte d’Ivoire"), ":flag_côte_divoire:");
    }

    #[test]
    fn replaces_emoji_with_shortcode() {
        assert_eq!(demojize("love it 😀"), "love it :grinning_face:");
        assert_eq!(demojize("👍"), ":thumbs_up:");
    }

    #[test]
    fn variation_selector_is_ignored() {
        assert_eq!(demojize("\u{2764}\u{FE0F}"), ":red_heart:");
    }

    #[test]
    fn shortcode_normalizes_name() {
        assert_eq!(
            shortcode("Thumbs Up: medium-light skin tone"),
            ":thumbs_up_medium_light_skin_tone:"
        );
    }

    #[test]
    fn non_emoji_text_untouched() {
        assert_eq!(demojize("plain text"), "plain text");
        assert_eq!(demojize("café naïve"), "café naïve");
    }
}
