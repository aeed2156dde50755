use proptest::prelude::*;
use reviewlens_core::config::TextConfig;
use reviewlens_text::TextNormalizer;

fn uncached() -> TextNormalizer {
    TextNormalizer::new(&TextConfig {
        cache_size: 0,
        max_review_chars: 512,
        ..TextConfig::default()
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalize_is_total(raw in "\\PC{0,200}") {
        let n = uncached();
        let _ = n.normalize(&raw);
    }

    #[test]
    fn normalize_is_deterministic(raw in "[a-zA-Z0-9 ,.!$%@<>/'😀👍]{0,120}") {
        let n = uncached();
        prop_assert_eq!(n.normalize(&raw), n.normalize(&raw));
    }

    #[test]
    fn output_has_single_spaces(raw in "[a-z ]{0,80}") {
        let out = uncached().normalize(&raw);
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }
}
