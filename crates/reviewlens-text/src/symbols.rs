//! Literal symbol substitution.

/// Symbols spelled out as words, in application order.
const SYMBOL_WORDS: &[(&str, &str)] = &[
    ("%", " percent"),
    ("$", " dollar "),
    ("₹", " rupee "),
    ("€", " euro "),
    ("@", " at "),
];

/// Replace currency and other symbols with their word forms.
pub fn spell_out_symbols(text: &str) -> String {
    let mut out = text.to_string();
    for (symbol, word) in SYMBOL_WORDS {
        if out.contains(symbol) {
            out = out.replace(symbol, word);
        }
    }
    out
}

/// Words [`spell_out_symbols`] can insert.
pub fn spelled_out_words() -> impl Iterator<Item = &'static str> {
    SYMBOL_WORDS.iter().map(|(_, word)| word.trim())
}
