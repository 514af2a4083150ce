//! Indefinite articles for type names in messages.

/// Returns `"an"` when `word` starts with a vowel letter, `"a"` otherwise.
///
/// The check is purely orthographic: `"int"` gets `"an"`, and so does `"u8"`.
pub fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Prefixes `word` with its indefinite article.
pub fn articleize(word: &str) -> String {
    format!("{} {word}", article(word))
}
