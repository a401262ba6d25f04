use once_cell::sync::Lazy;
use regex::Regex;

// Circled digits and dingbat numerals the model likes to prefix list items
// with: ①-⑳, ⓵-⓾ and ❶-❿.
static CIRCLED_GLYPHS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{2460}-\u{2473}\u{24F5}-\u{24FE}\u{2776}-\u{277F}]").unwrap());

static EXTRA_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Remove circled enumeration glyphs and collapse the whitespace runs they
/// leave behind, so downstream keyword checks see clean prose.
pub fn strip_enumeration_glyphs(text: &str) -> String {
    let no_glyphs = CIRCLED_GLYPHS.replace_all(text, "");
    EXTRA_WHITESPACE.replace_all(&no_glyphs, " ").trim().to_string()
}
