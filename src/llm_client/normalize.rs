//! Cleanup of the raw text produced by the language model.

const FENCE: &str = "```";
const QUOTES: [char; 4] = ['"', '\'', '“', '”'];

/// Removes a Markdown code fence wrapping the text, if any.
///
/// The opening fence may carry a language tag (```` ```json ````). Text that is
/// not fenced is only trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix(FENCE) {
        text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }
    text.trim()
}

/// Removes surrounding whitespace and one layer of surrounding quotes.
///
/// Quotes are only removed in pairs: a quote on one side alone is part of the
/// text.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix(&QUOTES[..])
        .and_then(|rest| rest.strip_suffix(&QUOTES[..]))
        .map(str::trim)
        .unwrap_or(text)
}
