//! Small character-indexed string helpers that never panic on bad indices.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    /// Runs of whitespace, parentheses and commas.
    static ref WORD_SEPARATORS: Regex = Regex::new(r"[()\s,]+").unwrap();
}

/// Up to `len` characters starting at character `start`.
///
/// Empty when `start` is past the end; clipped at the end of `input`.
pub fn safe_substring(input: &str, start: usize, len: usize) -> &str {
    let Some(from) = char_offset(input, start) else {
        return "";
    };
    let rest = &input[from..];
    let to = char_offset(rest, len).unwrap_or(rest.len());
    &rest[..to]
}

/// Does `lead` end exactly at the character cursor `pos`?
///
/// `"01234"` leads `"01"` at 2. An empty `lead` is true for any in-bounds cursor.
pub fn leads(input: &str, pos: usize, lead: &str) -> bool {
    let Some(end) = char_offset(input, pos) else {
        return false;
    };
    input[..end].ends_with(lead)
}

/// Does `trail` start exactly at the character cursor `pos`?
///
/// `"01234"` trails `"234"` at 2. An empty `trail` is true for any in-bounds cursor.
pub fn trails(input: &str, pos: usize, trail: &str) -> bool {
    let Some(start) = char_offset(input, pos) else {
        return false;
    };
    input[start..].starts_with(trail)
}

/// Collapse every whitespace run to a single space.
pub fn flatten_whitespace(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input, " ").into_owned()
}

/// Text strictly between `start_delim` and `end_delim`.
///
/// Uses the first occurrence of each delimiter, or the last with `use_last`.
/// Empty when either is missing or the end does not come after the start.
pub fn extract_between<'a>(
    input: &'a str,
    start_delim: &str,
    end_delim: &str,
    use_last: bool,
) -> &'a str {
    let (start, end) = if use_last {
        (input.rfind(start_delim), input.rfind(end_delim))
    } else {
        (input.find(start_delim), input.find(end_delim))
    };
    match (start, end) {
        (Some(s), Some(e)) if s + start_delim.len() <= e => &input[s + start_delim.len()..e],
        _ => "",
    }
}

/// Split on whitespace, parentheses and commas, dropping empty pieces.
pub fn non_whitespace_tokens(input: &str) -> Vec<&str> {
    WORD_SEPARATORS
        .split(input)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Byte offset of character `idx`; `input.len()` when `idx` is exactly the
/// character count, `None` beyond that.
fn char_offset(input: &str, idx: usize) -> Option<usize> {
    input
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(input.len()))
        .nth(idx)
}
