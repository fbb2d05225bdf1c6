//! Byte-bounded truncation that never splits a UTF-8 code point.

/// True for a UTF-8 continuation byte (`10xxxxxx`).
pub fn is_continuation_byte(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}

/// Cut `input` to at most `max_bytes` encoded bytes.
///
/// Returns `input` unchanged when it already fits. Otherwise the cut point
/// starts at `max_bytes` and walks back over continuation bytes until it
/// reaches the first byte of a code point; that byte and everything after it
/// is dropped. If the walk reaches byte 0 the result is empty.
///
/// ```
/// use quotescan_core::utf8::truncate_to_byte_length;
///
/// // '¢' is two bytes (C2 A2) at offsets 12..14
/// assert_eq!(truncate_to_byte_length("This is a 10¢ test", 13), "This is a 10");
/// assert_eq!(truncate_to_byte_length("This is a 10¢ test", 14), "This is a 10¢");
/// ```
pub fn truncate_to_byte_length(input: &str, max_bytes: usize) -> &str {
    let bytes = input.as_bytes();
    if bytes.len() <= max_bytes {
        return input;
    }

    let mut cut = max_bytes;
    while cut > 0 && is_continuation_byte(bytes[cut]) {
        cut -= 1;
    }
    if cut == 0 {
        return "";
    }
    // `cut` now indexes a lead byte, which is always a char boundary
    input.get(..cut).unwrap_or_default()
}

/// Skip `start_char` characters, then cut what is left to `max_bytes`.
///
/// Empty when `start_char` is past the end.
pub fn safe_utf8_substring(input: &str, start_char: usize, max_bytes: usize) -> &str {
    match input.char_indices().nth(start_char) {
        Some((offset, _)) => truncate_to_byte_length(&input[offset..], max_bytes),
        None => "",
    }
}
