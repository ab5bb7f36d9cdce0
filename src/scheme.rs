use crate::character_sets::is_scheme_byte;
use crate::types::SchemeType;

/// Get the scheme type from a scheme string (ASCII case-insensitive).
/// Filters by length + first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();
    let first = bytes.first().map(u8::to_ascii_lowercase);

    match (bytes.len(), first) {
        (2, Some(b'w')) if scheme.eq_ignore_ascii_case("ws") => SchemeType::Ws,
        (3, Some(b'w')) if scheme.eq_ignore_ascii_case("wss") => SchemeType::Wss,
        (3, Some(b'f')) if scheme.eq_ignore_ascii_case("ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if scheme.eq_ignore_ascii_case("http") => SchemeType::Http,
        (4, Some(b'f')) if scheme.eq_ignore_ascii_case("file") => SchemeType::File,
        (5, Some(b'h')) if scheme.eq_ignore_ascii_case("https") => SchemeType::Https,
        _ => SchemeType::Other,
    }
}

/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic()) && bytes.all(is_scheme_byte)
}
