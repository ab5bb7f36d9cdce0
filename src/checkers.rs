use crate::character_sets::classify_host_byte;

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check a host without its port.
/// Brackets are only allowed as the delimiters of an IPv6 literal.
pub fn is_valid_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }

    match host.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        Some(inner) => {
            !inner.is_empty()
                && inner
                    .bytes()
                    .all(|b| b.is_ascii_hexdigit() || matches!(b, b':' | b'.'))
        }
        None => host.bytes().all(|b| classify_host_byte(b) == 0),
    }
}
