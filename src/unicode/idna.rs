use crate::compat::String;
use crate::error::{ParseError, Result};

/// Process a host using the IDNA `ToASCII` algorithm
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    // Fast path: ASCII hosts (including IPv6 literals and Punycode labels)
    // only need case folding
    if domain.is_ascii() {
        return Ok(domain.to_ascii_lowercase());
    }

    idna::domain_to_ascii(domain).map_err(|_| ParseError::InvalidHost)
}

/// Compare two hosts the way a browser would: case-insensitively, and with
/// Unicode labels compared through their Punycode form
pub fn hosts_match(a: &str, b: &str) -> bool {
    if a.eq_ignore_ascii_case(b) {
        return true;
    }
    if a.is_ascii() && b.is_ascii() {
        return false;
    }

    match (domain_to_ascii(a), domain_to_ascii(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
