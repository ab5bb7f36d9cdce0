/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a byte may follow the first letter of a scheme
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Host byte classification
/// Returns: 0=allowed, 1=forbidden, 2=IPv6 bracket
const HOST_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // C0 controls, space and DEL
    let mut i = 0;
    while i <= 0x20 {
        table[i] = 1;
        i += 1;
    }
    table[0x7F] = 1;

    // Delimiters that can never be part of a host
    table[b'/' as usize] = 1;
    table[b'?' as usize] = 1;
    table[b'#' as usize] = 1;
    table[b'@' as usize] = 1;
    table[b'\\' as usize] = 1;
    table[b'<' as usize] = 1;
    table[b'>' as usize] = 1;
    table[b'^' as usize] = 1;
    table[b'|' as usize] = 1;

    table[b'[' as usize] = 2;
    table[b']' as usize] = 2;

    table
};

/// Classify a byte for host validation (lookup table, non-ASCII bytes are allowed)
pub fn classify_host_byte(b: u8) -> u8 {
    HOST_CHAR_TABLE[b as usize]
}
