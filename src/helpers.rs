use crate::character_sets::is_ascii_tab_or_newline;
use crate::compat::Cow;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the query (?search) from a fragment-free URL string
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Find the `://` that ends a scheme.
/// A `/` before it means the colon belongs to the path.
pub fn find_scheme_end(input: &str) -> Option<usize> {
    let pos = memchr::memmem::find(input.as_bytes(), b"://")?;
    if memchr::memchr(b'/', &input.as_bytes()[..pos]).is_some() {
        return None;
    }
    Some(pos)
}

/// Trim leading/trailing C0 controls and spaces, drop embedded tabs/newlines.
/// Borrows whenever nothing has to be removed.
pub fn clean_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}
