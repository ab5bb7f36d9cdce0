mod authority;

use crate::compat::{String, ToOwned, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::{clean_tabs_and_newlines, find_scheme_end, prune_fragment, split_query};
use crate::query::parse_query;
use crate::scheme::is_valid_scheme;
use crate::url::Url;

/// Split a path on `/`.
/// An empty path has no segments; `/` alone is the root marker plus a trailing slash.
pub fn split_segments(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').map(ToOwned::to_owned).collect()
}

/// Decompose a URL string into a [`Url`].
///
/// Components are split off from the right (fragment, then query), then the
/// scheme and authority from the left. Dot segments and percent-encoding are
/// kept exactly as written.
pub fn parse_url(input: &str) -> Result<Url> {
    let input = clean_tabs_and_newlines(input);

    let (rest, fragment) = prune_fragment(&input);
    let (rest, query) = split_query(rest);

    let (scheme, rest) = match find_scheme_end(rest) {
        Some(end) => {
            let scheme = &rest[..end];
            if !is_valid_scheme(scheme) {
                return Err(ParseError::InvalidScheme);
            }
            // Keep the "//" so the authority is found below
            (Some(scheme), &rest[end + 1..])
        }
        None => (None, rest),
    };

    let (authority, path) = match rest.strip_prefix("//") {
        Some(after_slashes) => {
            let end = memchr::memchr(b'/', after_slashes.as_bytes())
                .unwrap_or(after_slashes.len());
            (Some(&after_slashes[..end]), &after_slashes[end..])
        }
        None => (None, rest),
    };

    let (host, port) = match authority {
        Some(authority) => {
            let (host, port) = authority::parse_authority(authority)?;
            (Some(host.to_owned()), port)
        }
        None => (None, None),
    };

    Ok(Url {
        scheme: scheme.map(ToOwned::to_owned),
        host,
        port,
        segments: split_segments(path),
        query: query.map(parse_query).unwrap_or_default(),
        fragment: fragment.filter(|f| !f.is_empty()).map(ToOwned::to_owned),
        context_relative: false,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::vec;

    #[test]
    fn test_parse_relative() {
        let url = parse_url("foo/bar/baz?a=b").unwrap();
        assert_eq!(url.scheme(), None);
        assert_eq!(url.host(), None);
        assert_eq!(url.segments(), ["foo", "bar", "baz"]);
        assert_eq!(url.query_parameter("a"), Some("b"));
    }

    #[test]
    fn test_parse_segments() {
        assert!(split_segments("").is_empty());
        assert_eq!(split_segments("/"), vec!["", ""]);
        assert_eq!(split_segments("/a"), vec!["", "a"]);
        assert_eq!(split_segments("a/"), vec!["a", ""]);
        assert_eq!(split_segments("a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_full() {
        let url = parse_url("http://www.example.com:8888/one/two?x=y#frag").unwrap();
        assert_eq!(url.scheme(), Some("http"));
        assert_eq!(url.host(), Some("www.example.com"));
        assert_eq!(url.port(), Some(8888));
        assert_eq!(url.segments(), ["", "one", "two"]);
        assert_eq!(url.query_string(), "x=y");
        assert_eq!(url.fragment(), Some("frag"));
    }

    #[test]
    fn test_parse_protocol_relative() {
        let url = parse_url("//host:1234/c/d").unwrap();
        assert_eq!(url.scheme(), None);
        assert_eq!(url.host(), Some("host"));
        assert_eq!(url.port(), Some(1234));
        assert_eq!(url.segments(), ["", "c", "d"]);
    }

    #[test]
    fn test_colon_in_path_is_not_a_scheme() {
        let url = parse_url("a:b/c").unwrap();
        assert_eq!(url.scheme(), None);
        assert_eq!(url.segments(), ["a:b", "c"]);

        let url = parse_url("/x/http://y").unwrap();
        assert_eq!(url.host(), None);
        assert_eq!(url.segments(), ["", "x", "http:", "", "y"]);
    }

    #[test]
    fn test_fragment_may_contain_question_mark() {
        let url = parse_url("a?b=c#d?e").unwrap();
        assert_eq!(url.query_string(), "b=c");
        assert_eq!(url.fragment(), Some("d?e"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_url("1http://x/"), Err(ParseError::InvalidScheme));
        assert_eq!(parse_url("://x/"), Err(ParseError::InvalidScheme));
        assert_eq!(parse_url("http://host:port/"), Err(ParseError::InvalidPort));
        assert_eq!(parse_url("http:///path"), Err(ParseError::InvalidHost));
        assert_eq!(parse_url("http://[::1/"), Err(ParseError::InvalidIpv6));
    }
}
