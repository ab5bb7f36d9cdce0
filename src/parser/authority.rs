use crate::checkers::{is_valid_host, parse_port};
use crate::error::{ParseError, Result};

/// Split an authority into host and port text.
/// IPv6 literals keep their brackets: `[::1]:8080` -> (`[::1]`, `8080`).
fn split_host_port(authority: &str) -> Result<(&str, Option<&str>)> {
    if authority.starts_with('[') {
        let bracket_end =
            memchr::memchr(b']', authority.as_bytes()).ok_or(ParseError::InvalidIpv6)?;
        let host = &authority[..=bracket_end];
        let rest = &authority[bracket_end + 1..];
        if rest.is_empty() {
            return Ok((host, None));
        }
        return rest
            .strip_prefix(':')
            .map(|port| (host, Some(port)))
            .ok_or(ParseError::InvalidHost);
    }

    Ok(match memchr::memrchr(b':', authority.as_bytes()) {
        Some(colon_pos) => (&authority[..colon_pos], Some(&authority[colon_pos + 1..])),
        None => (authority, None),
    })
}

/// Parse the authority of a URL (the text between `//` and the path).
/// Credentials are not part of the value model and are rejected.
pub fn parse_authority(authority: &str) -> Result<(&str, Option<u16>)> {
    if memchr::memchr(b'@', authority.as_bytes()).is_some() {
        return Err(ParseError::InvalidHost);
    }

    let (host, port) = split_host_port(authority)?;
    if !is_valid_host(host) {
        return Err(if host.starts_with('[') {
            ParseError::InvalidIpv6
        } else {
            ParseError::InvalidHost
        });
    }

    // "host:" is a host without a port
    let port = match port {
        None | Some("") => None,
        Some(port) => Some(parse_port(port).ok_or(ParseError::InvalidPort)?),
    };

    Ok((host, port))
}
