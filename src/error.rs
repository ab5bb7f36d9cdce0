/// Errors raised while decomposing a URL string (malformed input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Empty scheme or a scheme with characters outside `[A-Za-z0-9+.-]`
    InvalidScheme,
    /// Empty host or a host carrying forbidden characters
    InvalidHost,
    /// IPv6 literal without its closing bracket
    InvalidIpv6,
    /// Non-numeric or out-of-range port
    InvalidPort,
    /// Percent-encoded bytes that do not decode to UTF-8
    InvalidPercentEncoding,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidPort => "Invalid port",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Errors raised by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A required argument was absent
    InvalidArgument(&'static str),
    /// The argument could not be parsed as a URL
    MalformedInput(ParseError),
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument(name) => write!(f, "Argument '{name}' may not be absent"),
            Self::MalformedInput(err) => write!(f, "Malformed URL: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::MalformedInput(err) => Some(err),
        }
    }
}

impl From<ParseError> for RenderError {
    fn from(err: ParseError) -> Self {
        Self::MalformedInput(err)
    }
}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
