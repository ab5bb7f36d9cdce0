use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::parser::parse_url;
use crate::path::{is_rooted, join};
use crate::query::{QueryParameter, serialize_query};
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// A URL value: optional scheme, host and port, a list of path segments, a
/// list of query parameters and an optional fragment.
///
/// The path is stored as the segments between `/` characters. An empty first
/// segment means the path starts with `/`, an empty last segment means it
/// ends with one. Segments keep their raw text, path parameters such as
/// `;jsessionid=...` included.
///
/// A `Url` is immutable; the `with_*` methods consume it and return the
/// modified value.
///
/// # Examples
///
/// ```
/// use urlrender::Url;
///
/// let url = Url::parse("http://example.com:8080/a/b?x=y#top").unwrap();
/// assert_eq!(url.host(), Some("example.com"));
/// assert_eq!(url.port(), Some(8080));
/// assert_eq!(url.segments(), ["", "a", "b"]);
/// assert_eq!(url.to_string(), "http://example.com:8080/a/b?x=y#top");
///
/// let built = Url::from_segments(["four"]).with_scheme("https");
/// assert_eq!(built.scheme(), Some("https"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    pub(crate) scheme: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) segments: Vec<String>,
    pub(crate) query: Vec<QueryParameter>,
    pub(crate) fragment: Option<String>,
    pub(crate) context_relative: bool,
}

impl Url {
    /// An empty relative URL (no segments, no query)
    pub fn new() -> Self {
        Self::default()
    }

    /// A relative URL made of the given path segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a URL string.
    ///
    /// Absence of scheme and host is legal and yields a relative URL. A scheme
    /// is only recognised in front of `://`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the input is structurally invalid: a bad
    /// scheme, an empty or malformed host, an unterminated IPv6 literal or a
    /// port that is not a number in `0..=65535`.
    pub fn parse(input: &str) -> Result<Self> {
        parse_url(input)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Get the scheme type ([`SchemeType::Other`] when there is no scheme)
    pub fn scheme_type(&self) -> SchemeType {
        self.scheme
            .as_deref()
            .map_or(SchemeType::Other, get_scheme_type)
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The explicit port, or the default port of the scheme
    pub fn effective_port(&self) -> Option<u16> {
        self.port.or_else(|| self.scheme_type().default_port())
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The segments joined with `/`
    pub fn path(&self) -> String {
        join(&self.segments)
    }

    pub fn query_parameters(&self) -> &[QueryParameter] {
        &self.query
    }

    /// Raw value of the first parameter with the given name
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|param| param.name() == name)
            .map(QueryParameter::value)
    }

    /// The query string without the leading `?` (empty when there is none)
    pub fn query_string(&self) -> String {
        serialize_query(&self.query)
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the segments are relative to the deployment context root
    pub fn is_context_relative(&self) -> bool {
        self.context_relative
    }

    /// Scheme and host are both present
    pub fn is_full(&self) -> bool {
        self.scheme.is_some() && self.host.is_some()
    }

    /// Host without scheme, e.g. `//host/path`
    pub fn is_protocol_relative(&self) -> bool {
        self.scheme.is_none() && self.host.is_some()
    }

    /// Path starting with `/` and no host, e.g. `/c/d`
    pub fn is_context_absolute(&self) -> bool {
        !self.context_relative && self.host.is_none() && is_rooted(&self.segments)
    }

    /// Path anchored at the server root, whether or not a host is present
    pub(crate) fn is_server_anchored(&self) -> bool {
        !self.context_relative && is_rooted(&self.segments)
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_context_relative(mut self, context_relative: bool) -> Self {
        self.context_relative = context_relative;
        self
    }

    /// Replace all path segments
    #[must_use]
    pub fn with_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Append one path segment
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append a query parameter given as raw (already encoded) text
    #[must_use]
    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query.push(QueryParameter::new(name, value));
        self
    }

    /// Append a query parameter given as plain text; name and value are
    /// percent-encoded
    #[must_use]
    pub fn with_encoded_query_parameter(mut self, name: &str, value: &str) -> Self {
        self.query.push(QueryParameter::encoded(name, value));
        self
    }

    /// Set the fragment; an empty fragment removes it
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.fragment = (!fragment.is_empty()).then_some(fragment);
        self
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // A scheme without a host has no string form of its own
        if let Some(host) = &self.host {
            if let Some(scheme) = &self.scheme {
                f.write_str(scheme)?;
                f.write_str(":")?;
            }
            f.write_str("//")?;
            f.write_str(host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
            if !self.segments.is_empty() && !is_rooted(&self.segments) {
                f.write_str("/")?;
            }
        }

        // A lone root marker is the server root
        if matches!(self.segments.as_slice(), [root] if root.is_empty()) {
            f.write_str("/")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }

        for (i, param) in self.query.iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            write!(f, "{param}")?;
        }

        if let Some(fragment) = &self.fragment {
            f.write_str("#")?;
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        Self::parse(&input).map_err(serde::de::Error::custom)
    }
}
