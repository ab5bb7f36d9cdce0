use crate::compat::{String, ToString, Vec};
use crate::error::Result;
use crate::unicode::percent_encode::{
    percent_decode_query_component, percent_encode_query_component,
};

/// One `name=value` pair of a query string.
/// Name and value are stored exactly as they appear in the URL (still encoded).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryParameter {
    name: String,
    value: String,
}

impl QueryParameter {
    /// Create a parameter from raw (already encoded) text
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a parameter from plain text, percent-encoding name and value
    pub fn encoded(name: &str, value: &str) -> Self {
        Self {
            name: percent_encode_query_component(name),
            value: percent_encode_query_component(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Percent-decoded name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPercentEncoding`](crate::ParseError) when
    /// the decoded bytes are not UTF-8.
    pub fn decoded_name(&self) -> Result<String> {
        percent_decode_query_component(&self.name)
    }

    /// Percent-decoded value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPercentEncoding`](crate::ParseError) when
    /// the decoded bytes are not UTF-8.
    pub fn decoded_value(&self) -> Result<String> {
        percent_decode_query_component(&self.value)
    }
}

impl core::fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)?;
        if !self.value.is_empty() {
            f.write_str("=")?;
            f.write_str(&self.value)?;
        }
        Ok(())
    }
}

/// Parse a query string (without the leading `?`) into its pairs.
/// Empty pairs are skipped, a pair without `=` gets an empty value.
pub fn parse_query(query: &str) -> Vec<QueryParameter> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => QueryParameter::new(name, value),
            None => QueryParameter::new(pair, String::new()),
        })
        .collect()
}

/// Serialize pairs without the leading `?`
pub fn serialize_query(params: &[QueryParameter]) -> String {
    let mut result = String::new();
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            result.push('&');
        }
        result.push_str(&param.to_string());
    }
    result
}
