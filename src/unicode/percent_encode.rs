use crate::compat::{Cow, String, ToString};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Query component percent-encode set
/// Everything that would end or split a `name=value` pair, or that a browser
/// would not leave alone inside a query: C0 controls, space, ", #, %, &, ', +,
/// <, =, >, ?
pub const QUERY_COMPONENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Percent-encode a query parameter name or value
pub fn percent_encode_query_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT_SET).to_string()
}

/// Decode a query parameter name or value (`+` decodes to a space)
pub fn percent_decode_query_component(input: &str) -> Result<String> {
    let input: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    percent_encoding::percent_decode_str(&input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ParseError::InvalidPercentEncoding)
}
