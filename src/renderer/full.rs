use crate::compat::{String, ToString};
use crate::path::{is_rooted, join, rooted_path};
use crate::renderer::relative::push_query_and_fragment;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url::Url;

/// The pieces of an absolute URL, borrowed from a target and a base
#[derive(Debug, Clone, Copy)]
pub struct Absolute<'a> {
    pub scheme: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    /// Server-absolute path segments, dot segments already removed
    pub segments: &'a [String],
}

impl Absolute<'_> {
    /// Serialize with the query string and fragment of `target`.
    ///
    /// The port is left out when it is the default for the scheme. Without a
    /// host only the path is written.
    pub fn render(&self, target: &Url) -> String {
        let mut out = String::new();
        match self.host {
            Some(host) => {
                if let Some(scheme) = self.scheme {
                    out.push_str(scheme);
                    out.push(':');
                }
                out.push_str("//");
                out.push_str(host);
                let scheme_type = self.scheme.map_or(SchemeType::Other, get_scheme_type);
                if let Some(port) = scheme_type.explicit_port(self.port) {
                    out.push(':');
                    out.push_str(&port.to_string());
                }
                if !self.segments.is_empty() {
                    push_path(&mut out, self.segments);
                }
            }
            None => push_path(&mut out, self.segments),
        }
        push_query_and_fragment(&mut out, target);
        out
    }
}

fn push_path(out: &mut String, segments: &[String]) {
    if is_rooted(segments) || segments.is_empty() {
        out.push_str(&rooted_path(segments));
    } else {
        out.push('/');
        out.push_str(&join(segments));
    }
}
