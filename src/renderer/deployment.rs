use crate::compat::{String, ToOwned, Vec};
use crate::path::without_root_marker;
use crate::url::Url;

/// Where the application is mounted on the server: the context path of the
/// web application and, beneath it, the filter path of the request
/// dispatcher.
///
/// Both are kept as their non-empty segments, so `"/ctx"`, `"ctx"` and
/// `"ctx/"` all describe the same mount point and `""` and `"/"` both mean
/// the server root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "DeploymentConfig", into = "DeploymentConfig")
)]
pub struct Deployment {
    context_path: Vec<String>,
    filter_path: Vec<String>,
}

/// Serialized form of a [`Deployment`]
#[cfg(feature = "serde")]
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct DeploymentConfig {
    context_path: String,
    filter_path: String,
}

#[cfg(feature = "serde")]
impl From<DeploymentConfig> for Deployment {
    fn from(config: DeploymentConfig) -> Self {
        Self::new(&config.context_path, &config.filter_path)
    }
}

#[cfg(feature = "serde")]
impl From<Deployment> for DeploymentConfig {
    fn from(deployment: Deployment) -> Self {
        Self {
            context_path: mount_path(&deployment.context_path),
            filter_path: mount_path(&deployment.filter_path),
        }
    }
}

#[cfg(feature = "serde")]
fn mount_path(segments: &[String]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

fn mount_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// `segment` is the mount `element`, possibly carrying path parameters
/// (`filter;jsessionid=...`)
fn segment_matches(segment: &str, element: &str) -> bool {
    segment
        .strip_prefix(element)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(';'))
}

impl Deployment {
    pub fn new(context_path: &str, filter_path: &str) -> Self {
        Self {
            context_path: mount_segments(context_path),
            filter_path: mount_segments(filter_path),
        }
    }

    /// Application mounted at the server root
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_context_path(mut self, context_path: &str) -> Self {
        self.context_path = mount_segments(context_path);
        self
    }

    #[must_use]
    pub fn with_filter_path(mut self, filter_path: &str) -> Self {
        self.filter_path = mount_segments(filter_path);
        self
    }

    pub fn context_path(&self) -> &[String] {
        &self.context_path
    }

    pub fn filter_path(&self) -> &[String] {
        &self.filter_path
    }

    /// Relative reference from the filter root up to the context root:
    /// one `../` per filter path segment
    pub fn prefix_to_context_path(&self) -> String {
        "../".repeat(self.filter_path.len())
    }

    /// Context path followed by filter path
    pub(crate) fn mount_prefix(&self) -> impl Iterator<Item = &str> {
        self.context_path
            .iter()
            .chain(&self.filter_path)
            .map(String::as_str)
    }

    /// Length of the mount prefix matched at the start of `segments`, or
    /// `None` when `segments` does not start with it
    fn match_prefix<'a, I>(segments: &[String], prefix: I) -> Option<usize>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut matched = 0;
        for element in prefix {
            let segment = segments.get(matched)?;
            if !segment_matches(segment, element) {
                return None;
            }
            matched += 1;
        }
        Some(matched)
    }

    /// Segments of `url` relative to the filter root.
    ///
    /// Only a server-anchored path (leading `/`, not flagged context-relative)
    /// is stripped, and only when the root marker is followed by the context
    /// path and then the filter path. Anything else is returned unchanged.
    pub(crate) fn strip<'u>(&self, url: &'u Url) -> &'u [String] {
        let segments = url.segments();
        if !url.is_server_anchored() {
            return segments;
        }

        let anchored = &segments[1..];
        match Self::match_prefix(anchored, self.mount_prefix()) {
            Some(matched) => &anchored[matched..],
            None => {
                tracing::debug!(
                    url = %url,
                    "server-anchored path is outside the deployment mount point"
                );
                segments
            }
        }
    }

    /// Segments of `base` relative to the context root
    pub(crate) fn relative_to_context<'u>(&'u self, base: &'u Url) -> Vec<&'u str> {
        let segments = base.segments();
        if base.is_context_relative() {
            return without_root_marker(segments)
                .iter()
                .map(String::as_str)
                .collect();
        }

        if base.is_server_anchored() {
            let anchored = &segments[1..];
            let context = self.context_path.iter().map(String::as_str);
            let matched = Self::match_prefix(anchored, context).unwrap_or(0);
            return anchored[matched..].iter().map(String::as_str).collect();
        }

        self.filter_path
            .iter()
            .chain(segments)
            .map(String::as_str)
            .collect()
    }
}
