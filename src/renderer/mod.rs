//! Rendering of [`Url`] values as references from a base URL.
//!
//! The [`Renderer`] holds the URL of the page being rendered (the base) and
//! the [`Deployment`] mount point, and turns target URLs into the shortest
//! string a browser resolves back to the target: a relative reference where
//! possible, an absolute URL where scheme, host or port have to change.

mod deployment;
mod full;
mod relative;

pub use deployment::Deployment;

use crate::compat::{String, ToString, Vec, vec};
use crate::error::RenderError;
use crate::path::{merge, remove_dot_segments, without_root_marker};
use crate::unicode::idna::hosts_match;
use crate::url::Url;
use full::Absolute;
use relative::{push_query_and_fragment, relative_path};

/// Renders target URLs relative to a base URL.
///
/// # Examples
///
/// ```
/// use urlrender::{Renderer, Url};
///
/// let renderer = Renderer::new(Url::parse("foo/bar/baz?a=b").unwrap());
///
/// let target = Url::parse("foo/aaa/xyz?x=y").unwrap();
/// assert_eq!(renderer.render_url(&target), "../aaa/xyz?x=y");
///
/// let target = Url::parse("https://example.com/x").unwrap();
/// assert_eq!(renderer.render_url(&target), "https://example.com/x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    base: Url,
    deployment: Deployment,
}

impl Renderer {
    /// Renderer for an application mounted at the server root
    pub fn new(base: Url) -> Self {
        Self::with_deployment(base, Deployment::root())
    }

    pub fn with_deployment(base: Url, deployment: Deployment) -> Self {
        Self { base, deployment }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Replace the base URL, returning the previous one
    pub fn set_base_url(&mut self, base: Url) -> Url {
        core::mem::replace(&mut self.base, base)
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Render `target` as a relative reference from the base URL, or as an
    /// absolute URL when it can't be reached without changing scheme, host
    /// or port.
    ///
    /// Protocol-relative (`//host/...`) and context-absolute (`/path`)
    /// targets are returned as they are.
    pub fn render_url(&self, target: &Url) -> String {
        if target.is_protocol_relative() {
            let rendered = target.to_string();
            tracing::trace!(%rendered, "protocol-relative target kept as is");
            return rendered;
        }

        if self.needs_absolute(target) {
            let rendered = self.render_absolute(target);
            tracing::trace!(%rendered, "target rendered absolute");
            return rendered;
        }

        if target.is_context_absolute() {
            let rendered = target.to_string();
            tracing::trace!(%rendered, "context-absolute target kept as is");
            return rendered;
        }

        self.render_relative_url(target)
    }

    /// Render `target` as a relative reference from the base URL, whatever
    /// its scheme, host and port.
    ///
    /// Both paths are first made relative to the filter root: a path
    /// starting with `/` loses the deployment's context and filter path when
    /// it carries them. A context-relative target is instead compared with
    /// the base as seen from the context root.
    pub fn render_relative_url(&self, target: &Url) -> String {
        let mut rendered = if target.is_context_relative() {
            let base = self.deployment.relative_to_context(&self.base);
            relative_path(&base, without_root_marker(target.segments()))
        } else {
            let base = self.deployment.strip(&self.base);
            relative_path(base, self.deployment.strip(target))
        };
        push_query_and_fragment(&mut rendered, target);
        tracing::trace!(%rendered, "target rendered relative");
        rendered
    }

    /// Render a path given relative to the application context root as a
    /// reference from the base URL.
    ///
    /// One leading `/` is ignored, so `"/f"` and `"f"` both name `f` in the
    /// context root. An argument that carries a host is returned as it is.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidArgument`] when `url` is `None`,
    /// [`RenderError::MalformedInput`] when it can't be parsed.
    pub fn render_context_relative_url(&self, url: Option<&str>) -> Result<String, RenderError> {
        let url = url.ok_or(RenderError::InvalidArgument("url"))?;
        let url = url.strip_prefix('/').unwrap_or(url);
        let target = Url::parse(url)?;

        if target.host().is_some() {
            return Ok(target.to_string());
        }
        Ok(self.render_relative_url(&target.with_context_relative(true)))
    }

    /// Resolve `target` against the base URL into an absolute URL.
    ///
    /// Missing scheme, host and port are taken from the base. A relative
    /// path is resolved against the base path (including the deployment
    /// mount point when the base path is relative), a context-relative one
    /// against the context path. Dot segments are always removed and default
    /// ports are left out.
    pub fn render_full_url(&self, target: &Url) -> String {
        let base = &self.base;

        let segments = if target.host().is_some() || target.is_context_absolute() {
            remove_dot_segments(target.segments())
        } else if target.is_context_relative() {
            self.mounted_path(target)
        } else {
            merge(&self.base_path(), target.segments())
        };

        // A target host brings its own port
        let port = if target.host().is_some() {
            target.port()
        } else {
            target.port().or(base.port())
        };
        let absolute = Absolute {
            scheme: target.scheme().or(base.scheme()),
            host: target.host().or(base.host()),
            port,
            segments: &segments,
        };

        let rendered = absolute.render(target);
        tracing::trace!(%rendered, "target resolved against base");
        rendered
    }

    /// Scheme, host or port of `target` differ from those of the base
    fn needs_absolute(&self, target: &Url) -> bool {
        let base = &self.base;

        let scheme_differs = target.scheme().is_some_and(|scheme| {
            !base
                .scheme()
                .is_some_and(|base_scheme| base_scheme.eq_ignore_ascii_case(scheme))
        });
        let host_differs = target
            .host()
            .is_some_and(|host| !base.host().is_some_and(|base_host| hosts_match(base_host, host)));
        // A target host without a port still means its scheme's default port
        let port_differs = (target.host().is_some() || target.port().is_some())
            && target.effective_port() != base.effective_port();

        scheme_differs || host_differs || port_differs
    }

    /// Absolute form of a target for `render_url`.
    ///
    /// A path without a host is taken relative to the deployment: below the
    /// filter path, or below the context path when the target is
    /// context-relative.
    fn render_absolute(&self, target: &Url) -> String {
        if target.host().is_some() {
            return self.render_full_url(target);
        }

        let segments = if target.is_context_absolute() {
            remove_dot_segments(target.segments())
        } else {
            self.mounted_path(target)
        };

        let base = &self.base;
        Absolute {
            scheme: target.scheme().or(base.scheme()),
            host: base.host(),
            port: target.port().or(base.port()),
            segments: &segments,
        }
        .render(target)
    }

    /// Server-absolute path of a target given below the deployment: below
    /// the filter path, or below the context path when the target is
    /// context-relative. `..` can't climb above that point.
    fn mounted_path(&self, target: &Url) -> Vec<String> {
        let mut segments = vec![String::new()];
        segments.extend(self.deployment.context_path().iter().cloned());
        if !target.is_context_relative() {
            segments.extend(self.deployment.filter_path().iter().cloned());
        }
        segments.extend(remove_dot_segments(without_root_marker(target.segments())));
        segments
    }

    /// Base path as seen from the server root
    fn base_path(&self) -> Vec<&str> {
        let base = &self.base;
        if base.is_server_anchored() {
            return base.segments().iter().map(String::as_str).collect();
        }

        let mut path = vec![""];
        path.extend(self.deployment.context_path().iter().map(String::as_str));
        if !base.is_context_relative() {
            path.extend(self.deployment.filter_path().iter().map(String::as_str));
        }
        path.extend(without_root_marker(base.segments()).iter().map(String::as_str));
        path
    }
}
