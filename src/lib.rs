//! Render URLs as references from the page that links to them.
//!
//! A [`Renderer`] knows the URL of the current page and where the
//! application is mounted on the server ([`Deployment`]). It renders target
//! [`Url`]s as the shortest reference a browser resolves back to the same
//! resource: `./x`, `../../y?q=1`, `.`, or a full `https://host/...` URL when
//! scheme, host or port change.
//!
//! ```
//! use urlrender::{Deployment, Renderer, Url};
//!
//! let base = Url::parse("/shop/app/products/list").unwrap();
//! let renderer = Renderer::with_deployment(base, Deployment::new("/shop", "/app"));
//!
//! let target = Url::parse("/shop/app/cart?add=12").unwrap();
//! assert_eq!(renderer.render_relative_url(&target), "../cart?add=12");
//! assert_eq!(renderer.render_context_relative_url(Some("/css/site.css")).unwrap(), "../../css/site.css");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod parser;
mod path;
mod query;
mod renderer;
mod scheme;
mod types;
mod unicode;
mod url;

// Public API
pub use error::{ParseError, RenderError, Result};
pub use query::QueryParameter;
pub use renderer::{Deployment, Renderer};
pub use types::SchemeType;
pub use url::Url;
