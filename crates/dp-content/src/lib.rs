//! Content collaborators for the Downpatch sitemap.
//!
//! This crate provides the two narrow interfaces the sitemap generator reads
//! from, decoupled from any particular backend:
//!
//! - [`ContentIndex`] enumerates indexed [`ContentEntry`] values by slug
//! - [`PageRenderer`] resolves a route slug to a [`RenderedPage`]
//! - [`MockContent`] implements both in memory (behind `mock` feature flag)
//!
//! # Slug Convention
//!
//! Index slugs are full, path-like identifiers (`"guide/setup/index"`).
//! Renderer lookups take **route slugs**, the public path below the guide
//! section (`"setup"`, or `""` for the section root).
//!
//! # Example
//!
//! ```ignore
//! use dp_content::{ContentIndex, PageRenderer};
//!
//! for entry in index.entries()? {
//!     println!("{}", entry.slug);
//! }
//! let page = renderer.rendered("setup")?;
//! ```

mod content;
#[cfg(feature = "mock")]
mod mock;

pub use content::{
    ContentEntry, ContentError, ContentErrorKind, ContentIndex, PageRenderer, RenderedPage,
};
#[cfg(feature = "mock")]
pub use mock::MockContent;
