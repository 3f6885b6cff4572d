//! Sitemap generation for Downpatch guide pages.
//!
//! Turns the content index into a [sitemaps.org 0.9] document listing every
//! indexable guide page:
//!
//! 1. Keep entries under `guide/` and sort them by slug
//! 2. Map each slug to its public route ([`route_slug`])
//! 3. Drop entries without a rendered page or flagged `noindex`
//! 4. Deduplicate locations case-insensitively, first wins
//! 5. Serialize compact XML ([`write_urlset`])
//!
//! [sitemaps.org 0.9]: https://www.sitemaps.org/protocol.html
//!
//! # Example
//!
//! ```ignore
//! use dp_sitemap::generate;
//!
//! let xml = generate("https://example.com", &index, &renderer)?;
//! ```

mod flag;
mod generator;
mod route;
mod urlset;

use dp_content::ContentError;

pub use flag::{front_matter_flag, parse_bool_flag};
pub use generator::{collect_urls, generate};
pub use route::route_slug;
pub use urlset::{SITEMAP_NS, SitemapUrl, write_urlset};

/// Error returned when sitemap generation fails.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// A content collaborator failed.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    /// Writing the XML document failed.
    #[error("XML write error: {0}")]
    Write(#[from] std::io::Error),
}
