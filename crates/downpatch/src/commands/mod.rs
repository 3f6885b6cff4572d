//! CLI command implementations.

pub(crate) mod serve;
pub(crate) mod sitemap;

pub(crate) use serve::ServeArgs;
pub(crate) use sitemap::SitemapArgs;
