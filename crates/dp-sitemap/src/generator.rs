//! Sitemap generation pipeline.

use std::collections::HashSet;

use dp_content::{ContentIndex, PageRenderer};

use crate::SitemapError;
use crate::flag::front_matter_flag;
use crate::route::{GUIDE_PREFIX, route_slug, starts_with_ignore_case};
use crate::urlset::{SitemapUrl, write_urlset};

/// Front matter key excluding a page from the sitemap.
const NOINDEX_KEY: &str = "noindex";

/// Public path of the guide section.
const GUIDE_PATH: &str = "guide";

/// Build the absolute location for a route slug.
///
/// A blank route addresses the section root.
fn location(base_url: &str, route: &str) -> String {
    if route.trim().is_empty() {
        format!("{base_url}/{GUIDE_PATH}")
    } else {
        format!("{base_url}/{GUIDE_PATH}/{route}")
    }
}

/// Collect sitemap URLs for all indexable guide pages.
///
/// Entries are visited in ordinal slug order. Entries outside `guide/`,
/// without a rendered page, or with front matter `noindex: true` are skipped.
/// Locations are unique under case-insensitive comparison; the first entry
/// claiming a location wins.
///
/// # Arguments
///
/// * `base_url` - Scheme and host (e.g., `https://example.com`); a trailing `/` is ignored
/// * `index` - Source of content entries
/// * `renderer` - Page lookup by route slug
///
/// # Errors
///
/// Returns [`SitemapError::Content`] if a collaborator call fails.
pub fn collect_urls(
    base_url: &str,
    index: &dyn ContentIndex,
    renderer: &dyn PageRenderer,
) -> Result<Vec<SitemapUrl>, SitemapError> {
    let base_url = base_url.trim_end_matches('/');

    let mut entries: Vec<_> = index
        .entries()?
        .into_iter()
        .filter(|entry| starts_with_ignore_case(&entry.slug, GUIDE_PREFIX))
        .collect();
    entries.sort_by(|a, b| a.slug.cmp(&b.slug));

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for entry in &entries {
        let route = route_slug(&entry.slug);

        let Some(page) = renderer.rendered(&route)? else {
            tracing::trace!(slug = %entry.slug, route = %route, "No rendered page, skipping");
            continue;
        };

        if front_matter_flag(&page.front_matter, NOINDEX_KEY, false) {
            tracing::trace!(slug = %entry.slug, "Page marked noindex, skipping");
            continue;
        }

        let loc = location(base_url, &route);
        if !seen.insert(loc.to_lowercase()) {
            tracing::trace!(slug = %entry.slug, location = %loc, "Duplicate location, skipping");
            continue;
        }

        urls.push(SitemapUrl {
            location: loc,
            last_modified: page.last_modified.date_naive(),
        });
    }

    tracing::debug!(
        entry_count = entries.len(),
        url_count = urls.len(),
        "Sitemap URLs collected"
    );

    Ok(urls)
}

/// Generate the sitemap document for all indexable guide pages.
///
/// See [`collect_urls`] for selection rules and [`write_urlset`] for the
/// output format.
///
/// # Errors
///
/// Returns [`SitemapError`] if a collaborator call or XML writing fails.
pub fn generate(
    base_url: &str,
    index: &dyn ContentIndex,
    renderer: &dyn PageRenderer,
) -> Result<String, SitemapError> {
    let urls = collect_urls(base_url, index, renderer)?;
    write_urlset(&urls)
}
