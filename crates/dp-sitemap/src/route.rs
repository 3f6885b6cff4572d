//! Slug to route mapping.

/// Prefix of slugs belonging to the guide section.
pub(crate) const GUIDE_PREFIX: &str = "guide/";

/// Trailing segment naming a directory's index page.
const INDEX_SEGMENT: &str = "index";

/// Check whether `s` starts with `prefix`, ignoring ASCII case.
pub(crate) fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Strip `prefix` from `s`, ignoring ASCII case.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    starts_with_ignore_case(s, prefix).then(|| &s[prefix.len()..])
}

/// Strip `suffix` from `s`, ignoring ASCII case.
fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}

/// Derive the public route slug from an index slug.
///
/// Trims `/`, normalizes `\` to `/`, then drops the `guide/` section prefix
/// and a trailing `index` segment, matching both case-insensitively.
///
/// # Examples
///
/// ```
/// use dp_sitemap::route_slug;
///
/// assert_eq!(route_slug("guide/setup/index"), "setup");
/// assert_eq!(route_slug("guide/index"), "");
/// assert_eq!(route_slug("guide/setup/install"), "setup/install");
/// ```
pub fn route_slug(slug: &str) -> String {
    let normalized = slug.trim_matches('/').replace('\\', "/");

    let mut route = strip_prefix_ignore_case(&normalized, GUIDE_PREFIX).unwrap_or(&normalized);

    // A bare index page is the section root
    if route.eq_ignore_ascii_case(INDEX_SEGMENT) {
        return String::new();
    }
    if let Some(rest) =
        strip_suffix_ignore_case(route, INDEX_SEGMENT).and_then(|r| r.strip_suffix('/'))
    {
        route = rest;
    }

    route.trim_matches('/').to_owned()
}
