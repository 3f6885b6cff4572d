//! Sitemap endpoint.
//!
//! Serves the sitemap of all indexable guide pages.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Uri, header};
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::state::AppState;

/// Content type of the sitemap response.
const SITEMAP_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Header set by reverse proxies to report the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Handle GET /sitemap.xml.
pub(crate) async fn get_sitemap(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<impl IntoResponse, ServerError> {
    let base_url = match &state.base_url {
        Some(url) => url.clone(),
        None => request_base_url(&headers, &uri, &state.fallback_host),
    };

    let xml = dp_sitemap::generate(&base_url, state.index.as_ref(), state.renderer.as_ref())?;

    Ok(([(header::CONTENT_TYPE, SITEMAP_CONTENT_TYPE)], xml))
}

/// Derive `{scheme}://{host}` from the request.
///
/// Host comes from the `Host` header, then the URI authority, then
/// `fallback_host`. Scheme comes from `X-Forwarded-Proto` when it names
/// `http` or `https`, otherwise `http`.
fn request_base_url(headers: &HeaderMap, uri: &Uri, fallback_host: &str) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or(fallback_host);

    // First hop wins when proxies append
    let forwarded = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);
    let scheme = match forwarded {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    format!("{scheme}://{host}").trim_end_matches('/').to_owned()
}
