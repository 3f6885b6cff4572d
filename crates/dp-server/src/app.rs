//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sitemap.xml", get(handlers::sitemap::get_sitemap))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, Request, StatusCode, header};
    use chrono::{TimeZone, Utc};
    use dp_content::{MockContent, RenderedPage};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn state_with(content: MockContent, base_url: Option<&str>) -> Arc<AppState> {
        let content = Arc::new(content);
        Arc::new(AppState {
            index: Arc::clone(&content) as Arc<dyn dp_content::ContentIndex>,
            renderer: content,
            base_url: base_url.map(str::to_owned),
            fallback_host: "127.0.0.1:7979".to_owned(),
        })
    }

    fn guide_content() -> MockContent {
        let modified = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap();
        MockContent::new()
            .with_entry("guide/index")
            .with_entry("guide/setup/index")
            .with_entry("guide/internal")
            .with_entry("blog/post1")
            .with_page("", RenderedPage::new(modified))
            .with_page("setup", RenderedPage::new(modified))
            .with_page(
                "internal",
                RenderedPage::new(modified).with_front_matter("noindex", "true"),
            )
    }

    async fn get(router: Router, uri: &str, host: Option<&str>) -> (StatusCode, HeaderMap, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(host) = host {
            request = request.header(header::HOST, host);
        }
        let response = router
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_sitemap_ok() {
        let router = create_router(state_with(guide_content(), None));

        let (status, headers, body) = get(router, "/sitemap.xml", Some("docs.example.com")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/xml; charset=utf-8"
        );
        assert_eq!(
            body,
            concat!(
                r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
                "<url><loc>http://docs.example.com/guide</loc><lastmod>2025-06-01</lastmod></url>",
                "<url><loc>http://docs.example.com/guide/setup</loc><lastmod>2025-06-01</lastmod></url>",
                "</urlset>"
            )
        );
    }

    #[tokio::test]
    async fn test_sitemap_uses_configured_base_url() {
        let router = create_router(state_with(guide_content(), Some("https://public.example.com")));

        let (status, _, body) = get(router, "/sitemap.xml", Some("internal:7979")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<loc>https://public.example.com/guide</loc>"));
        assert!(!body.contains("internal:7979"));
    }

    #[tokio::test]
    async fn test_sitemap_security_headers() {
        let router = create_router(state_with(MockContent::new(), None));

        let (_, headers, _) = get(router, "/sitemap.xml", Some("docs.example.com")).await;

        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    }

    #[tokio::test]
    async fn test_sitemap_collaborator_failure_is_500() {
        let router = create_router(state_with(MockContent::new().unavailable(), None));

        let (status, _, body) = get(router, "/sitemap.xml", Some("docs.example.com")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Unavailable"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let router = create_router(state_with(guide_content(), None));

        let (status, _, _) = get(router, "/sitemap", Some("docs.example.com")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
