//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use dp_content::{ContentIndex, PageRenderer};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content index enumerating all entries.
    pub(crate) index: Arc<dyn ContentIndex>,
    /// Page lookup by route slug.
    pub(crate) renderer: Arc<dyn PageRenderer>,
    /// Configured public base URL, without trailing slash.
    ///
    /// `None` derives the base URL from each request.
    pub(crate) base_url: Option<String>,
    /// Host used when a request carries no `Host` header.
    pub(crate) fallback_host: String,
}
