//! Mock content implementation for testing.
//!
//! Provides [`MockContent`] for unit testing without filesystem access.

use std::collections::HashMap;

use crate::content::{
    ContentEntry, ContentError, ContentErrorKind, ContentIndex, PageRenderer, RenderedPage,
};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// In-memory content index and page renderer.
///
/// Entries and pages are registered independently, so tests can model
/// indexed slugs without a page, and pages no entry points at.
///
/// # Example
///
/// ```ignore
/// use dp_content::{MockContent, RenderedPage};
///
/// let content = MockContent::new()
///     .with_entry("guide/setup/index")
///     .with_page("setup", RenderedPage::new(modified));
/// ```
#[derive(Debug, Default)]
pub struct MockContent {
    entries: Vec<ContentEntry>,
    pages: HashMap<String, RenderedPage>,
    unavailable: bool,
}

impl MockContent {
    /// Create a new empty mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an index entry with the given slug.
    #[must_use]
    pub fn with_entry(mut self, slug: impl Into<String>) -> Self {
        self.entries.push(ContentEntry::new(slug));
        self
    }

    /// Register a rendered page under a route slug.
    ///
    /// Lookups match the route slug exactly.
    #[must_use]
    pub fn with_page(mut self, route_slug: impl Into<String>, page: RenderedPage) -> Self {
        self.pages.insert(route_slug.into(), page);
        self
    }

    /// Make every call fail with [`ContentErrorKind::Unavailable`].
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check_available(&self) -> Result<(), ContentError> {
        if self.unavailable {
            return Err(ContentError::new(ContentErrorKind::Unavailable).with_backend(BACKEND));
        }
        Ok(())
    }
}

impl ContentIndex for MockContent {
    fn entries(&self) -> Result<Vec<ContentEntry>, ContentError> {
        self.check_available()?;
        Ok(self.entries.clone())
    }
}

impl PageRenderer for MockContent {
    fn rendered(&self, route_slug: &str) -> Result<Option<RenderedPage>, ContentError> {
        self.check_available()?;
        Ok(self.pages.get(route_slug).cloned())
    }
}
