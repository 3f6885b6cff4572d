//! Collaborator traits and error types.
//!
//! Provides [`ContentIndex`] and [`PageRenderer`] for abstracting content
//! enumeration and page lookup, along with [`ContentError`] for unified error
//! handling across backends.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// An entry in the content index.
///
/// The slug is the full path-like identifier of the source document, without
/// extension and with `/` separators (e.g., `"guide/setup/index"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEntry {
    /// Path-like identifier (e.g., "guide/index", "guide/setup/index", "blog/post1").
    pub slug: String,
}

impl ContentEntry {
    /// Create an entry for the given slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// A page the renderer knows about.
///
/// Front matter values are kept as raw strings; consumers parse the types
/// they need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Front matter key/value pairs. Keys are case-sensitive.
    pub front_matter: HashMap<String, String>,
    /// Last modification time of the page source.
    pub last_modified: DateTime<Utc>,
}

impl RenderedPage {
    /// Create a page with empty front matter.
    #[must_use]
    pub fn new(last_modified: DateTime<Utc>) -> Self {
        Self {
            front_matter: HashMap::new(),
            last_modified,
        }
    }

    /// Add a front matter value.
    #[must_use]
    pub fn with_front_matter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.front_matter.insert(key.into(), value.into());
        self
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Content error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct ContentError {
    /// Semantic error category.
    pub kind: ContentErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    /// Create a new content error.
    #[must_use]
    pub fn new(kind: ContentErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a content error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ContentErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ContentErrorKind::PermissionDenied,
            _ => ContentErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            ContentErrorKind::NotFound => "Not found",
            ContentErrorKind::PermissionDenied => "Permission denied",
            ContentErrorKind::InvalidPath => "Invalid path",
            ContentErrorKind::Unavailable => "Unavailable",
            ContentErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Enumerable index of content entries.
pub trait ContentIndex: Send + Sync {
    /// Return all indexed entries.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the index cannot be read (e.g., backend
    /// unavailable).
    fn entries(&self) -> Result<Vec<ContentEntry>, ContentError>;
}

/// Lookup of rendered pages by route slug.
pub trait PageRenderer: Send + Sync {
    /// Look up the rendered page for a route slug.
    ///
    /// # Arguments
    ///
    /// * `route_slug` - Public path below the guide section (e.g., "setup", "" for root)
    ///
    /// # Returns
    ///
    /// - `Ok(Some(page))` - A page exists for this route
    /// - `Ok(None)` - No page exists; callers treat this as expected
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the lookup itself fails.
    fn rendered(&self, route_slug: &str) -> Result<Option<RenderedPage>, ContentError>;
}
