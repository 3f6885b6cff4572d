//! Filesystem content backend for Downpatch.
//!
//! This crate provides [`FsContent`], a filesystem-based implementation of the
//! [`ContentIndex`] and [`PageRenderer`] traits. It handles:
//!
//! - Recursive directory scanning for markdown files
//! - Route slug resolution within the guide section
//! - YAML front matter extraction
//! - Last-modified timestamps from file mtimes
//!
//! Markdown bodies are never rendered; a page "exists" when its source file
//! does.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use dp_content::{ContentIndex, PageRenderer};
//! use dp_content_fs::FsContent;
//!
//! let content = FsContent::new(PathBuf::from("content"));
//! for entry in content.entries()? {
//!     println!("{}", entry.slug);
//! }
//! let page = content.rendered("setup")?;
//! ```

mod front_matter;
mod scanner;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use dp_content::{
    ContentEntry, ContentError, ContentErrorKind, ContentIndex, PageRenderer, RenderedPage,
};

use front_matter::parse_front_matter;
use scanner::Scanner;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Directory holding guide pages, relative to the source directory.
const GUIDE_DIR: &str = "guide";

/// Filesystem content backend.
///
/// Scans a source directory recursively for markdown files. Index slugs are
/// relative paths without the `.md` extension (`guide/setup/index.md` becomes
/// `guide/setup/index`). Page lookups resolve route slugs below `guide/`.
pub struct FsContent {
    /// Root directory for content.
    source_dir: PathBuf,
    /// Scanner for document discovery.
    scanner: Scanner,
}

impl FsContent {
    /// Create a new filesystem backend rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        let scanner = Scanner::new(&source_dir);
        Self {
            source_dir,
            scanner,
        }
    }

    /// Root directory for content.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Validate that a route slug stays inside the guide directory.
    ///
    /// Rejects `..` segments and absolute routes, which would replace the
    /// base path on join.
    fn validate_route(route_slug: &str) -> Result<(), ContentError> {
        let escapes = route_slug.starts_with(['/', '\\'])
            || Path::new(route_slug).is_absolute()
            || route_slug.split(['/', '\\']).any(|segment| segment == "..");
        if escapes {
            return Err(ContentError::new(ContentErrorKind::InvalidPath)
                .with_path(route_slug)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Resolve a route slug to its source file.
    ///
    /// For the section root (`""`):
    /// 1. `guide/index.md`
    /// 2. `guide.md`
    ///
    /// For other routes:
    /// 1. `guide/{route}/index.md` (directory structure preferred)
    /// 2. `guide/{route}.md` (standalone file fallback)
    ///
    /// Returns `None` if no source file exists.
    fn resolve_source(&self, route_slug: &str) -> Option<PathBuf> {
        let guide_dir = self.source_dir.join(GUIDE_DIR);
        let candidates = if route_slug.is_empty() {
            [
                guide_dir.join("index.md"),
                self.source_dir.join(format!("{GUIDE_DIR}.md")),
            ]
        } else {
            [
                guide_dir.join(route_slug).join("index.md"),
                guide_dir.join(format!("{route_slug}.md")),
            ]
        };
        candidates.into_iter().find(|path| path.is_file())
    }

    /// Read modification time of a file as UTC.
    fn mtime(path: &Path) -> Result<DateTime<Utc>, ContentError> {
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| ContentError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))?;
        Ok(modified.into())
    }
}

impl ContentIndex for FsContent {
    fn entries(&self) -> Result<Vec<ContentEntry>, ContentError> {
        let entries: Vec<_> = self
            .scanner
            .scan()
            .into_iter()
            .map(|source| {
                tracing::trace!(slug = %source.slug, path = %source.path.display(), "Indexed source file");
                ContentEntry::new(source.slug)
            })
            .collect();
        tracing::debug!(entry_count = entries.len(), "Content scan completed");
        Ok(entries)
    }
}

impl PageRenderer for FsContent {
    fn rendered(&self, route_slug: &str) -> Result<Option<RenderedPage>, ContentError> {
        Self::validate_route(route_slug)?;

        let Some(path) = self.resolve_source(route_slug) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| ContentError::io(e, Some(path.clone())).with_backend(BACKEND))?;
        let last_modified = Self::mtime(&path)?;

        let front_matter = parse_front_matter(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse front matter, ignoring");
            HashMap::new()
        });

        Ok(Some(RenderedPage {
            front_matter,
            last_modified,
        }))
    }
}
