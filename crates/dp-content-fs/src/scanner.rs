//! Content discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

/// Reference to a markdown source file found during scanning.
#[derive(Debug, Clone)]
pub(crate) struct SourceRef {
    /// Slug (relative path without `.md`, `/` separated).
    pub slug: String,
    /// Absolute path to the file.
    pub path: PathBuf,
}

/// Walks a source directory and collects markdown files.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `source_dir`.
    pub fn new(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
        }
    }

    /// Scan the filesystem and return source references sorted by slug.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    pub fn scan(&self) -> Vec<SourceRef> {
        let mut refs = Vec::new();
        if self.source_dir.exists() {
            self.scan_directory(&self.source_dir, "", &mut refs);
        }
        refs.sort_by(|a, b| a.slug.cmp(&b.slug));
        refs
    }

    fn scan_directory(&self, dir_path: &Path, slug_prefix: &str, refs: &mut Vec<SourceRef>) {
        let Ok(entries) = fs::read_dir(dir_path) else {
            tracing::warn!(path = %dir_path.display(), "Failed to read content directory, skipping");
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            // Skip hidden files/dirs
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                let child_prefix = join_slug(slug_prefix, &name);
                self.scan_directory(&path, &child_prefix, refs);
            } else if let Some(stem) = name.strip_suffix(".md") {
                refs.push(SourceRef {
                    slug: join_slug(slug_prefix, stem),
                    path,
                });
            }
        }
    }
}

/// Join a slug prefix and a path segment with `/`.
fn join_slug(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}
