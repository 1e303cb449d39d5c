//! Source file discovery

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &["target", "node_modules"];

/// Selects files by extension and excluded path components
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    exclude: Vec<String>,
}

impl FileFilter {
    pub fn new(extensions: &[String], exclude: &[String]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            exclude: exclude.to_vec(),
        }
    }

    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| *wanted == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.exclude.iter().any(|excluded| *excluded == name)
        })
    }

    fn descend(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if self.exclude.iter().any(|excluded| *excluded == name) {
            return false;
        }
        // Roots are walked even when given as "." or a hidden directory
        entry.depth() == 0
            || !(entry.file_type().is_dir()
                && (name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())))
    }
}

/// Collect the files to check under `roots`.
///
/// Files named explicitly are kept regardless of their extension; directories
/// are walked recursively. The result is sorted and free of duplicates.
pub fn collect_files(roots: &[PathBuf], filter: &FileFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            if !filter.is_excluded(root) {
                files.push(root.clone());
            }
            continue;
        }

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| filter.descend(entry))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() && filter.matches_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!("Discovered {} files", files.len());
    files
}
