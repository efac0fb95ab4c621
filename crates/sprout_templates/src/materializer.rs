//! Copying a template tree into a project directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// Directory name a template uses for its own packaging metadata.
///
/// Entries with this name are never copied into a project.
pub const RESERVED_METADATA_DIR: &str = "pkgmeta";

/// Summary of a materialization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
    /// Reserved entries left out.
    pub skipped: usize,
}

/// Reproduces a template tree file-for-file at a destination.
///
/// Files are copied as raw bytes. Nothing is rendered or substituted.
#[derive(Debug, Clone)]
pub struct Materializer {
    reserved_dir: String,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer {
    pub fn new() -> Self {
        Self {
            reserved_dir: RESERVED_METADATA_DIR.to_string(),
        }
    }

    /// Use a different reserved directory name.
    pub fn with_reserved_dir(mut self, name: impl Into<String>) -> Self {
        self.reserved_dir = name.into();
        self
    }

    /// Copy everything under `template_path` into `project_path`.
    ///
    /// `project_path` must already exist. Sub-directories are created one
    /// level at a time, so a directory already present at the destination is
    /// an error while existing files are overwritten. Nothing is rolled back
    /// on failure.
    pub fn materialize(
        &self,
        template_path: &Path,
        project_path: &Path,
    ) -> TemplateResult<MaterializeReport> {
        info!(
            "Materializing {:?} into {:?}",
            template_path, project_path
        );

        let mut report = MaterializeReport::default();
        let mut skipped = 0;

        let walker = WalkDir::new(template_path)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.file_name() == self.reserved_dir.as_str() {
                    debug!("Skipping reserved entry {:?}", entry.path());
                    skipped += 1;
                    false
                } else {
                    true
                }
            });

        for entry in walker {
            let entry = entry.map_err(|e| TemplateError::Copy {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| template_path.to_path_buf()),
                source: e.into(),
            })?;

            let Ok(relative) = entry.path().strip_prefix(template_path) else {
                continue;
            };
            let target = project_path.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir(&target).map_err(copy_error(&target))?;
                report.directories += 1;
                debug!("Created: {:?}", relative);
            } else {
                fs::copy(entry.path(), &target).map_err(copy_error(&target))?;
                report.files += 1;
                debug!("Copied: {:?}", relative);
            }
        }

        report.skipped = skipped;
        info!(
            "Materialized {} file(s) in {} director(ies), skipped {}",
            report.files, report.directories, report.skipped
        );
        Ok(report)
    }
}

fn copy_error(path: &Path) -> impl FnOnce(std::io::Error) -> TemplateError {
    let path: PathBuf = path.to_path_buf();
    move |source| TemplateError::Copy { path, source }
}
