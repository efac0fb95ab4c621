//! Template discovery.

use std::path::PathBuf;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// A template directory under the templates root.
///
/// The directory name is the template's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub path: PathBuf,
}

/// Template loader.
pub struct TemplateLoader {
    templates_path: PathBuf,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new(templates_path: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
        }
    }

    /// List every template, sorted by name.
    ///
    /// Only immediate sub-directories count; plain files and hidden entries
    /// in the root are ignored.
    pub fn list(&self) -> TemplateResult<Vec<Template>> {
        if !self.templates_path.is_dir() {
            return Err(TemplateError::RootMissing(self.templates_path.clone()));
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(&self.templates_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('.') || !entry.file_type().is_dir() {
                debug!("Skipping non-template entry {:?}", entry.path());
                continue;
            }

            templates.push(Template {
                name,
                path: entry.path().to_path_buf(),
            });
        }

        info!(
            "Found {} template(s) in {:?}",
            templates.len(),
            self.templates_path
        );
        Ok(templates)
    }

    /// List templates, failing when the root holds none.
    pub fn list_non_empty(&self) -> TemplateResult<Vec<Template>> {
        let templates = self.list()?;
        if templates.is_empty() {
            return Err(TemplateError::NoTemplates(self.templates_path.clone()));
        }
        Ok(templates)
    }

    /// Look up a single template by name.
    pub fn get(&self, name: &str) -> TemplateResult<Template> {
        self.list()?
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }
}
