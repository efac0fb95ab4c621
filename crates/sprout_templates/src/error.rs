//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while preparing and materializing a project.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Templates directory does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("No templates found in {}", .0.display())]
    NoTemplates(PathBuf),

    #[error("Invalid project name {name:?}: {message}")]
    InvalidProjectName { name: String, message: String },

    #[error("The path {} does not exist.", .0.display())]
    DestinationMissing(PathBuf),

    #[error("Error creating directory {}: {source}", path.display())]
    ProjectCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy template entry {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
