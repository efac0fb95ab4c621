//! Project naming and destination resolution.
//!
//! The destination a user types is resolved in two parts: the *leading path*
//! (the directory the project goes into, which must already exist) and the
//! project directory itself, which is the leading path joined with the
//! project name.

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};

/// Message shown when a project name is rejected.
pub const PROJECT_NAME_HINT: &str =
    "Project name may only include letters, numbers, hyphens, underscores and backslashes.";

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9\-\\_]+$").expect("project name pattern is a valid regex")
    })
}

/// A validated project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a project name.
    pub fn parse(input: &str) -> TemplateResult<Self> {
        if name_pattern().is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(TemplateError::InvalidProjectName {
                name: input.to_string(),
                message: PROJECT_NAME_HINT.to_string(),
            })
        }
    }

    /// Check a raw answer, returning the hint on failure.
    pub fn validate(input: &str) -> Result<(), String> {
        Self::parse(input).map(|_| ()).map_err(|_| PROJECT_NAME_HINT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Where a project will be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    /// Absolute directory the project is placed in.
    pub leading_path: PathBuf,
    /// `leading_path` joined with the project name.
    pub project_path: PathBuf,
}

impl ProjectLocation {
    /// Create the project directory.
    ///
    /// An existing directory is reused; anything else in the way fails.
    pub fn create(&self) -> TemplateResult<()> {
        fs::create_dir_all(&self.project_path).map_err(|source| {
            TemplateError::ProjectCreation {
                path: self.project_path.clone(),
                source,
            }
        })?;
        info!("Created project directory {:?}", self.project_path);
        Ok(())
    }
}

/// Resolves user-supplied destinations against the invocation directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    invocation_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver anchored at the directory sprout was started from.
    pub fn new(invocation_dir: impl Into<PathBuf>) -> Self {
        Self {
            invocation_dir: invocation_dir.into(),
        }
    }

    /// Absolute, normalized form of a raw destination answer.
    pub fn leading_path(&self, destination: &str) -> PathBuf {
        let raw = Path::new(destination);
        if raw.is_absolute() {
            normalize(raw)
        } else {
            normalize(&self.invocation_dir.join(raw))
        }
    }

    /// Resolve a destination and project name without touching the disk
    /// beyond checking that the leading path exists.
    pub fn resolve(&self, destination: &str, name: &ProjectName) -> TemplateResult<ProjectLocation> {
        let leading_path = self.leading_path(destination);
        if !leading_path.exists() {
            return Err(TemplateError::DestinationMissing(leading_path));
        }

        let project_path = leading_path.join(name);
        debug!("Resolved {:?} to {:?}", destination, project_path);

        Ok(ProjectLocation {
            leading_path,
            project_path,
        })
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
