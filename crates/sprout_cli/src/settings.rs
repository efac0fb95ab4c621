//! Runtime settings resolved once at start-up.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Cli;

/// Name of the templates directory shipped next to the binary.
const TEMPLATES_DIR_NAME: &str = "templates";

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory whose sub-directories are the selectable templates.
    pub templates_root: PathBuf,
    /// Directory sprout was started from.
    pub invocation_dir: PathBuf,
    /// Show the progress spinner while copying.
    pub show_spinner: bool,
}

impl Settings {
    /// Build settings from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let invocation_dir =
            std::env::current_dir().context("Failed to read the current directory")?;

        let templates_root = match &cli.templates_dir {
            Some(dir) => absolutize(&invocation_dir, dir),
            None => default_templates_root(),
        };
        debug!("Templates root: {:?}", templates_root);

        Ok(Self {
            templates_root,
            invocation_dir,
            show_spinner: !cli.quiet,
        })
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// `templates/` beside the installed executable, else the workspace copy.
fn default_templates_root() -> PathBuf {
    let installed = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR_NAME)));

    match installed {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(TEMPLATES_DIR_NAME),
    }
}
