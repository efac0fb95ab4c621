//! Command line definition.
//!
//! sprout needs no arguments: every answer is gathered interactively. The
//! flags below only adjust where templates come from and how chatty the
//! tool is.

use std::path::PathBuf;

use clap::Parser;

/// sprout - scaffold a new project from a template
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(version, about = "sprout - scaffold a new project from a template")]
#[command(long_about = r#"
sprout asks which template to use, what to call the project and where to put
it, copies the template into a new directory and can run the package manager
install for you.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Destination does not exist
  3 - Project directory could not be created
  4 - Template copy failed
  5 - No templates available
"#)]
pub struct Cli {
    /// Directory holding the templates
    #[arg(long, env = "SPROUT_TEMPLATES_DIR", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
