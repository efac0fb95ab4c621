//! # sprout_templates
//!
//! Template discovery and project materialization for sprout.
//!
//! This crate handles everything that touches the filesystem before the
//! package manager runs:
//!
//! - Listing the templates available under a templates root
//! - Validating project names
//! - Resolving the destination and creating the project directory
//! - Copying a template tree verbatim into the project
//!
//! ## Example
//!
//! ```rust,no_run
//! use sprout_templates::{Materializer, PathResolver, ProjectName, TemplateLoader};
//!
//! let loader = TemplateLoader::new("templates");
//! let template = loader.get("basic").unwrap();
//!
//! let name = ProjectName::parse("my-app").unwrap();
//! let resolver = PathResolver::new(std::env::current_dir().unwrap());
//! let location = resolver.resolve(".", &name).unwrap();
//! location.create().unwrap();
//!
//! let report = Materializer::new()
//!     .materialize(&template.path, &location.project_path)
//!     .unwrap();
//! println!("copied {} files", report.files);
//! ```

pub mod error;
pub mod loader;
pub mod materializer;
pub mod project;

pub use error::{TemplateError, TemplateResult};
pub use loader::{Template, TemplateLoader};
pub use materializer::{MaterializeReport, Materializer, RESERVED_METADATA_DIR};
pub use project::{PathResolver, ProjectLocation, ProjectName, PROJECT_NAME_HINT};
