//! # sprout_runner
//!
//! Dependency installation for freshly generated sprout projects.
//!
//! # Features
//!
//! - **Package managers**: `npm`, `yarn` and `pnpm`
//! - **Shell installer**: runs `<manager> install` through the platform
//!   shell, forwarding its output live
//! - **Mock installer**: for testing without spawning processes
//!
//! # Example
//!
//! ```rust,no_run
//! use sprout_runner::{Installer, PackageManager, ShellInstaller};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let installer = ShellInstaller::new();
//!     let outcome = installer.install(PackageManager::Pnpm, Path::new("./demo")).await?;
//!     println!("Exit code: {:?}", outcome.exit_code);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod installer;
pub mod manager;
pub mod mock;

pub use error::{RunnerError, RunnerResult};
pub use installer::{InstallOutcome, Installer, ShellInstaller};
pub use manager::PackageManager;
pub use mock::{CapturedInstall, MockInstaller};
