//! Installer trait and the shell-based implementation.

use std::path::Path;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{RunnerError, RunnerResult};
use crate::manager::PackageManager;

/// Result of an install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Command line that was executed
    pub command: String,
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl InstallOutcome {
    /// Check if the install exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Installs a project's dependencies.
#[async_trait]
pub trait Installer: Send + Sync {
    /// Run `<manager> install` inside `project_path` and wait for it to exit.
    ///
    /// A non-zero exit is reported through the outcome, not as an error.
    async fn install(
        &self,
        manager: PackageManager,
        project_path: &Path,
    ) -> RunnerResult<InstallOutcome>;
}

/// Runs the package manager through the platform shell.
///
/// The child inherits the environment and both output streams, so its
/// output reaches the terminal as it is produced.
#[derive(Debug, Clone, Default)]
pub struct ShellInstaller {
    discard_output: bool,
}

impl ShellInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard child output instead of forwarding it.
    pub fn quiet(mut self) -> Self {
        self.discard_output = true;
        self
    }

    fn shell_command(command_line: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command_line);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command_line);
            cmd
        }
    }

    /// Run an arbitrary command line in `cwd` and wait for it to exit.
    pub async fn run(&self, command_line: &str, cwd: &Path) -> RunnerResult<InstallOutcome> {
        info!("Running `{}` in {:?}", command_line, cwd);
        let start = Instant::now();

        let mut cmd = Self::shell_command(command_line);
        cmd.current_dir(cwd).stdin(Stdio::inherit());
        if self.discard_output {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd
            .status()
            .await
            .map_err(|source| RunnerError::SpawnFailed {
                command: command_line.to_string(),
                source,
            })?;

        let outcome = InstallOutcome {
            command: command_line.to_string(),
            exit_code: status.code(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        if outcome.success() {
            debug!("`{}` finished in {}ms", command_line, outcome.duration_ms);
        } else {
            warn!("`{}` exited with {:?}", command_line, outcome.exit_code);
        }

        Ok(outcome)
    }
}

#[async_trait]
impl Installer for ShellInstaller {
    async fn install(
        &self,
        manager: PackageManager,
        project_path: &Path,
    ) -> RunnerResult<InstallOutcome> {
        self.run(&manager.install_command(), project_path).await
    }
}
