//! Mock installer for testing.
//!
//! Records every install request and answers with a predefined outcome, so
//! callers can be tested without spawning package managers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{RunnerError, RunnerResult};
use crate::installer::{InstallOutcome, Installer};
use crate::manager::PackageManager;

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedInstall {
    pub manager: PackageManager,
    pub project_path: PathBuf,
}

/// Mock installer for testing.
#[derive(Clone, Default)]
pub struct MockInstaller {
    exit_code: Arc<RwLock<Option<i32>>>,
    simulate_failure: Arc<RwLock<Option<String>>>,
    captured: Arc<RwLock<Vec<CapturedInstall>>>,
}

impl MockInstaller {
    /// Create a mock that reports successful installs.
    pub fn new() -> Self {
        let mock = Self::default();
        *mock.exit_code.write() = Some(0);
        mock
    }

    /// Report this exit code from every install.
    pub fn with_exit_code(self, code: i32) -> Self {
        *self.exit_code.write() = Some(code);
        self
    }

    /// Fail every install as if the process could not be started.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.simulate_failure.write() = Some(message.into());
        self
    }

    /// All captured install calls.
    pub fn calls(&self) -> Vec<CapturedInstall> {
        self.captured.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured.read().len()
    }
}

#[async_trait]
impl Installer for MockInstaller {
    async fn install(
        &self,
        manager: PackageManager,
        project_path: &Path,
    ) -> RunnerResult<InstallOutcome> {
        self.captured.write().push(CapturedInstall {
            manager,
            project_path: project_path.to_path_buf(),
        });

        let failure = self.simulate_failure.read().clone();
        if let Some(message) = failure {
            return Err(RunnerError::InstallFailed(message));
        }

        Ok(InstallOutcome {
            command: manager.install_command(),
            exit_code: *self.exit_code.read(),
            duration_ms: 0,
        })
    }
}
