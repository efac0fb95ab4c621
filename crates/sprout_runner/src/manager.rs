//! Supported package managers.

use std::fmt;
use std::str::FromStr;

use crate::error::RunnerError;

/// Package manager used to install a project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Every supported manager, in the order they are offered.
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    /// Get the CLI command name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Command line that installs dependencies.
    pub fn install_command(&self) -> String {
        format!("{} install", self.command())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl FromStr for PackageManager {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.command().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RunnerError::UnknownPackageManager(s.to_string()))
    }
}
