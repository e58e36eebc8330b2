//! The one external call behind the git decorator.
//!
//! [`StatusSource`] is the seam between "ask git" and "parse the answer".
//! Production code uses [`GitCli`], which shells out to
//! `git status --porcelain=<v> --branch`; tests supply canned text.

mod error;

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::shell_exec;

pub use error::QueryError;

/// Something that can produce a porcelain status report exactly once per render.
pub trait StatusSource {
    /// Return the raw `git status --porcelain --branch` text.
    fn query(&self) -> Result<String, QueryError>;
}

/// Which porcelain format to request from git.
///
/// The parser accepts either. v2 is the default because it carries the HEAD
/// commit id, so a detached HEAD can be shown by hash without a second git call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PorcelainVersion {
    V1,
    #[default]
    V2,
}

impl PorcelainVersion {
    fn flag(self) -> &'static str {
        match self {
            PorcelainVersion::V1 => "--porcelain=v1",
            PorcelainVersion::V2 => "--porcelain=v2",
        }
    }
}

/// Queries the repository containing `dir` (or the working directory) via the git CLI.
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: Option<PathBuf>,
    porcelain: PorcelainVersion,
}

impl GitCli {
    pub fn new(porcelain: PorcelainVersion) -> Self {
        Self {
            dir: None,
            porcelain,
        }
    }

    /// Run git as if started in `dir` instead of the process's working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn args(&self) -> [&'static str; 3] {
        ["status", self.porcelain.flag(), "--branch"]
    }
}

impl StatusSource for GitCli {
    fn query(&self) -> Result<String, QueryError> {
        let mut cmd = Command::new("git");
        cmd.args(self.args())
            // A prompt must never take index.lock out from under a concurrent git command.
            .env("GIT_OPTIONAL_LOCKS", "0");
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let context = self.dir.as_deref().map(logging_context);
        let output = shell_exec::run(&mut cmd, context.as_deref()).map_err(QueryError::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            for line in stderr.lines() {
                log::debug!("  ! {}", line);
            }
            return Err(QueryError::Failed {
                code: output.status.code(),
                stderr: stderr.to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        for line in stdout.lines() {
            log::trace!("  {}", line);
        }
        Ok(stdout)
    }
}

/// Short display name for a directory, used in trace lines.
fn logging_context(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(".")
        .to_string()
}
