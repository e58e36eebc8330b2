//! Errors from the single git status query.
//!
//! None of these ever reach the shell: the decorator maps every variant to an
//! empty decoration. They exist so the failure is logged precisely under `-v`
//! and so tests can tell "git missing" apart from "not a repository".

use std::fmt;

#[derive(Debug)]
pub enum QueryError {
    /// The git executable could not be started (not installed, not on PATH).
    Spawn(std::io::Error),
    /// git ran but exited unsuccessfully, e.g. outside a repository.
    Failed { code: Option<i32>, stderr: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Spawn(e) => write!(f, "Failed to run git: {}", e),
            QueryError::Failed { code, stderr } => {
                match code {
                    Some(code) => write!(f, "git status exited with code {}", code)?,
                    None => write!(f, "git status was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Spawn(e) => Some(e),
            QueryError::Failed { .. } => None,
        }
    }
}
