//! The git decorator: one query, one parse, one rendered line.

use crate::git::StatusSource;
use crate::render::{RenderStyle, render};
use crate::status::RepositoryStatus;

/// Query `source` once and render the result.
///
/// Any query failure (git missing, not a repository) yields the empty string
/// so the prompt simply shows no decoration.
pub fn decorate(source: &impl StatusSource, style: &RenderStyle) -> String {
    let output = match source.query() {
        Ok(output) => output,
        Err(e) => {
            log::debug!("No git decoration: {}", e);
            return String::new();
        }
    };

    let status = RepositoryStatus::parse(&output);
    log::debug!("Parsed status: {:?}", status);
    render(&status, style)
}
