//! Symbolic one-line rendering of a [`RepositoryStatus`].
//!
//! Output order is fixed: branch, ahead/behind, then one segment per non-zero
//! category in [`Category`] order:
//!
//! ```text
//! main ↑2↓1 ● ✚3 ?
//! ```
//!
//! A category segment is its symbol followed by its count, with the count
//! left off when it is exactly 1. Ahead/behind always show their counts.

use serde::{Deserialize, Serialize};

use crate::status::{Category, RepositoryStatus};

/// Symbols for each segment. Every field can be overridden from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Symbols {
    pub ahead: String,
    pub behind: String,
    pub staged_added: String,
    pub staged_modified: String,
    pub staged_deleted: String,
    pub unstaged_modified: String,
    pub unstaged_deleted: String,
    pub untracked: String,
    pub conflicted: String,
    /// Shown after the branch when nothing is changed. Empty means no segment.
    pub clean: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            ahead: "↑".to_string(),
            behind: "↓".to_string(),
            staged_added: "+".to_string(),
            staged_modified: "●".to_string(),
            staged_deleted: "✘".to_string(),
            unstaged_modified: "✚".to_string(),
            unstaged_deleted: "-".to_string(),
            untracked: "?".to_string(),
            conflicted: "✖".to_string(),
            clean: String::new(),
        }
    }
}

impl Symbols {
    pub fn category(&self, category: Category) -> &str {
        match category {
            Category::StagedAdded => &self.staged_added,
            Category::StagedModified => &self.staged_modified,
            Category::StagedDeleted => &self.staged_deleted,
            Category::UnstagedModified => &self.unstaged_modified,
            Category::UnstagedDeleted => &self.unstaged_deleted,
            Category::Untracked => &self.untracked,
            Category::Conflicted => &self.conflicted,
        }
    }
}

/// How segments look and how they are joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderStyle {
    pub separator: String,
    pub symbols: Symbols,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            symbols: Symbols::default(),
        }
    }
}

/// Render the status line. Empty status renders as the empty string.
pub fn render(status: &RepositoryStatus, style: &RenderStyle) -> String {
    let symbols = &style.symbols;
    let mut segments = Vec::new();

    if !status.branch.is_empty() {
        segments.push(status.branch.clone());
    }

    let mut divergence = String::new();
    if status.ahead > 0 {
        divergence.push_str(&format!("{}{}", symbols.ahead, status.ahead));
    }
    if status.behind > 0 {
        divergence.push_str(&format!("{}{}", symbols.behind, status.behind));
    }
    segments.push(divergence);

    for (category, count) in status.counts.iter() {
        if count > 0 {
            segments.push(counted(symbols.category(category), count));
        }
    }

    if !status.branch.is_empty() && status.is_clean() {
        segments.push(symbols.clean.clone());
    }

    segments.retain(|s| !s.is_empty());
    segments.join(&style.separator)
}

/// `symbol` for a single file, `symbol<count>` otherwise.
fn counted(symbol: &str, count: usize) -> String {
    if count == 1 {
        symbol.to_string()
    } else {
        format!("{symbol}{count}")
    }
}
