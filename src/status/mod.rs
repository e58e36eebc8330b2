//! Repository status as reported by one `git status --porcelain --branch` call.
//!
//! A [`RepositoryStatus`] is built once per prompt render from the raw text,
//! handed to the renderer, and dropped. Building it never fails: anything the
//! parser does not recognize is skipped.

mod parse;

/// Change category a file can be counted under.
///
/// Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    StagedAdded,
    StagedModified,
    StagedDeleted,
    UnstagedModified,
    UnstagedDeleted,
    Untracked,
    Conflicted,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::StagedAdded,
        Category::StagedModified,
        Category::StagedDeleted,
        Category::UnstagedModified,
        Category::UnstagedDeleted,
        Category::Untracked,
        Category::Conflicted,
    ];

    /// Category for the index (first) column of a status code.
    ///
    /// Renames and type changes count as modifications; copies count as additions.
    pub fn staged(code: char) -> Option<Self> {
        match code {
            'A' | 'C' => Some(Category::StagedAdded),
            'M' | 'R' | 'T' => Some(Category::StagedModified),
            'D' => Some(Category::StagedDeleted),
            _ => None,
        }
    }

    /// Category for the worktree (second) column of a status code.
    pub fn unstaged(code: char) -> Option<Self> {
        match code {
            'M' | 'T' => Some(Category::UnstagedModified),
            'D' => Some(Category::UnstagedDeleted),
            _ => None,
        }
    }

    /// Kebab-case name, matching the config keys for symbols.
    pub fn name(self) -> &'static str {
        match self {
            Category::StagedAdded => "staged-added",
            Category::StagedModified => "staged-modified",
            Category::StagedDeleted => "staged-deleted",
            Category::UnstagedModified => "unstaged-modified",
            Category::UnstagedDeleted => "unstaged-deleted",
            Category::Untracked => "untracked",
            Category::Conflicted => "conflicted",
        }
    }
}

/// Independent per-category file counters.
///
/// A file may be counted in two categories at once (`MM` is both staged and
/// unstaged), so the counts are not a partition of the files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts([usize; 7]);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.0[category as usize]
    }

    pub fn increment(&mut self, category: Category) {
        self.0[category as usize] += 1;
    }

    /// Count one file from its two-character status code.
    ///
    /// `index` is the staged column and `worktree` the unstaged one. Both
    /// porcelain versions are accepted: v2 writes `.` where v1 writes a space.
    /// Unmerged combinations count only as conflicted; unknown codes count as
    /// nothing.
    pub fn record(&mut self, index: char, worktree: char) {
        let index = if index == '.' { ' ' } else { index };
        let worktree = if worktree == '.' { ' ' } else { worktree };

        match (index, worktree) {
            ('?', '?') => self.increment(Category::Untracked),
            ('!', '!') => {}
            ('U', _) | (_, 'U') | ('D', 'D') | ('A', 'A') => self.increment(Category::Conflicted),
            _ => {
                if let Some(category) = Category::staged(index) {
                    self.increment(category);
                }
                if let Some(category) = Category::unstaged(worktree) {
                    self.increment(category);
                }
            }
        }
    }

    /// Categories with their counts, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }
}

/// Branch, tracking and change counts for one repository at one moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    /// Branch name, `:<short-hash>` / `HEAD` when detached, empty when unknown.
    pub branch: String,
    /// Configured upstream, e.g. `origin/main`.
    pub upstream: Option<String>,
    pub ahead: usize,
    pub behind: usize,
    pub counts: CategoryCounts,
}

impl RepositoryStatus {
    /// Parse porcelain v1 or v2 output (with `--branch`).
    ///
    /// Total over arbitrary input: without a recognizable branch header the
    /// result is the empty status.
    pub fn parse(output: &str) -> Self {
        parse::parse_status(output)
    }

    /// True when no file falls into any category.
    pub fn is_clean(&self) -> bool {
        self.counts.is_empty()
    }

    /// True for the status produced from empty or unrecognized output.
    pub fn is_empty(&self) -> bool {
        self.branch.is_empty() && self.ahead == 0 && self.behind == 0 && self.counts.is_empty()
    }
}
