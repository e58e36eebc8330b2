//! Porcelain output parsing

use super::{Category, RepositoryStatus};

/// Length of the abbreviated hash shown for a detached HEAD.
const SHORT_HASH_LEN: usize = 7;

/// Prefix that marks a detached HEAD shown by hash, so it can't be mistaken
/// for a branch name.
const HASH_PREFIX: char = ':';

/// Marker for a detached HEAD when the commit id is unknown (v1, or no commits).
const DETACHED_MARKER: &str = "HEAD";

pub(super) fn parse_status(output: &str) -> RepositoryStatus {
    let mut lines = output.lines().filter(|line| !line.is_empty());

    let Some(first) = lines.next() else {
        return RepositoryStatus::default();
    };

    if let Some(header) = first.strip_prefix("##") {
        parse_v1(header.trim(), lines)
    } else if first.starts_with("# ") {
        parse_v2(std::iter::once(first).chain(lines))
    } else {
        log::debug!("Status output has no branch header: {:?}", first);
        RepositoryStatus::default()
    }
}

/// `## <branch>[...<upstream>] [ahead N, behind M]` followed by `XY path` lines.
fn parse_v1<'a>(header: &str, entries: impl Iterator<Item = &'a str>) -> RepositoryStatus {
    let mut status = RepositoryStatus::default();
    apply_v1_header(header, &mut status);

    for line in entries {
        let mut chars = line.chars();
        if let (Some(index), Some(worktree)) = (chars.next(), chars.next()) {
            status.counts.record(index, worktree);
        }
    }

    status
}

fn apply_v1_header(header: &str, status: &mut RepositoryStatus) {
    // Unborn branches: "No commits yet on main" (older git: "Initial commit on main")
    let header = header
        .strip_prefix("No commits yet on ")
        .or_else(|| header.strip_prefix("Initial commit on "))
        .unwrap_or(header);

    // Ref names can't contain spaces, so the first space ends the branch part.
    let (refs, rest) = header.split_once(' ').unwrap_or((header, ""));

    // "HEAD (no branch)"
    if refs == DETACHED_MARKER {
        status.branch = DETACHED_MARKER.to_string();
        return;
    }

    match refs.split_once("...") {
        Some((branch, upstream)) => {
            status.branch = branch.to_string();
            if !upstream.is_empty() {
                status.upstream = Some(upstream.to_string());
            }
        }
        None => status.branch = refs.to_string(),
    }

    let Some(tracking) = rest
        .trim()
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
    else {
        return;
    };

    for part in tracking.split(',').map(str::trim) {
        match part.split_once(' ') {
            Some(("ahead", n)) => status.ahead = n.trim().parse().unwrap_or(0),
            Some(("behind", n)) => status.behind = n.trim().parse().unwrap_or(0),
            // "gone" (upstream deleted) and anything newer git may add
            _ => {}
        }
    }
}

/// `# branch.*` headers followed by `1`, `2`, `u`, `?` and `!` entries.
fn parse_v2<'a>(lines: impl Iterator<Item = &'a str>) -> RepositoryStatus {
    let mut status = RepositoryStatus::default();
    let mut oid = None;
    let mut head = None;

    for line in lines {
        let Some((kind, rest)) = line.split_once(' ') else {
            continue;
        };

        match kind {
            "#" => {
                let (key, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match key {
                    "branch.oid" => oid = Some(value),
                    "branch.head" => head = Some(value),
                    "branch.upstream" => status.upstream = Some(value.to_string()),
                    "branch.ab" => apply_v2_ab(value, &mut status),
                    // "stash" and future headers
                    _ => {}
                }
            }
            // Ordinary and renamed/copied entries carry an XY code
            "1" | "2" => {
                let mut chars = rest.chars();
                if let (Some(index), Some(worktree)) = (chars.next(), chars.next()) {
                    status.counts.record(index, worktree);
                }
            }
            "u" => status.counts.increment(Category::Conflicted),
            "?" => status.counts.increment(Category::Untracked),
            // "!" (ignored) and unknown entry types
            _ => {}
        }
    }

    match head {
        Some(head) => {
            status.branch = v2_branch_name(head, oid);
            status
        }
        None => {
            log::debug!("Porcelain v2 output has no branch.head header");
            RepositoryStatus::default()
        }
    }
}

/// `+<ahead> -<behind>`
fn apply_v2_ab(value: &str, status: &mut RepositoryStatus) {
    for part in value.split_whitespace() {
        if let Some(n) = part.strip_prefix('+') {
            status.ahead = n.parse().unwrap_or(0);
        } else if let Some(n) = part.strip_prefix('-') {
            status.behind = n.parse().unwrap_or(0);
        }
    }
}

/// Branch name, or the abbreviated commit id when HEAD is detached.
fn v2_branch_name(head: &str, oid: Option<&str>) -> String {
    if head != "(detached)" {
        return head.to_string();
    }
    match oid {
        Some(oid) if oid != "(initial)" && !oid.is_empty() => {
            let short: String = oid.chars().take(SHORT_HASH_LEN).collect();
            format!("{HASH_PREFIX}{short}")
        }
        _ => DETACHED_MARKER.to_string(),
    }
}
