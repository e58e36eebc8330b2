//! Path shortening for prompts.
//!
//! Fish-style abbreviation: the home directory becomes `~`, every directory
//! except the last is cut to its first character, and the last is kept whole.
//!
//! - `/home/user/workspace/project` -> `~/w/project`
//! - `/home/user` -> `~`
//! - `/tmp/test` -> `/t/test`
//!
//! Works on the path as a string so that whatever the caller passes comes back
//! in recognizable form, even when it isn't a well-formed path.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Replacement for the home-directory prefix.
pub const HOME_MARKER: &str = "~";

const SEPARATOR: char = '/';

/// Knobs for [`shorten`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShortenOptions {
    /// Number of trailing segments kept whole. `0` abbreviates every segment.
    pub full_segments: usize,
    /// Replace the home-directory prefix with `~`.
    pub tilde: bool,
    /// Keep the first character of every whitespace-separated word instead of
    /// only the first character (`A Directory` -> `AD` rather than `A`).
    pub per_word: bool,
}

impl Default for ShortenOptions {
    fn default() -> Self {
        Self {
            full_segments: 1,
            tilde: true,
            per_word: false,
        }
    }
}

/// Get the user's home directory.
///
/// Uses the `home` crate which handles platform-specific detection:
/// - Unix: `$HOME` environment variable
/// - Windows: `USERPROFILE` or `HOMEDRIVE`/`HOMEPATH`
pub fn home_dir() -> Option<PathBuf> {
    home::home_dir()
}

/// Shorten `path` for display.
///
/// `home` is only consulted when `options.tilde` is set; it matches on whole
/// segments, so `/home/user2` is not treated as being under `/home/user`.
pub fn shorten(path: &str, home: Option<&str>, options: &ShortenOptions) -> String {
    let path = trim_trailing_separator(path);
    let path = match home {
        Some(home) if options.tilde => replace_home(path, home),
        _ => Cow::Borrowed(path),
    };

    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    let keep_from = segments.len().saturating_sub(options.full_segments);

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i >= keep_from {
                Cow::Borrowed(*segment)
            } else {
                abbreviate(segment, options.per_word)
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// `/a/b/` -> `/a/b`, leaving the root itself alone.
fn trim_trailing_separator(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

fn replace_home<'a>(path: &'a str, home: &str) -> Cow<'a, str> {
    let home = home.trim_end_matches(SEPARATOR);
    // An empty or root home would turn every absolute path into `~`.
    if home.is_empty() {
        return Cow::Borrowed(path);
    }

    match path.strip_prefix(home) {
        Some("") => Cow::Borrowed(HOME_MARKER),
        Some(rest) if rest.starts_with(SEPARATOR) => Cow::Owned(format!("{HOME_MARKER}{rest}")),
        _ => Cow::Borrowed(path),
    }
}

fn abbreviate(segment: &str, per_word: bool) -> Cow<'_, str> {
    let first_char = || segment.chars().next().map(String::from).unwrap_or_default();

    if per_word {
        let initials: String = segment
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        if initials.is_empty() {
            Cow::Owned(first_char())
        } else {
            Cow::Owned(initials)
        }
    } else {
        Cow::Owned(first_char())
    }
}
