//! Picking the winning line-ending directive for a file path.

use globset::GlobBuilder;
use std::fmt;
use std::path::Path;

use crate::attributes::{Eol, RuleSet};

/// Outcome of resolving a file path against a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    /// No rule matched; the host platform's convention applies.
    Platform,
}

impl LineEnding {
    /// The concrete directive to apply, with `Platform` mapped to the host
    /// default.
    pub fn eol(self) -> Eol {
        match self {
            LineEnding::Lf => Eol::Lf,
            LineEnding::Crlf => Eol::Crlf,
            LineEnding::Platform => Eol::platform_default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
            LineEnding::Platform => "platform",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Eol> for LineEnding {
    fn from(eol: Eol) -> Self {
        match eol {
            Eol::Lf => LineEnding::Lf,
            Eol::Crlf => LineEnding::Crlf,
        }
    }
}

/// Evaluate `rules` against `full_path` and return the directive of the
/// first matching pattern.
///
/// Entries are tested in file order and the first hit wins, so a later, more
/// specific rule never overrides an earlier broad one. With no hit the
/// result is [`LineEnding::Platform`]. `full_path` is used as supplied; the
/// caller passes it absolute and normalized.
pub fn resolve(full_path: &Path, rules: &RuleSet) -> LineEnding {
    for (pattern, eol) in rules.iter() {
        if pattern_matches(pattern, full_path) {
            return eol.into();
        }
    }
    LineEnding::Platform
}

/// Shell-glob match with basename semantics: a pattern without a slash is
/// tested against the file's base name, a pattern with a slash against the
/// whole path. `*` does not cross directory separators. A pattern that does
/// not compile matches nothing.
fn pattern_matches(pattern: &str, path: &Path) -> bool {
    let glob = match GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
    {
        Ok(glob) => glob,
        Err(_) => return false,
    };
    let matcher = glob.compile_matcher();

    if pattern.contains('/') {
        matcher.is_match(path)
    } else {
        path.file_name()
            .map(|name| matcher.is_match(Path::new(name)))
            .unwrap_or(false)
    }
}
