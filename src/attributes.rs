//! Parsing of `.gitattributes` content into an ordered rule set.
//!
//! Only the `eol=lf|crlf` directive is recognized. Lines carrying other
//! attributes, and malformed lines, are silently skipped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed name of the attribute file looked up in each directory.
pub const ATTRIBUTES_FILE: &str = ".gitattributes";

/// A line-ending directive as stored in a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eol {
    Lf,
    Crlf,
}

impl Eol {
    /// The terminator sequence this directive stands for.
    pub fn terminator(self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::Crlf => "\r\n",
        }
    }

    /// The host platform's default line ending.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Eol::Crlf
        } else {
            Eol::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Eol::Lf => "lf",
            Eol::Crlf => "crlf",
        }
    }
}

impl fmt::Display for Eol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of (glob pattern, directive) pairs from one attribute
/// file.
///
/// Iteration order equals file order, which the resolver depends on for its
/// first-match-wins semantics. A duplicate pattern overwrites the earlier
/// value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<(String, Eol)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pattern -> eol`. An existing pattern is updated in place.
    pub fn insert(&mut self, pattern: impl Into<String>, eol: Eol) {
        let pattern = pattern.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            entry.1 = eol;
        } else {
            self.entries.push((pattern, eol));
        }
    }

    /// Look up the directive stored for an exact pattern.
    pub fn get(&self, pattern: &str) -> Option<Eol> {
        self.entries
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|&(_, eol)| eol)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Eol)> {
        self.entries.iter().map(|(p, eol)| (p.as_str(), *eol))
    }
}

impl FromIterator<(String, Eol)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (String, Eol)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (pattern, eol) in iter {
            rules.insert(pattern, eol);
        }
        rules
    }
}

/// Parse attribute file content into a rule set.
///
/// Comments are stripped first with a plain `#.*` erase, so a `#` inside a
/// glob truncates the pattern. Each remaining line is trimmed (dropping any
/// `\r` left by CRLF files) and matched against
/// `^(\S*).*eol=(lf|crlf)` case-insensitively; the directive is stored
/// lowercased. Lines that do not match yield no rule and no error.
pub fn parse_attributes(content: &str) -> RuleSet {
    let content = strip_comments(content);

    let rule_re = Regex::new(r"(?i)^(\S*).*eol=(lf|crlf)").unwrap();
    let mut rules = RuleSet::new();

    for line in content.split('\n') {
        let line = line.trim();
        if let Some(caps) = rule_re.captures(line) {
            let eol = match caps[2].to_ascii_lowercase().as_str() {
                "lf" => Eol::Lf,
                "crlf" => Eol::Crlf,
                _ => continue,
            };
            rules.insert(&caps[1], eol);
        }
    }

    rules
}

fn strip_comments(content: &str) -> String {
    let comment_re = Regex::new(r"#.*").unwrap();
    comment_re.replace_all(content, "").into_owned()
}
