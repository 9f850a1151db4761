//! Locating the nearest attribute file above a directory.
//!
//! The walk starts at a file's containing directory and climbs toward the
//! project root, one level per failed read. The first directory with a
//! parseable attribute file wins outright; rule sets from higher levels are
//! never merged in.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::attributes::{parse_attributes, RuleSet, ATTRIBUTES_FILE};

/// Error raised while collecting the rule set for a file.
#[derive(Debug)]
pub enum ResolveError {
    /// The attribute file could not be opened or read. The locator recovers
    /// from this by moving one directory up.
    Read { path: PathBuf, source: io::Error },
    /// The attribute file exists but its content could not be interpreted
    /// (not valid UTF-8). Aborts the lookup for the triggering file.
    Parse { path: PathBuf, reason: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ResolveError::Parse { path, reason } => {
                write!(f, "failed to parse {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Read { source, .. } => Some(source),
            ResolveError::Parse { .. } => None,
        }
    }
}

/// Read and parse the attribute file directly inside `dir`.
///
/// A missing or unreadable file is a [`ResolveError::Read`]; content that is
/// not valid UTF-8 is a [`ResolveError::Parse`]. Content is re-read from
/// storage on every call; nothing is cached between lookups.
pub fn read_rules(dir: &Path) -> Result<RuleSet, ResolveError> {
    let path = dir.join(ATTRIBUTES_FILE);
    let bytes = fs::read(&path).map_err(|source| ResolveError::Read {
        path: path.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| ResolveError::Parse {
        path,
        reason: e.to_string(),
    })?;
    Ok(parse_attributes(&content))
}

/// Walk upward from `start_dir` (relative to `project_root`) and return the
/// rule set of the nearest directory for which `read_and_parse` succeeds.
///
/// `None` for `start_dir` means no relative directory could be computed (the
/// file lies outside the project): the result is an empty rule set with no
/// read attempted. An empty `start_dir` means the file sits directly in the
/// project root, so exactly the root is tried.
///
/// Read failures keep the walk going; once the root itself has failed, an
/// empty rule set is returned. A parse failure stops the walk and
/// propagates. The walk visits each level exactly once, so it performs at
/// most `depth(start_dir) + 1` read attempts.
pub fn locate<F>(
    project_root: &Path,
    start_dir: Option<&Path>,
    mut read_and_parse: F,
) -> Result<RuleSet, ResolveError>
where
    F: FnMut(&Path) -> Result<RuleSet, ResolveError>,
{
    let Some(start) = start_dir else {
        return Ok(RuleSet::new());
    };

    let mut segments: Vec<&OsStr> = start.iter().collect();

    loop {
        let dir = project_root.join(segments.iter().collect::<PathBuf>());
        match read_and_parse(&dir) {
            Ok(rules) => return Ok(rules),
            Err(ResolveError::Read { .. }) => {
                if segments.is_empty() {
                    return Ok(RuleSet::new());
                }
                segments.pop();
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Eol;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn fail_read(dir: &Path) -> ResolveError {
        ResolveError::Read {
            path: dir.join(ATTRIBUTES_FILE),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn test_read_rules_parses_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitattributes"), "*.sh eol=lf\n").unwrap();

        let rules = read_rules(dir.path()).unwrap();
        assert_eq!(rules.get("*.sh"), Some(Eol::Lf));
    }

    #[test]
    fn test_read_rules_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();

        let err = read_rules(dir.path()).unwrap_err();
        assert!(matches!(err, ResolveError::Read { .. }));
    }

    #[test]
    fn test_read_rules_non_utf8_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitattributes"), b"*.sh eol=lf\xff\xfe").unwrap();

        let err = read_rules(dir.path()).unwrap_err();
        assert!(matches!(err, ResolveError::Parse { .. }));
    }

    #[test]
    fn test_locate_nearest_ancestor_wins() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("a/b/c")).unwrap();
        fs::write(root.path().join(".gitattributes"), "*.txt eol=crlf\n").unwrap();
        fs::write(root.path().join("a/b/.gitattributes"), "*.txt eol=lf\n").unwrap();

        let rules = locate(root.path(), Some(Path::new("a/b/c")), read_rules).unwrap();
        assert_eq!(rules.get("*.txt"), Some(Eol::Lf));
    }

    #[test]
    fn test_locate_visits_levels_bottom_up_and_stops_at_hit() {
        let visited = RefCell::new(vec![]);
        let root = Path::new("/p");

        let rules = locate(root, Some(Path::new("a/b/c")), |dir: &Path| {
            visited.borrow_mut().push(dir.to_path_buf());
            if dir == root {
                let mut rules = RuleSet::new();
                rules.insert("*.txt", Eol::Lf);
                Ok(rules)
            } else {
                Err(fail_read(dir))
            }
        })
        .unwrap();

        assert_eq!(rules.get("*.txt"), Some(Eol::Lf));
        assert_eq!(
            *visited.borrow(),
            vec![
                PathBuf::from("/p/a/b/c"),
                PathBuf::from("/p/a/b"),
                PathBuf::from("/p/a"),
                PathBuf::from("/p"),
            ]
        );
    }

    #[test]
    fn test_locate_short_circuits_on_first_success() {
        let visited = RefCell::new(0);

        let rules = locate(Path::new("/p"), Some(Path::new("a/b")), |_dir: &Path| {
            *visited.borrow_mut() += 1;
            let mut rules = RuleSet::new();
            rules.insert("*.sh", Eol::Lf);
            Ok(rules)
        })
        .unwrap();

        assert_eq!(*visited.borrow(), 1);
        assert_eq!(rules.get("*.sh"), Some(Eol::Lf));
    }

    #[test]
    fn test_locate_no_config_anywhere_returns_empty() {
        let visited = RefCell::new(0);

        let rules = locate(Path::new("/p"), Some(Path::new("a/b/c")), |dir: &Path| {
            *visited.borrow_mut() += 1;
            Err(fail_read(dir))
        })
        .unwrap();

        assert!(rules.is_empty());
        // Three subdirectory levels plus the root itself.
        assert_eq!(*visited.borrow(), 4);
    }

    #[test]
    fn test_locate_outside_project_attempts_no_reads() {
        let visited = RefCell::new(0);

        let rules = locate(Path::new("/p"), None, |dir: &Path| {
            *visited.borrow_mut() += 1;
            Err(fail_read(dir))
        })
        .unwrap();

        assert!(rules.is_empty());
        assert_eq!(*visited.borrow(), 0);
    }

    #[test]
    fn test_locate_empty_start_dir_tries_only_root() {
        let visited = RefCell::new(vec![]);

        let rules = locate(Path::new("/p"), Some(Path::new("")), |dir: &Path| {
            visited.borrow_mut().push(dir.to_path_buf());
            Err(fail_read(dir))
        })
        .unwrap();

        assert!(rules.is_empty());
        assert_eq!(*visited.borrow(), vec![PathBuf::from("/p")]);
    }

    #[test]
    fn test_locate_propagates_parse_failure() {
        let result = locate(Path::new("/p"), Some(Path::new("a/b")), |dir: &Path| {
            Err(ResolveError::Parse {
                path: dir.join(ATTRIBUTES_FILE),
                reason: "invalid utf-8 sequence".into(),
            })
        });

        assert!(matches!(result, Err(ResolveError::Parse { .. })));
    }

    #[test]
    fn test_locate_on_filesystem_without_config() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("x/y")).unwrap();

        let rules = locate(root.path(), Some(Path::new("x/y")), read_rules).unwrap();
        assert!(rules.is_empty());
    }
}
