//! Config file discovery and loading

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::toml_schema::EolfixToml;

/// Name of the tool configuration file.
pub const CONFIG_FILE_NAME: &str = "eolfix.toml";

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, the search ends at the first directory
/// containing `.git`. Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find eolfix.toml by searching upward from the given directory.
///
/// Stops at the first eolfix.toml found, or at the git repository root,
/// whichever comes first. Returns `None` if no config file is found.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, CONFIG_FILE_NAME, true)
}

/// Load and parse eolfix.toml from the given path.
pub fn load_config(path: &Path) -> Result<EolfixToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: EolfixToml = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Eol;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("eolfix.toml");
        fs::write(&config_path, "[resolver]\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join("eolfix.toml");
        fs::write(&config_path, "[resolver]\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir);
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_config_prefers_closer() {
        let parent = TempDir::new().unwrap();
        fs::write(parent.path().join("eolfix.toml"), "[resolver]\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();
        let child_config = child.join("eolfix.toml");
        fs::write(&child_config, "[resolver]\nenabled = false\n").unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(child_config));
    }

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("eolfix.toml");
        fs::write(
            &config_path,
            r#"
[resolver]
enabled = true

[[rules]]
pattern = "*.sh"
eol = "lf"
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.resolver.enabled);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].pattern, "*.sh");
        assert_eq!(config.rules[0].eol, Eol::Lf);
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("eolfix.toml");
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.resolver.enabled);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = load_config(&dir.path().join("eolfix.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("eolfix.toml");
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
