//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILE_NAME;

/// Template eolfix.toml with documentation
pub const EOLFIX_TOML_TEMPLATE: &str = r#"# eolfix.toml - Configuration for eolfix
#
# eolfix rewrites the line endings of files to match the eol directives in
# the nearest .gitattributes above each file. The settings below control the
# tool itself - uncomment and modify as needed.

[resolver]
# Master toggle. Set to false to make eolfix a no-op for this tree,
# for example while migrating line endings in stages.
# Default: true
# enabled = true

# Fallback rules, applied only to files for which no .gitattributes was
# found anywhere between their directory and the project root. Rules are
# tried in order; the first matching pattern wins.
#
# [[rules]]
# pattern = "*.sh"
# eol = "lf"
#
# [[rules]]
# pattern = "*.bat"
# eol = "crlf"
"#;

/// Generate eolfix.toml in the specified directory (or current directory if None).
///
/// Returns an error if eolfix.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |d| d.join(CONFIG_FILE_NAME));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "eolfix.toml already exists",
        ));
    }

    fs::write(&path, EOLFIX_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate eolfix.toml in the current directory.
///
/// Returns an error if eolfix.toml already exists.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_init_file_creates_file() {
        let dir = TempDir::new().unwrap();

        let result = generate_init_file_in(Some(dir.path()));
        assert!(result.is_ok());

        let path = result.unwrap();
        assert!(path.exists());
        assert_eq!(path, dir.path().join("eolfix.toml"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[resolver]"));
        assert!(content.contains("pattern"));
    }

    #[test]
    fn test_generate_init_file_fails_if_exists() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("eolfix.toml");

        fs::write(&config_path, "existing").unwrap();

        let result = generate_init_file_in(Some(dir.path()));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: Result<super::super::toml_schema::EolfixToml, _> =
            toml::from_str(EOLFIX_TOML_TEMPLATE);
        assert!(parsed.is_ok());
    }
}
