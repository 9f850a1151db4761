//! .editorconfig inspection, to flag editors fighting the rewrite

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::find_file_upward;

/// Find .editorconfig by searching upward from the given directory.
pub fn find_editorconfig(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, ".editorconfig", false)
}

/// Extract `end_of_line` from the `[*]` section of an .editorconfig file.
///
/// Only the global section is considered; per-pattern sections are skipped.
pub fn parse_editorconfig_eol(path: &Path) -> io::Result<Option<String>> {
    let content = fs::read_to_string(path)?;
    let mut end_of_line = None;
    let mut in_global_section = false;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_global_section = line == "[*]";
            continue;
        }

        if !in_global_section {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim().eq_ignore_ascii_case("end_of_line") {
                end_of_line = Some(value.trim().to_lowercase());
            }
        }
    }

    Ok(end_of_line)
}

/// Warning for an .editorconfig whose global `end_of_line` can disagree with
/// per-pattern attribute rules. Returns `None` when nothing is declared.
pub fn editorconfig_conflict_warning(end_of_line: Option<&str>) -> Option<String> {
    end_of_line.map(|eol| {
        format!(
            "editorconfig declares end_of_line={eol} for all files; \
             .gitattributes eol rules may disagree and an editor honoring \
             the editorconfig can undo rewrites"
        )
    })
}
