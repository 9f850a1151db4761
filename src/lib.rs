pub mod attributes;
pub mod colors;
pub mod config;
pub mod locator;
mod output;
pub mod progress;
pub mod resolver;
pub mod translate;
pub mod walker;

pub use attributes::{parse_attributes, Eol, RuleSet, ATTRIBUTES_FILE};
pub use colors::{should_use_colors, Colors};
pub use config::{
    editorconfig_conflict_warning, find_config_file, find_editorconfig, generate_init_file,
    load_config, parse_editorconfig_eol, ConfigError, EolfixToml, FallbackRule, ResolverSection,
    CONFIG_FILE_NAME, EOLFIX_TOML_TEMPLATE,
};
pub use locator::{locate, read_rules, ResolveError};
pub use output::{print_diff, Config, OutputContext, OutputMode, RunResult};
pub use progress::ProgressReporter;
pub use resolver::{resolve, LineEnding};
pub use translate::{translate_line_endings, uses_line_endings};
pub use walker::walk_paths;

use std::fs;
use std::io;
use std::path::Path;

const BINARY_CHECK_SIZE: usize = 8192;

/// Check if content is binary by looking for NUL bytes in the first 8192 bytes
pub fn is_binary(content: &[u8]) -> bool {
    let check_len = content.len().min(BINARY_CHECK_SIZE);
    content[..check_len].contains(&0)
}

/// Main entry point: resolve and apply line endings for all files in the
/// given paths, relative to `project_root`.
pub fn run(
    project_root: &Path,
    paths: &[String],
    config: &Config,
    ctx: &OutputContext,
) -> io::Result<RunResult> {
    let project_root = fs::canonicalize(project_root)?;
    let mut result = RunResult::default();

    // Count files for the progress bar (2-pass approach)
    let file_count: u64 = walk_paths(paths).filter_map(|r| r.ok()).count() as u64;

    let progress = ProgressReporter::new(file_count, ctx.show_progress);

    for path in walk_paths(paths) {
        let path = path?;

        if let Some(name) = path.file_name() {
            progress.set_message(&name.to_string_lossy());
        }

        if let Err(e) = process_file(&project_root, &path, config, &mut result, ctx) {
            if ctx.mode != OutputMode::Quiet {
                eprintln!("Error processing {}: {e}", path.display());
            }
        }

        progress.inc();
    }

    progress.finish();

    output::print_summary(&result, config, ctx);

    Ok(result)
}

/// Resolve the directive for one file and rewrite or report it.
///
/// The attribute cascade is re-read from storage for every file; nothing is
/// cached between files, so edits to an attribute file take effect
/// mid-run.
fn process_file(
    project_root: &Path,
    path: &Path,
    config: &Config,
    result: &mut RunResult,
    ctx: &OutputContext,
) -> io::Result<()> {
    let full_path = fs::canonicalize(path)?;

    // A file outside the project has no relative directory and gets no rules.
    let rel_dir = full_path
        .strip_prefix(project_root)
        .ok()
        .and_then(Path::parent)
        .map(Path::to_path_buf);

    let mut rules =
        locate(project_root, rel_dir.as_deref(), read_rules).map_err(io::Error::other)?;
    if rules.is_empty() {
        rules = config.fallback.clone();
    }

    let resolution = resolve(&full_path, &rules);

    if config.resolve_only {
        output::print_resolution(path, resolution, ctx);
        return Ok(());
    }

    // The original only rewrote documents a glob matched; an unmatched file
    // stays untouched rather than being forced to the platform default.
    if resolution == LineEnding::Platform {
        if ctx.verbose {
            output::print_skipped(path, "no matching rule", ctx);
        }
        return Ok(());
    }

    let bytes = fs::read(path)?;

    if bytes.is_empty() {
        if ctx.verbose {
            output::print_skipped(path, "empty", ctx);
        }
        return Ok(());
    }

    if is_binary(&bytes) {
        if ctx.verbose {
            output::print_skipped(path, "binary", ctx);
        }
        return Ok(());
    }

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(_) => {
            if ctx.verbose {
                output::print_skipped(path, "non-UTF-8", ctx);
            }
            return Ok(());
        }
    };

    let target = resolution.eol();

    if uses_line_endings(&content, target) {
        if ctx.verbose {
            output::print_checked(path, ctx);
        }
        return Ok(());
    }

    if config.check_only {
        result.files_with_problems += 1;
        output::print_check_result(path, target, ctx);
    } else {
        let fixed = translate_line_endings(&content, target);
        fs::write(path, &fixed)?;
        result.files_fixed += 1;
        output::print_fix_result(path, &content, &fixed, target, ctx);
    }

    Ok(())
}
