use crate::attributes::{Eol, RuleSet};
use crate::colors::Colors;
use crate::resolver::LineEnding;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

pub struct Config {
    pub check_only: bool,
    pub resolve_only: bool,
    pub output_mode: OutputMode,
    /// Rules applied when the cascade finds no attribute file for a path.
    pub fallback: RuleSet,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    pub verbose: bool,
    pub show_progress: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, verbose: bool, show_progress: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            verbose,
            show_progress,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files_fixed: usize,
    pub files_with_problems: usize,
}

impl RunResult {
    pub fn has_problems(&self) -> bool {
        self.files_with_problems > 0
    }
}

/// One `path: directive` line for `--resolve` mode.
pub fn print_resolution(path: &Path, resolution: LineEnding, ctx: &OutputContext) {
    println!(
        "{}: {}{}{}",
        path.display(),
        ctx.colors.info(),
        resolution,
        ctx.colors.reset()
    );
}

pub fn print_check_result(path: &Path, target: Eol, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        println!("{}", path.display());
        return;
    }

    println!(
        "{}Error:{} {}",
        ctx.colors.error(),
        ctx.colors.reset(),
        path.display()
    );
    println!("  - needs {target} line endings");
}

pub fn print_fix_result(
    path: &Path,
    original: &str,
    content: &str,
    target: Eol,
    ctx: &OutputContext,
) {
    match ctx.mode {
        OutputMode::Quiet => println!("{}", path.display()),
        OutputMode::Diff => print_diff(&path.display().to_string(), original, content),
        OutputMode::Normal => {
            println!(
                "{}Fixed:{} {} (eol={target})",
                ctx.colors.success(),
                ctx.colors.reset(),
                path.display()
            );
        }
    }
}

pub fn print_checked(path: &Path, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{}Checked:{} {}",
        ctx.colors.info(),
        ctx.colors.reset(),
        path.display()
    );
}

pub fn print_skipped(path: &Path, reason: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{}Skipping {}: {}{}",
        ctx.colors.info(),
        reason,
        ctx.colors.reset(),
        path.display()
    );
}

pub fn print_diff(label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
            }
        }
    }
}

pub fn print_summary(result: &RunResult, config: &Config, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet || config.resolve_only {
        return;
    }

    if config.check_only {
        if result.files_with_problems > 0 {
            println!();
            println!(
                "{}{} files with wrong line endings{}",
                ctx.colors.error(),
                result.files_with_problems,
                ctx.colors.reset()
            );
        }
    } else if result.files_fixed > 0 {
        println!();
        println!(
            "{}{} files fixed{}",
            ctx.colors.success(),
            result.files_fixed,
            ctx.colors.reset()
        );
    }
}
