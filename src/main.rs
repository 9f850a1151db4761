use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eolfix::{
    editorconfig_conflict_warning, find_config_file, find_editorconfig, generate_init_file,
    load_config, parse_editorconfig_eol, run, should_use_colors, Config, EolfixToml,
    OutputContext, OutputMode, RuleSet,
};

#[derive(Parser)]
#[command(name = "eolfix")]
#[command(version, about = "Apply .gitattributes eol directives to files")]
struct Cli {
    /// Target files or directories
    #[arg(required_unless_present = "init")]
    paths: Vec<String>,

    /// Project root the attribute lookup walks up to (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Check only (no modifications), exit 1 if files need rewriting
    #[arg(short, long)]
    check: bool,

    /// Print the resolved line ending per file without modifying anything
    #[arg(short, long)]
    resolve: bool,

    /// Show changes in diff format
    #[arg(short, long)]
    diff: bool,

    /// Output only affected file names
    #[arg(short, long)]
    quiet: bool,

    /// Also report skipped and already-conforming files
    #[arg(short, long)]
    verbose: bool,

    /// Generate a template eolfix.toml configuration file
    #[arg(long)]
    init: bool,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.init {
        return handle_init();
    }

    let toml_config = load_configuration(&cli.config, cli.quiet);

    // Master toggle from eolfix.toml; a disabled tree is a successful no-op.
    if let Some(ref config) = toml_config {
        if !config.resolver.enabled {
            if !cli.quiet {
                eprintln!("eolfix is disabled in eolfix.toml, nothing to do");
            }
            return ExitCode::SUCCESS;
        }
    }

    if !cli.quiet {
        check_editorconfig_warnings();
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };

    let config = Config {
        check_only: cli.check,
        resolve_only: cli.resolve,
        output_mode,
        fallback: toml_config
            .map(|c| c.fallback_rule_set())
            .unwrap_or_else(RuleSet::new),
    };

    let ctx = OutputContext::new(
        output_mode,
        should_use_colors(cli.color, cli.no_color),
        cli.verbose,
        !cli.no_progress,
    );

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));

    match run(&root, &cli.paths, &config, &ctx) {
        Ok(result) => {
            if config.check_only && result.has_problems() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>, quiet: bool) -> Option<EolfixToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => {
            if !quiet {
                eprintln!("Using config: {}", p.display());
            }
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}

fn check_editorconfig_warnings() {
    if let Some(editorconfig_path) = std::env::current_dir()
        .ok()
        .and_then(|d| find_editorconfig(&d))
    {
        if let Ok(end_of_line) = parse_editorconfig_eol(&editorconfig_path) {
            if let Some(warning) = editorconfig_conflict_warning(end_of_line.as_deref()) {
                eprintln!("Warning: {warning}");
            }
        }
    }
}
