//! Configuration file support for eolfix.
//!
//! This module provides:
//! - Loading configuration from `eolfix.toml`
//! - Config file discovery (search upward from current directory)
//! - Template generation with `--init`
//! - `.editorconfig` inspection for end_of_line conflicts

mod editorconfig;
mod file;
mod init;
mod toml_schema;

pub use editorconfig::{editorconfig_conflict_warning, find_editorconfig, parse_editorconfig_eol};
pub use file::{find_config_file, find_file_upward, load_config, ConfigError, CONFIG_FILE_NAME};
pub use init::{generate_init_file, generate_init_file_in, EOLFIX_TOML_TEMPLATE};
pub use toml_schema::{EolfixToml, FallbackRule, ResolverSection};
