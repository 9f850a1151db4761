//! TOML schema definitions for eolfix.toml

use serde::{Deserialize, Serialize};

use crate::attributes::{Eol, RuleSet};

/// Root structure for eolfix.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EolfixToml {
    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Fallback rules, used only when no attribute file is found for a file.
    /// An array of tables so that file order is preserved.
    #[serde(default)]
    pub rules: Vec<FallbackRule>,
}

impl EolfixToml {
    /// The fallback rules as a rule set, in file order.
    pub fn fallback_rule_set(&self) -> RuleSet {
        self.rules
            .iter()
            .map(|r| (r.pattern.clone(), r.eol))
            .collect()
    }
}

/// `[resolver]` section in eolfix.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverSection {
    /// Master toggle; when false the run is a no-op (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_enabled() -> bool {
    true
}

/// One `[[rules]]` entry in eolfix.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackRule {
    pub pattern: String,
    pub eol: Eol,
}
