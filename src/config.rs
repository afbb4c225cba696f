use anyhow::{Context, Result};
use driftkit::{CommandSpec, DEFAULT_NON_NAMESPACED_KINDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of `untrak.yaml`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Commands printing the source of truth
    #[serde(rename = "in", default)]
    pub input: Vec<CommandSpec>,
    /// Commands printing the actual state
    #[serde(rename = "out", default)]
    pub output: Vec<CommandSpec>,
    /// Regexes matched against `kind/namespace/name`, case-insensitive
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Extra cluster-scoped kinds, on top of the built-in list
    #[serde(rename = "nonNamespaced", default)]
    pub non_namespaced: Vec<String>,
}

impl Config {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot load {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Configured kinds followed by the built-in cluster-scoped kinds
    pub fn non_namespaced_kinds(&self) -> Vec<String> {
        self.non_namespaced
            .iter()
            .cloned()
            .chain(DEFAULT_NON_NAMESPACED_KINDS.iter().map(|k| k.to_string()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
