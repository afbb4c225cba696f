//! Rendering of untracked resources
//!
//! Reports go to any `io::Write` so they can be piped; status messages are
//! printed separately through `ui`.

use anyhow::Result;
use driftkit::Resource;
use std::io::Write;

/// Report format selected with `-o`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name; unrecognized names fall back to text.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "yaml" | "yml" => Self::Yaml,
            "text" => Self::Text,
            other => {
                log::warn!("Unknown output format '{other}', using text");
                Self::Text
            }
        }
    }
}

/// Write the report in the requested format
pub fn render<W: Write>(out: &mut W, format: OutputFormat, resources: &[&Resource]) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, resources),
        OutputFormat::Yaml => render_yaml(out, resources),
    }
}

/// Human-readable listing with aligned kind / namespace / name columns
pub fn render_text<W: Write>(out: &mut W, resources: &[&Resource]) -> Result<()> {
    if resources.is_empty() {
        writeln!(out, "No untracked resources found")?;
        return Ok(());
    }

    let kind_width = resources
        .iter()
        .map(|r| r.kind.len())
        .max()
        .unwrap_or(0)
        .max("KIND".len());
    let namespace_width = resources
        .iter()
        .map(|r| display_namespace(r).len())
        .max()
        .unwrap_or(0)
        .max("NAMESPACE".len());

    writeln!(out, "Untracked resources ({}):", resources.len())?;
    writeln!(
        out,
        "{:<kind_width$}  {:<namespace_width$}  NAME",
        "KIND", "NAMESPACE"
    )?;
    for resource in resources {
        writeln!(
            out,
            "{:<kind_width$}  {:<namespace_width$}  {}",
            resource.kind,
            display_namespace(resource),
            resource.name()
        )?;
    }
    Ok(())
}

/// Re-serializable YAML sequence of `{kind, metadata}`
pub fn render_yaml<W: Write>(out: &mut W, resources: &[&Resource]) -> Result<()> {
    let yaml = serde_yaml::to_string(resources)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

fn display_namespace(resource: &Resource) -> &str {
    match resource.namespace() {
        "" => "-",
        ns => ns,
    }
}

// ============================================================================
// Tests
// ============================================================================
