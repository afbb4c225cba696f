//! Terminal status messages
//!
//! Everything here goes to stderr; stdout is reserved for the report.

use colored::Colorize;

/// Print a success message
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Pluralize a resource count, e.g. "1 resource", "3 resources"
pub fn resources(count: usize) -> String {
    match count {
        1 => "1 resource".to_string(),
        n => format!("{n} resources"),
    }
}

// ============================================================================
// Tests
// ============================================================================
