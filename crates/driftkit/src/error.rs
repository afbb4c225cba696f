//! Error types for resource collection and reconciliation.
//!
//! Every failure is fatal for a run. Errors are categorized so the caller can
//! report what went wrong without inspecting individual variants.

use std::fmt;
use std::process::ExitStatus;
use thiserror::Error;

/// Which logical resource collection an operation was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Source of truth (e.g. rendered manifests)
    In,
    /// Actual state (e.g. objects live in a cluster)
    Out,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => f.write_str("in"),
            Self::Out => f.write_str("out"),
        }
    }
}

/// Categories of failures, mirroring how they are reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad configuration (invalid exclusion pattern, worker pool setup)
    Configuration,
    /// An external command could not be started or exited non-zero
    Execution,
    /// A command produced output that is not a valid document stream
    Decode,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Execution => "Command execution error",
            Self::Decode => "Decode error",
        }
    }
}

/// Errors that can occur while collecting or reconciling resources.
#[derive(Debug, Error)]
pub enum Error {
    /// An exclusion pattern is not a valid regular expression
    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The command could not be started at all
    #[error("failed to execute '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but reported failure
    #[error("command '{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The command's standard output is not a valid YAML document stream
    #[error("failed to decode YAML stream from '{command}': {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The worker pool could not be created
    #[error("failed to create worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Collecting one of the two logical sources failed
    #[error("failed to get resources ({origin})")]
    Collect {
        origin: Origin,
        #[source]
        error: Box<Error>,
    },
}

impl Error {
    /// Categorize this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPattern { .. } | Self::ThreadPool(_) => ErrorCategory::Configuration,
            Self::CommandSpawn { .. } | Self::CommandFailed { .. } => ErrorCategory::Execution,
            Self::Decode { .. } => ErrorCategory::Decode,
            Self::Collect { error, .. } => error.category(),
        }
    }

    pub(crate) fn collect(origin: Origin, error: Self) -> Self {
        Self::Collect {
            origin,
            error: Box::new(error),
        }
    }
}

/// Result type for driftkit operations
pub type Result<T> = std::result::Result<T, Error>;
