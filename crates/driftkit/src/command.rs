//! External commands that produce resource documents

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::process::{Command, Stdio};

/// One external command whose standard output is a YAML document stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    #[serde(rename = "cmd", alias = "command")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(command: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments with `$VAR` and `${VAR}` replaced from the process environment.
    ///
    /// Unset variables expand to an empty string. The configured arguments
    /// are left untouched so the command can be run again.
    pub fn expanded_args(&self) -> Vec<String> {
        self.args.iter().map(|arg| expand_env(arg)).collect()
    }

    /// Run the command and return its captured standard output.
    ///
    /// Standard error is only kept for the failure message.
    pub fn run(&self) -> Result<Vec<u8>> {
        let args = self.expanded_args();
        log::debug!("Running: {} {}", self.command, args.join(" "));

        let output = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::CommandSpawn {
                command: self.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: self.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

fn expand_env(arg: &str) -> String {
    let expanded: Cow<'_, str> = shellexpand::env_with_context_no_errors(arg, |name| {
        Some(std::env::var(name).unwrap_or_default())
    });
    expanded.into_owned()
}
