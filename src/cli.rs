use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "untrak")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(
    about = "Find resources that are running but were never declared in source control",
    long_about = None
)]
pub struct Cli {
    /// Path to the untrak config file
    #[arg(short, long, env = "UNTRAK_CONFIG", default_value = "./untrak.yaml")]
    pub config: PathBuf,

    /// Output format: text or yaml (unknown values fall back to text)
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Exit with status 1 when untracked resources are found
    #[arg(long)]
    pub fail: bool,

    /// Number of commands to run in parallel (0 = one per CPU)
    #[arg(short, long, default_value = "0")]
    pub jobs: usize,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["untrak"]).unwrap();
        assert_eq!(cli.output, "text");
        assert!(!cli.fail);
        assert_eq!(cli.jobs, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "untrak", "-c", "/tmp/u.yaml", "-o", "yaml", "--fail", "-j", "2", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/u.yaml"));
        assert_eq!(cli.output, "yaml");
        assert!(cli.fail);
        assert_eq!(cli.jobs, 2);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_completions_subcommand() {
        let cli = Cli::try_parse_from(["untrak", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Completions { shell: Shell::Bash })
        ));
    }
}
