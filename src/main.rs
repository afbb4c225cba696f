mod cli;
mod config;
mod output;
mod progress;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use config::Config;
use driftkit::{Collector, Matcher};
use output::OutputFormat;
use progress::CollectSpinner;
use std::io::{self, Write};
use std::process::ExitCode;

/// Options for a single check
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub format: OutputFormat,
    /// Fail when untracked resources are found
    pub fail: bool,
    /// Worker threads for running commands (0 = one per CPU)
    pub jobs: usize,
    pub quiet: bool,
}

/// How a completed check maps to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// Untracked resources were found and `--fail` was requested
    Drift,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pass => Self::SUCCESS,
            Outcome::Drift => Self::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if let Some(Command::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "untrak", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let opts = CheckOptions {
        format: OutputFormat::parse(&cli.output),
        fail: cli.fail,
        jobs: cli.jobs,
        quiet: cli.quiet,
    };
    let config = Config::load(&cli.config)?;

    let outcome = check(&config, &opts, &mut io::stdout().lock())?;
    Ok(outcome.into())
}

/// Collect both sources, report untracked resources to `out` and decide the
/// exit status.
///
/// Exclusion patterns are compiled before any command runs.
fn check<W: Write>(config: &Config, opts: &CheckOptions, out: &mut W) -> Result<Outcome> {
    let exclude = Matcher::new(&config.exclude)?;
    let non_namespaced = config.non_namespaced_kinds();

    let collector = Collector::new(opts.jobs)?;
    let spinner = CollectSpinner::new(config.input.len() + config.output.len(), opts.quiet);
    let collected = collector.collect_both(&config.input, &config.output, &spinner)?;
    spinner.finish();

    let untracked = driftkit::untracked(
        &collected.input,
        &collected.output,
        &exclude,
        &non_namespaced,
    );

    output::render(out, opts.format, &untracked)?;

    if !opts.quiet {
        let summary = format!(
            "Compared {} (out) against {} (in)",
            ui::resources(collected.output.len()),
            ui::resources(collected.input.len())
        );
        if untracked.is_empty() {
            ui::success(&summary);
        } else {
            ui::warn(&format!(
                "{summary}: {} untracked",
                ui::resources(untracked.len())
            ));
        }
    }

    if opts.fail && !untracked.is_empty() {
        return Ok(Outcome::Drift);
    }
    Ok(Outcome::Pass)
}

// ============================================================================
// Tests
// ============================================================================
