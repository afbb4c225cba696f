//! Concurrent resource collection
//!
//! Each configured command runs on its own worker. Workers decode their
//! command's output into a local `Vec<Resource>` and hand it back; the
//! coordinator concatenates the per-command results in configuration order.
//! No state is shared between workers, and the first error wins.

use crate::command::CommandSpec;
use crate::error::{Error, Origin, Result};
use crate::resource::Resource;
use rayon::prelude::*;
use serde::Deserialize;

/// Receives progress updates while commands run
///
/// Callbacks are invoked from worker threads.
pub trait CollectProgress: Send + Sync {
    /// Called before a command is started
    fn on_command_start(&self, origin: Origin, spec: &CommandSpec);

    /// Called after a command's output has been decoded
    fn on_command_complete(&self, origin: Origin, spec: &CommandSpec, resources: usize);
}

/// No-op progress callback
pub struct NoProgress;

impl CollectProgress for NoProgress {
    fn on_command_start(&self, _origin: Origin, _spec: &CommandSpec) {}
    fn on_command_complete(&self, _origin: Origin, _spec: &CommandSpec, _resources: usize) {}
}

/// Both logical collections, fully materialized
#[derive(Debug, Default)]
pub struct Collected {
    /// Source of truth
    pub input: Vec<Resource>,
    /// Actual state
    pub output: Vec<Resource>,
}

/// Runs command specs on a dedicated worker pool
pub struct Collector {
    pool: rayon::ThreadPool,
}

impl Collector {
    /// Create a collector with `jobs` worker threads (0 = one per CPU).
    pub fn new(jobs: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|i| format!("driftkit-collect-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    /// Run every command concurrently and merge their resources.
    pub fn collect<P: CollectProgress>(
        &self,
        origin: Origin,
        specs: &[CommandSpec],
        progress: &P,
    ) -> Result<Vec<Resource>> {
        self.pool
            .install(|| collect_specs(origin, specs, progress))
            .map_err(|e| Error::collect(origin, e))
    }

    /// Collect the "in" and "out" sources concurrently.
    ///
    /// Returns only once both sides are complete.
    pub fn collect_both<P: CollectProgress>(
        &self,
        input: &[CommandSpec],
        output: &[CommandSpec],
        progress: &P,
    ) -> Result<Collected> {
        let (input, output) = self.pool.install(|| {
            rayon::join(
                || collect_specs(Origin::In, input, progress),
                || collect_specs(Origin::Out, output, progress),
            )
        });

        let input = input.map_err(|e| Error::collect(Origin::In, e))?;
        let output = output.map_err(|e| Error::collect(Origin::Out, e))?;

        log::info!(
            "Collected {} resources (in) and {} resources (out)",
            input.len(),
            output.len()
        );

        Ok(Collected { input, output })
    }
}

fn collect_specs<P: CollectProgress>(
    origin: Origin,
    specs: &[CommandSpec],
    progress: &P,
) -> Result<Vec<Resource>> {
    let per_command = specs
        .par_iter()
        .map(|spec| -> Result<Vec<Resource>> {
            progress.on_command_start(origin, spec);
            let stdout = spec.run()?;
            let resources = decode_stream(&spec.to_string(), &stdout)?;
            log::debug!(
                "{} resources ({}) from: {}",
                resources.len(),
                origin,
                spec
            );
            progress.on_command_complete(origin, spec, resources.len());
            Ok(resources)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(per_command.into_iter().flatten().collect())
}

/// Decode a multi-document YAML stream into resources.
///
/// `List` documents are replaced by their items, and documents that decode to
/// nothing (blank, comment-only, bare separators) are dropped. Stream order is
/// preserved. `command` is only used in error messages.
pub fn decode_stream(command: &str, stdout: &[u8]) -> Result<Vec<Resource>> {
    let decode_err = |source| Error::Decode {
        command: command.to_string(),
        source,
    };

    let mut resources = Vec::new();
    for document in serde_yaml::Deserializer::from_slice(stdout) {
        let Some(resource) = Option::<Resource>::deserialize(document).map_err(decode_err)?
        else {
            continue;
        };
        if resource.is_list() {
            resources.extend(resource.items);
        } else if !resource.is_empty() {
            resources.push(resource);
        }
    }
    Ok(resources)
}
