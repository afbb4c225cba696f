//! Progress indicator shown while commands run

use driftkit::{CollectProgress, CommandSpec, Origin};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Spinner counting finished commands across both sources
pub struct CollectSpinner {
    pb: ProgressBar,
    total: usize,
    done: AtomicUsize,
}

impl CollectSpinner {
    /// Create a spinner for `total` commands; hidden when `quiet`
    pub fn new(total: usize, quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(format!("Running commands (0/{total})"));
        Self {
            pb,
            total,
            done: AtomicUsize::new(0),
        }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl CollectProgress for CollectSpinner {
    fn on_command_start(&self, _origin: Origin, spec: &CommandSpec) {
        let done = self.done.load(Ordering::Relaxed);
        self.pb.set_message(format!(
            "Running commands ({done}/{}) {}",
            self.total, spec.command
        ));
    }

    fn on_command_complete(&self, _origin: Origin, spec: &CommandSpec, _resources: usize) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.pb.set_message(format!(
            "Running commands ({done}/{}) {}",
            self.total, spec.command
        ));
    }
}

impl Drop for CollectSpinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
