//! # Driftkit
//!
//! Find resources that exist at runtime but were never declared.
//!
//! Two collections of declaratively-described resources are gathered by
//! running external commands that print multi-document YAML: a source of
//! truth ("in", e.g. rendered manifests) and an actual state ("out", e.g.
//! `kubectl get -o yaml`). Every "out" resource with no identity match in "in"
//! is reported as untracked.
//!
//! ## Core Concepts
//!
//! - **Resource**: `kind` + `metadata.{name,namespace}`; `List` documents are
//!   expanded into their items
//! - **CommandSpec**: an external command whose stdout is a YAML stream
//! - **Collector**: runs command specs concurrently and merges their output
//! - **Reconciliation**: asymmetric difference under the identity rule, with
//!   exclusion patterns and non-namespaced kinds
//!
//! ## Example
//!
//! ```ignore
//! use driftkit::{CommandSpec, Collector, Matcher, NoProgress, untracked};
//!
//! let input = vec![CommandSpec::new("kustomize", ["build", "overlays/prod"])];
//! let output = vec![CommandSpec::new("kubectl", ["get", "cm", "-A", "-o", "yaml"])];
//!
//! let exclude = Matcher::new(&["^configmap/kube-system/"])?;
//! let collected = Collector::new(0)?.collect_both(&input, &output, &NoProgress)?;
//! for resource in untracked(&collected.input, &collected.output, &exclude, &["Namespace"]) {
//!     println!("{}", resource.id());
//! }
//! ```

pub mod collector;
pub mod command;
pub mod error;
pub mod matching;
pub mod reconcile;
pub mod resource;

// Re-export main types at crate root
pub use collector::{CollectProgress, Collected, Collector, NoProgress, decode_stream};
pub use command::CommandSpec;
pub use error::{Error, ErrorCategory, Origin, Result};
pub use matching::{Matcher, contains_ignore_case};
pub use reconcile::{reconcile, untracked};
pub use resource::{DEFAULT_NON_NAMESPACED_KINDS, LIST_KIND, Metadata, Resource};
