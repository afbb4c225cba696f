//! Uniform model of a declaratively-described resource
//!
//! Only the fields needed for identity are decoded: `kind`,
//! `metadata.name`, `metadata.namespace` and, for `List` containers, `items`.
//! Everything else in a document is ignored.

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::OnceLock;

/// Kind of the container resource whose members are collected instead of itself
pub const LIST_KIND: &str = "List";

/// Cluster-scoped kinds that are always matched by kind and name alone
pub const DEFAULT_NON_NAMESPACED_KINDS: &[&str] = &[
    "ComponentStatus",
    "Namespace",
    "Node",
    "PersistentVolume",
    "MutatingWebhookConfiguration",
    "ValidatingWebhookConfiguration",
    "CustomResourceDefinition",
    "APIService",
    "TokenReview",
    "SelfSubjectAccessReview",
    "SelfSubjectRulesReview",
    "SubjectAccessReview",
    "CertificateSigningRequest",
    "PodSecurityPolicy",
    "NodeMetrics",
    "ClusterRole",
    "ClusterRoleBinding",
    "PriorityClass",
    "StorageClass",
    "VolumeAttachment",
    "RuntimeClass",
    "IngressClass",
    "CSIDriver",
    "CSINode",
];

/// Object metadata relevant for identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
}

/// A described infrastructure object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Members of a `List` resource
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<Resource>,
    #[serde(skip)]
    id: OnceLock<String>,
}

impl Resource {
    pub fn new(kind: &str, namespace: &str, name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            metadata: Metadata {
                name: name.to_string(),
                namespace: namespace.to_string(),
            },
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    /// Whether this is a container whose `items` replace it in a collection
    pub fn is_list(&self) -> bool {
        self.kind == LIST_KIND
    }

    /// True when neither kind nor name is set.
    ///
    /// Blank documents, comment-only documents and bare `---` separators
    /// decode to empty resources.
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.metadata.name.is_empty()
    }

    /// Identity key `kind/namespace/name`, computed once per resource.
    ///
    /// Case-sensitive. Cluster-scoped resources have an empty namespace
    /// segment (`ClusterRole//admin`).
    pub fn id(&self) -> &str {
        self.id.get_or_init(|| {
            format!(
                "{}/{}/{}",
                self.kind, self.metadata.namespace, self.metadata.name
            )
        })
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.metadata == other.metadata && self.items == other.items
    }
}

impl Eq for Resource {}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
