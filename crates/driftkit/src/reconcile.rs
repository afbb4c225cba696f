//! Untracked resource detection
//!
//! A resource from the actual-state collection ("out") is untracked when no
//! resource in the source-of-truth collection ("in") has the same identity
//! and no exclusion pattern matches its ID.

use crate::error::Result;
use crate::matching::{Matcher, contains_ignore_case};
use crate::resource::Resource;

/// Compile `exclude` and return the untracked subset of `output`.
///
/// Fails before scanning when an exclusion pattern is invalid.
pub fn reconcile<'a, E, K>(
    input: &[Resource],
    output: &'a [Resource],
    exclude: &[E],
    non_namespaced: &[K],
) -> Result<Vec<&'a Resource>>
where
    E: AsRef<str>,
    K: AsRef<str>,
{
    let matcher = Matcher::new(exclude)?;
    Ok(untracked(input, output, &matcher, non_namespaced))
}

/// Return the resources of `output` with no counterpart in `input`, in
/// `output` order, skipping any whose ID matches `exclude`.
pub fn untracked<'a, K: AsRef<str>>(
    input: &[Resource],
    output: &'a [Resource],
    exclude: &Matcher,
    non_namespaced: &[K],
) -> Vec<&'a Resource> {
    let result: Vec<&Resource> = output
        .iter()
        .filter(|resource| {
            if exclude.is_match(resource.id()) {
                log::debug!("Excluded: {}", resource.id());
                return false;
            }
            !input
                .iter()
                .any(|candidate| is_same(resource, candidate, non_namespaced))
        })
        .collect();

    log::info!(
        "{} untracked of {} resources (out)",
        result.len(),
        output.len()
    );
    result
}

/// Identity rule between an actual-state resource and a source-of-truth one.
///
/// Kinds are compared first; only when they are equal does the
/// non-namespaced override apply, matching on name alone.
fn is_same<K: AsRef<str>>(
    resource: &Resource,
    candidate: &Resource,
    non_namespaced: &[K],
) -> bool {
    if resource.kind != candidate.kind {
        return false;
    }
    if contains_ignore_case(non_namespaced, &resource.kind) && resource.name() == candidate.name() {
        return true;
    }
    resource.id() == candidate.id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const NONE: &[&str] = &[];

    fn ids<'a>(resources: &[&'a Resource]) -> Vec<&'a str> {
        resources.iter().copied().map(Resource::id).collect()
    }

    #[test]
    fn test_reports_missing_resource() {
        let input = vec![Resource::new("ConfigMap", "a", "x")];
        let output = vec![
            Resource::new("ConfigMap", "a", "x"),
            Resource::new("ConfigMap", "a", "y"),
        ];
        let result = reconcile(&input, &output, NONE, NONE).unwrap();
        assert_eq!(ids(&result), vec!["ConfigMap/a/y"]);
    }

    #[test]
    fn test_exclusion_hides_untracked() {
        let input = vec![Resource::new("ConfigMap", "a", "x")];
        let output = vec![
            Resource::new("ConfigMap", "a", "x"),
            Resource::new("ConfigMap", "a", "y"),
        ];
        let result = reconcile(&input, &output, &["configmap/a/y"], NONE).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_exclusion_applies_without_counterpart() {
        let output = vec![
            Resource::new("Event", "default", "e1"),
            Resource::new("Secret", "default", "s1"),
        ];
        let result = reconcile(&[], &output, &["^event/"], NONE).unwrap();
        assert_eq!(ids(&result), vec!["Secret/default/s1"]);
    }

    #[test]
    fn test_non_namespaced_ignores_namespace() {
        let input = vec![Resource::new("ClusterRole", "", "z")];
        let output = vec![Resource::new("ClusterRole", "other", "z")];
        let result = reconcile(&input, &output, NONE, &["ClusterRole"]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_namespaced_is_case_insensitive() {
        let input = vec![Resource::new("ClusterRole", "", "z")];
        let output = vec![Resource::new("ClusterRole", "other", "z")];
        let result = reconcile(&input, &output, NONE, &["clusterrole"]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_namespaced_still_requires_kind_and_name() {
        let input = vec![
            Resource::new("ClusterRole", "", "z"),
            Resource::new("Role", "", "w"),
        ];
        let output = vec![
            Resource::new("ClusterRole", "other", "w"),
            Resource::new("ClusterRoleBinding", "", "z"),
        ];
        let result = reconcile(&input, &output, NONE, &["ClusterRole"]).unwrap();
        assert_eq!(
            ids(&result),
            vec!["ClusterRole/other/w", "ClusterRoleBinding//z"]
        );
    }

    #[test]
    fn test_namespace_matters_for_namespaced_kinds() {
        let input = vec![Resource::new("ConfigMap", "a", "x")];
        let output = vec![Resource::new("ConfigMap", "b", "x")];
        let result = reconcile(&input, &output, NONE, &["ClusterRole"]).unwrap();
        assert_eq!(ids(&result), vec!["ConfigMap/b/x"]);
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        let input = vec![Resource::new("configmap", "a", "x")];
        let output = vec![Resource::new("ConfigMap", "a", "x")];
        let result = reconcile(&input, &output, NONE, NONE).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_preserves_output_order() {
        let output: Vec<Resource> = ["d", "a", "c", "b"]
            .iter()
            .map(|n| Resource::new("Secret", "ns", n))
            .collect();
        let input = vec![Resource::new("Secret", "ns", "c")];
        let result = reconcile(&input, &output, NONE, NONE).unwrap();
        assert_eq!(
            ids(&result),
            vec!["Secret/ns/d", "Secret/ns/a", "Secret/ns/b"]
        );
    }

    #[test]
    fn test_is_idempotent() {
        let input = vec![Resource::new("ConfigMap", "a", "x")];
        let output = vec![
            Resource::new("ConfigMap", "a", "y"),
            Resource::new("ConfigMap", "a", "x"),
            Resource::new("Namespace", "", "a"),
        ];
        let matcher = Matcher::new(&["^namespace/"]).unwrap();
        let first = untracked(&input, &output, &matcher, NONE);
        let second = untracked(&input, &output, &matcher, NONE);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["ConfigMap/a/y"]);
    }

    #[test]
    fn test_empty_collections() {
        assert!(reconcile(&[], &[], NONE, NONE).unwrap().is_empty());

        let input = vec![Resource::new("ConfigMap", "a", "x")];
        assert!(reconcile(&input, &[], NONE, NONE).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern_fails_before_scanning() {
        let output = vec![Resource::new("ConfigMap", "a", "x")];
        let err = reconcile(&[], &output, &["[z-a]"], NONE).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
