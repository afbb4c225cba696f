//! Case-insensitive membership predicates used for filtering and identity

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Returns true if any element of `list` equals `value`, ignoring case.
pub fn contains_ignore_case<S: AsRef<str>>(list: &[S], value: &str) -> bool {
    let value = value.to_lowercase();
    list.iter().any(|s| s.as_ref().to_lowercase() == value)
}

/// A compiled set of case-insensitive exclusion patterns
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    patterns: Vec<Regex>,
}

impl Matcher {
    /// Compile every pattern, failing on the first invalid one.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| Error::InvalidPattern {
                        pattern: p.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if any pattern matches the lower-cased `value`.
    pub fn is_match(&self, value: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let value = value.to_lowercase();
        self.patterns.iter().any(|r| r.is_match(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        let kinds = ["ClusterRole", "Namespace"];
        assert!(contains_ignore_case(&kinds, "clusterrole"));
        assert!(contains_ignore_case(&kinds, "NAMESPACE"));
        assert!(!contains_ignore_case(&kinds, "Role"));
        assert!(!contains_ignore_case::<&str>(&[], "Role"));
    }

    #[test]
    fn test_contains_ignore_case_owned_strings() {
        let kinds = vec!["StorageClass".to_string()];
        assert!(contains_ignore_case(&kinds, "storageclass"));
    }

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = Matcher::new(&["configmap/a/y"]).unwrap();
        assert!(matcher.is_match("ConfigMap/a/y"));
        assert!(!matcher.is_match("ConfigMap/a/x"));

        let upper = Matcher::new(&["^Secret/"]).unwrap();
        assert!(upper.is_match("secret/default/token"));
    }

    #[test]
    fn test_matcher_any_pattern() {
        let matcher = Matcher::new(&["^event/", "/kube-system/"]).unwrap();
        assert!(matcher.is_match("Event/default/foo"));
        assert!(matcher.is_match("ConfigMap/kube-system/coredns"));
        assert!(!matcher.is_match("ConfigMap/default/app"));
    }

    #[test]
    fn test_empty_matcher_never_matches() {
        let matcher = Matcher::new::<String>(&[]).unwrap();
        assert!(!matcher.is_match(""));
        assert!(!matcher.is_match("ConfigMap/a/x"));
    }

    #[test]
    fn test_invalid_pattern_fails() {
        let err = Matcher::new(&["ok", "(unclosed"]).unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
