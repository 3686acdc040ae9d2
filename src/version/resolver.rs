//! Version resolution against a catalog
//!
//! Picks the maximum catalog version matching a (possibly wildcarded)
//! specifier. The catalog is given as plain strings and parsed leniently;
//! the specifier is parsed strictly.

use tracing::{debug, warn};

use crate::version::error::{FormatError, ResolveError};
use crate::version::matcher::matches;
use crate::version::tokenized::{ParseMode, TokenizedVersion};

/// Resolve a version from a collection of versions
///
/// `candidate_version` is used when present and non-empty, otherwise
/// `default_version`. The specifier must have up to three numeric components
/// followed by an optional qualifier, and the last supplied component may be `+`.
///
/// # Returns
/// The canonical form of the maximum matching version
///
/// # Errors
/// - [`ResolveError::Format`] if the specifier or a catalog entry is malformed
/// - [`ResolveError::NoMatch`] if no catalog entry matches
pub fn resolve<S: AsRef<str>>(
    candidate_version: Option<&str>,
    default_version: &str,
    versions: &[S],
) -> Result<String, ResolveError> {
    let text = effective_specifier(candidate_version, default_version);
    let specifier = TokenizedVersion::parse(text, ParseMode::Strict)?;
    resolve_specifier(text, &specifier, versions)
}

/// All catalog versions matching the effective specifier, highest first
///
/// Duplicates are removed. Unlike [`resolve`], an empty result is not an error.
pub fn matching_versions<S: AsRef<str>>(
    candidate_version: Option<&str>,
    default_version: &str,
    versions: &[S],
) -> Result<Vec<TokenizedVersion>, ResolveError> {
    let text = effective_specifier(candidate_version, default_version);
    let specifier = TokenizedVersion::parse(text, ParseMode::Strict)?;
    collect_matches(&specifier, versions)
}

fn effective_specifier<'a>(
    candidate_version: Option<&'a str>,
    default_version: &'a str,
) -> &'a str {
    candidate_version
        .filter(|candidate| !candidate.is_empty())
        .unwrap_or(default_version)
}

fn tokenize_catalog<S: AsRef<str>>(
    versions: &[S],
) -> Result<Vec<TokenizedVersion>, FormatError> {
    versions
        .iter()
        .map(|v| TokenizedVersion::parse(v.as_ref(), ParseMode::Lenient))
        .collect()
}

fn resolve_specifier<S: AsRef<str>>(
    text: &str,
    specifier: &TokenizedVersion,
    versions: &[S],
) -> Result<String, ResolveError> {
    let catalog = tokenize_catalog(versions)?;

    let Some(best) = catalog.iter().filter(|v| matches(specifier, v)).max() else {
        warn!(
            "No version resolvable for '{}' among {} candidates",
            text,
            versions.len()
        );
        return Err(ResolveError::NoMatch {
            specifier: text.to_string(),
            candidates: versions.iter().map(|v| v.as_ref().to_string()).collect(),
        });
    };

    debug!("Resolved '{}' to '{}'", text, best);
    Ok(best.to_string())
}

fn collect_matches<S: AsRef<str>>(
    specifier: &TokenizedVersion,
    versions: &[S],
) -> Result<Vec<TokenizedVersion>, ResolveError> {
    let mut matched: Vec<TokenizedVersion> = tokenize_catalog(versions)?
        .into_iter()
        .filter(|v| matches(specifier, v))
        .collect();
    matched.sort_by(|a, b| b.cmp(a));
    matched.dedup();

    debug!(
        "{} of {} candidates match '{}'",
        matched.len(),
        versions.len(),
        specifier
    );
    Ok(matched)
}

/// Resolver bound to a pre-validated default specifier
///
/// Useful when the default comes from configuration: it is parsed once at
/// construction, so a bad default is reported before any resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolver {
    default_text: String,
    default_version: TokenizedVersion,
}

impl VersionResolver {
    pub fn new(default_version: &str) -> Result<Self, FormatError> {
        let parsed = TokenizedVersion::parse(default_version, ParseMode::Strict)?;
        Ok(Self {
            default_text: default_version.to_string(),
            default_version: parsed,
        })
    }

    pub fn default_version(&self) -> &TokenizedVersion {
        &self.default_version
    }

    /// Same as [`resolve`] with this resolver's default
    pub fn resolve<S: AsRef<str>>(
        &self,
        candidate_version: Option<&str>,
        versions: &[S],
    ) -> Result<String, ResolveError> {
        match candidate_version.filter(|c| !c.is_empty()) {
            Some(candidate) => resolve(Some(candidate), &self.default_text, versions),
            None => resolve_specifier(&self.default_text, &self.default_version, versions),
        }
    }

    /// Same as [`matching_versions`] with this resolver's default
    pub fn matching_versions<S: AsRef<str>>(
        &self,
        candidate_version: Option<&str>,
        versions: &[S],
    ) -> Result<Vec<TokenizedVersion>, ResolveError> {
        match candidate_version.filter(|c| !c.is_empty()) {
            Some(candidate) => matching_versions(Some(candidate), &self.default_text, versions),
            None => collect_matches(&self.default_version, versions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("8.+"), "+", vec!["8.0.1", "8.1.2", "7.9.9"], "8.1.2")]
    #[case(Some("8"), "+", vec!["8.0.1", "8.1.2"], "8.1.2")]
    #[case(None, "8.0.+", vec!["8.0.1", "8.0.5", "8.1.0"], "8.0.5")]
    #[case(Some(""), "8.0.+", vec!["8.0.1", "8.0.5", "8.1.0"], "8.0.5")]
    #[case(Some("1.0.0"), "+", vec!["1.0.0", "1.0.0.GA"], "1.0.0.GA")]
    // qualifiers compare lexically, so "9" ranks above "45"
    #[case(Some("1.7.0_+"), "+", vec!["1.7.0_40", "1.7.0_45", "1.7.0_9", "1.8.0_5"], "1.7.0_9")]
    #[case(Some("+"), "8.+", vec!["1.6.0_45", "1.7.0_51", "1.8.0_5"], "1.8.0_5")]
    #[case(Some("8.0.1"), "+", vec!["8.0.1", "8.0.10"], "8.0.1")]
    #[case(Some("1"), "+", vec!["1", "1.0", "1.0.0"], "1.0.0")]
    fn resolve_returns_expected(
        #[case] candidate: Option<&str>,
        #[case] default: &str,
        #[case] versions: Vec<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(resolve(candidate, default, &versions).unwrap(), expected);
    }

    #[test]
    fn resolve_fails_with_no_match_listing_candidates() {
        let versions = vec!["8.0.1", "8.1.2"];

        let err = resolve(Some("9.+"), "+", &versions).unwrap_err();

        assert_eq!(
            err,
            ResolveError::NoMatch {
                specifier: "9.+".to_string(),
                candidates: vec!["8.0.1".to_string(), "8.1.2".to_string()],
            }
        );
        assert_eq!(
            err.to_string(),
            "No version resolvable for '9.+' in 8.0.1, 8.1.2"
        );
    }

    #[test]
    fn resolve_fails_with_no_match_for_empty_catalog() {
        let versions: Vec<String> = vec![];

        assert!(matches!(
            resolve(Some("+"), "+", &versions),
            Err(ResolveError::NoMatch { .. })
        ));
    }

    #[test]
    fn resolve_reports_default_as_specifier_when_candidate_missing() {
        let err = resolve(None, "9.+", &["8.0.1"]).unwrap_err();

        assert!(matches!(
            err,
            ResolveError::NoMatch { ref specifier, .. } if specifier == "9.+"
        ));
    }

    #[test]
    fn resolve_rejects_malformed_specifier_before_matching() {
        // the catalog entry is malformed too, but the specifier is checked first
        let err = resolve(Some("8.0.0.0.0"), "+", &["not a version"]).unwrap_err();

        assert_eq!(
            err,
            ResolveError::Format(FormatError::Malformed {
                version: "8.0.0.0.0".to_string()
            })
        );
    }

    #[test]
    fn resolve_ignores_default_when_candidate_given() {
        assert_eq!(
            resolve(Some("8.+"), "not-parsed", &["8.0.1"]).unwrap(),
            "8.0.1"
        );
    }

    #[test]
    fn resolve_rejects_wildcard_catalog_entries() {
        let err = resolve(Some("8.+"), "+", &["8.0.1", "8.+"]).unwrap_err();

        assert_eq!(
            err,
            ResolveError::Format(FormatError::WildcardNotAllowed {
                version: "8.+".to_string()
            })
        );
    }

    #[test]
    fn matching_versions_sorts_descending_without_duplicates() {
        let versions = vec!["8.0.1", "8.1.2", "7.9.9", "8.0.1", "8.1.2.GA"];

        let matched: Vec<String> = matching_versions(Some("8.+"), "+", &versions)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(matched, vec!["8.1.2.GA", "8.1.2", "8.0.1"]);
    }

    #[test]
    fn matching_versions_returns_empty_when_nothing_matches() {
        assert!(
            matching_versions(Some("9.+"), "+", &["8.0.1"])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn version_resolver_rejects_malformed_default() {
        assert_eq!(
            VersionResolver::new("8.+.1"),
            Err(FormatError::CharactersAfterWildcard {
                version: "8.+.1".to_string()
            })
        );
    }

    #[rstest]
    #[case(None, "8.0.5")]
    #[case(Some(""), "8.0.5")]
    #[case(Some("8.+"), "8.1.0")]
    fn version_resolver_uses_bound_default(
        #[case] candidate: Option<&str>,
        #[case] expected: &str,
    ) {
        let resolver = VersionResolver::new("8.0.+").unwrap();
        let versions = vec!["8.0.1", "8.0.5", "8.1.0"];

        assert_eq!(resolver.resolve(candidate, &versions).unwrap(), expected);
    }

    #[test]
    fn version_resolver_matching_versions_uses_bound_default() {
        let resolver = VersionResolver::new("8.0.+").unwrap();
        let versions = vec!["8.0.1", "8.0.5", "8.1.0"];

        let matched = resolver.matching_versions(None, &versions).unwrap();

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].to_string(), "8.0.5");
    }
}
