//! Registry argument parsing.
//!
//! Commands such as `login` and `logout` take a single positional argument
//! naming either a registry (`quay.io`, `localhost:5000`) or, where the
//! command allows it, a repository within a registry (`quay.io/user/app`).
//! This module turns that argument into the canonical key used to look up
//! credentials.
//!
//! Rules:
//!
//! - A tag or digest is never allowed: credentials belong to a repository,
//!   not to an image version.
//! - When repositories are accepted, a `scheme://` prefix is rejected, since
//!   it is unclear whether it qualifies the registry or the repository.
//! - When only registries are accepted, a `scheme://` prefix is stripped and
//!   any URL path after the host is dropped, so `https://quay.io/user` names
//!   `quay.io`. Without a scheme, a path is a repository and is rejected.

use crate::error::{RegCredError, Result};
use crate::reference::{DockerNormalizer, ImageReference, ReferenceError, ReferenceNormalizer};
use serde::Serialize;


/// The credential lookup key derived from a registry argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRegistryKey {
    /// Canonical lookup key: the registry host, or the full repository name
    pub key: String,

    /// Registry host exactly as given in the argument, scheme removed
    pub registry: String,

    /// Canonical repository, present only when the argument named one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ImageReference>,
}

impl ParsedRegistryKey {
    fn registry_only(host: &str) -> Self {
        Self {
            key: host.to_string(),
            registry: host.to_string(),
            reference: None,
        }
    }

    fn repository(host: &str, reference: ImageReference) -> Self {
        Self {
            key: reference.to_string(),
            registry: host.to_string(),
            reference: Some(reference),
        }
    }

    /// Returns true if the key names a repository rather than a whole registry.
    pub fn is_repository(&self) -> bool {
        self.reference.is_some()
    }
}

/// Parses a registry argument with the default Docker name normalizer.
///
/// # Examples
///
/// ```
/// use libregcred::argument::parse_registry_argument;
///
/// let parsed = parse_registry_argument("quay.io/user", true).unwrap();
/// assert_eq!(parsed.key, "quay.io/user");
/// assert_eq!(parsed.registry, "quay.io");
///
/// let parsed = parse_registry_argument("https://quay.io/user", false).unwrap();
/// assert_eq!(parsed.key, "quay.io");
/// assert!(parsed.reference.is_none());
///
/// assert!(parse_registry_argument("quay.io/user/app:latest", true).is_err());
/// ```
pub fn parse_registry_argument(arg: &str, accept_repositories: bool) -> Result<ParsedRegistryKey> {
    parse_registry_argument_with(&DockerNormalizer, arg, accept_repositories)
}

/// Parses a registry argument, delegating repository names to `normalizer`.
///
/// # Errors
///
/// - [`RegCredError::InvalidArgument`] for a scheme prefix where repositories
///   are accepted, or a missing registry host
/// - [`RegCredError::RepositoryNotAccepted`] for a repository path where only
///   a registry is allowed
/// - [`RegCredError::TagNotAllowed`] when the argument names a tag or digest
/// - [`RegCredError::InvalidReference`] when the repository is malformed
pub fn parse_registry_argument_with<N>(
    normalizer: &N,
    arg: &str,
    accept_repositories: bool,
) -> Result<ParsedRegistryKey>
where
    N: ReferenceNormalizer + ?Sized,
{
    let (scheme, rest) = match arg.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, arg),
    };

    if let Some(scheme) = scheme {
        if accept_repositories {
            return Err(RegCredError::invalid_argument(
                arg,
                format!(
                    "remove the \"{}://\" prefix; a scheme is not allowed where a repository may be given",
                    scheme
                ),
            ));
        }
        tracing::trace!(arg, scheme, "stripped scheme from registry argument");
    }

    let (host, remainder) = match rest.split_once('/') {
        Some((host, remainder)) => (host, Some(remainder)),
        None => (rest, None),
    };
    if host.is_empty() {
        return Err(RegCredError::invalid_argument(arg, "missing registry host"));
    }

    match remainder {
        None => Ok(ParsedRegistryKey::registry_only(host)),
        Some(path) if !accept_repositories => {
            if scheme.is_none() {
                return Err(RegCredError::repository_not_accepted(arg));
            }
            tracing::debug!(arg, path, "dropping URL path from registry argument");
            Ok(ParsedRegistryKey::registry_only(host))
        }
        Some(_) => match normalizer.normalize(rest) {
            Ok(reference) => {
                tracing::debug!(arg, key = %reference, "normalized repository argument");
                Ok(ParsedRegistryKey::repository(host, reference))
            }
            Err(ReferenceError::TagOrDigest) => Err(RegCredError::tag_not_allowed(arg)),
            Err(e) => Err(RegCredError::invalid_reference(arg, e)),
        },
    }
}
