//! Repository name normalization.
//!
//! Credential keys are canonical, tag-free repository names such as
//! `docker.io/library/alpine` or `quay.io/user/app`. This module defines the
//! [`ReferenceNormalizer`] seam the argument parser depends on, together with
//! [`DockerNormalizer`], a wrapper around `oci_spec::distribution::Reference`
//! that validates the Docker name grammar and applies its canonicalization:
//! names without a domain live on Docker Hub (`docker.io`), and single
//! component Docker Hub names live under `library/`.

use oci_spec::distribution::Reference as OciReference;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;


/// Registry used for names that do not carry a domain.
pub const DEFAULT_DOMAIN: &str = "docker.io";

/// Namespace for single-component names on Docker Hub.
pub const OFFICIAL_REPO_PREFIX: &str = "library/";

/// Maximum length of a full repository name, domain included.
pub const NAME_TOTAL_LENGTH_MAX: usize = 255;

/// Errors produced while normalizing a repository name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// The input was empty
    #[error("repository name must not be empty")]
    Empty,

    /// The input does not match the repository name grammar
    #[error("invalid reference format: {reason}")]
    Malformed { reason: String },

    /// The full name exceeds [`NAME_TOTAL_LENGTH_MAX`]
    #[error("repository name must not be more than 255 characters (got {length})")]
    NameTooLong { length: usize },

    /// The input names a tag or digest
    #[error("tag or digest are not allowed in a repository name")]
    TagOrDigest,
}

impl ReferenceError {
    fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Turns a raw repository string into a canonical, tag-free [`ImageReference`].
///
/// Implementations must reject any input that carries a tag or digest with
/// [`ReferenceError::TagOrDigest`], and report grammar violations with one of
/// the other variants.
pub trait ReferenceNormalizer {
    /// Normalizes `raw` into its canonical form.
    fn normalize(&self, raw: &str) -> Result<ImageReference, ReferenceError>;
}

/// Normalizer backed by `oci_spec::distribution::Reference`.
///
/// # Examples
///
/// ```
/// use libregcred::reference::{DockerNormalizer, ReferenceNormalizer};
///
/// let reference = DockerNormalizer.normalize("alpine").unwrap();
/// assert_eq!(reference.to_string(), "docker.io/library/alpine");
///
/// let reference = DockerNormalizer.normalize("quay.io/user/app").unwrap();
/// assert_eq!(reference.domain(), "quay.io");
/// assert_eq!(reference.path(), "user/app");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DockerNormalizer;

impl ReferenceNormalizer for DockerNormalizer {
    fn normalize(&self, raw: &str) -> Result<ImageReference, ReferenceError> {
        if raw.is_empty() {
            return Err(ReferenceError::Empty);
        }
        if raw.len() == 64 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ReferenceError::malformed(
                "cannot specify 64-byte hexadecimal strings",
            ));
        }

        // The parser fills in a default tag, so an explicit one is only
        // visible in the raw input.
        let (name, suffix) = split_suffix(raw);

        let parsed = OciReference::from_str(name)
            .map_err(|e| ReferenceError::malformed(e.to_string()))?;
        let reference = ImageReference {
            domain: parsed.registry().to_string(),
            path: parsed.repository().to_string(),
        };

        let length = reference.domain.len() + 1 + reference.path.len();
        if length > NAME_TOTAL_LENGTH_MAX {
            return Err(ReferenceError::NameTooLong { length });
        }

        match suffix {
            None => Ok(reference),
            Some(suffix) if suffix.len() > 1 => Err(ReferenceError::TagOrDigest),
            Some(suffix) => Err(ReferenceError::malformed(format!(
                "empty tag or digest after {:?}",
                suffix
            ))),
        }
    }
}

/// Splits off a `:tag` and/or `@digest` suffix, separator included.
///
/// A tag may only follow the last path component, so a `:` before the last
/// `/` belongs to the domain's port.
fn split_suffix(raw: &str) -> (&str, Option<&str>) {
    let mut end = raw.find('@').unwrap_or(raw.len());
    let last_slash = raw[..end].rfind('/').map_or(0, |i| i + 1);
    if let Some(colon) = raw[last_slash..end].find(':') {
        end = last_slash + colon;
    }

    if end == raw.len() {
        (raw, None)
    } else {
        (&raw[..end], Some(&raw[end..]))
    }
}

/// A canonical, tag-free repository name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
    domain: String,
    path: String,
}

impl ImageReference {
    /// Returns the registry domain, e.g. `quay.io` or `localhost:5000`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the repository path within the registry, e.g. `library/alpine`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the shortest name Docker tooling would display.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregcred::reference::ImageReference;
    ///
    /// let reference: ImageReference = "docker.io/library/alpine".parse().unwrap();
    /// assert_eq!(reference.familiar_name(), "alpine");
    ///
    /// let reference: ImageReference = "quay.io/user/app".parse().unwrap();
    /// assert_eq!(reference.familiar_name(), "quay.io/user/app");
    /// ```
    pub fn familiar_name(&self) -> String {
        if self.domain != DEFAULT_DOMAIN {
            return self.to_string();
        }
        match self.path.strip_prefix(OFFICIAL_REPO_PREFIX) {
            Some(short) if !short.contains('/') => short.to_string(),
            _ => self.path.clone(),
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.path)
    }
}

impl FromStr for ImageReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DockerNormalizer.normalize(s)
    }
}

impl Serialize for ImageReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
