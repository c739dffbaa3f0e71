//! Error types for regcred
//!
//! Every failure in this crate is a deterministic input problem: a missing
//! auth file or a registry argument that cannot be used as a credential key.
//! None of them are retryable, and each carries the offending input so the
//! caller can report it verbatim.

use crate::reference::ReferenceError;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for regcred operations
#[derive(Error, Debug)]
pub enum RegCredError {
    /// The configured auth file does not exist or cannot be accessed
    #[error("Auth file not found: {path}")]
    AuthFileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed argument, e.g. a scheme prefix where a repository is allowed
    #[error("Invalid argument {argument:?}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// A repository path was given where only a registry is allowed
    #[error("Repository not accepted in {argument:?}: only a registry host is allowed here")]
    RepositoryNotAccepted { argument: String },

    /// A tag or digest was given where only a repository is allowed
    #[error("Tag or digest not allowed in {argument:?}: name a repository, not an image version")]
    TagNotAllowed { argument: String },

    /// The repository part of the argument is not a valid reference
    #[error("Invalid reference {argument:?}: {source}")]
    InvalidReference {
        argument: String,
        #[source]
        source: ReferenceError,
    },

    /// Configuration errors (invalid config file, missing settings)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for regcred operations
pub type Result<T> = std::result::Result<T, RegCredError>;

impl RegCredError {
    /// Creates a new auth-file-not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregcred::error::RegCredError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    /// let err = RegCredError::auth_file_not_found("/tmp/auth.json", io_err);
    /// assert!(matches!(err, RegCredError::AuthFileNotFound { .. }));
    /// ```
    pub fn auth_file_not_found<S: Into<String>>(path: S, source: std::io::Error) -> Self {
        Self::AuthFileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Creates a new invalid argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregcred::error::RegCredError;
    ///
    /// let err = RegCredError::invalid_argument("https://quay.io", "scheme not allowed");
    /// assert!(matches!(err, RegCredError::InvalidArgument { .. }));
    /// ```
    pub fn invalid_argument<S, R>(argument: S, reason: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new repository-not-accepted error.
    pub fn repository_not_accepted<S: Into<String>>(argument: S) -> Self {
        Self::RepositoryNotAccepted {
            argument: argument.into(),
        }
    }

    /// Creates a new tag-not-allowed error.
    pub fn tag_not_allowed<S: Into<String>>(argument: S) -> Self {
        Self::TagNotAllowed {
            argument: argument.into(),
        }
    }

    /// Creates a new invalid reference error.
    pub fn invalid_reference<S: Into<String>>(argument: S, source: ReferenceError) -> Self {
        Self::InvalidReference {
            argument: argument.into(),
            source,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregcred::error::RegCredError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = RegCredError::config_with_source("failed to read config", Some("/path/to/config.yaml"), io_err);
    /// assert!(matches!(err, RegCredError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the user-supplied registry argument this error is about, if any.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { argument, .. }
            | Self::RepositoryNotAccepted { argument }
            | Self::TagNotAllowed { argument }
            | Self::InvalidReference { argument, .. } => Some(argument),
            Self::AuthFileNotFound { .. } | Self::Config { .. } => None,
        }
    }
}

impl From<config::ConfigError> for RegCredError {
    fn from(err: config::ConfigError) -> Self {
        RegCredError::config_with_source("Failed to build configuration", None, err)
    }
}
