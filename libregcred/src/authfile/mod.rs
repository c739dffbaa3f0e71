//! Auth file location and validation.
//!
//! Container tooling keeps registry credentials in a JSON auth file whose
//! location depends on the environment. The path is resolved with a fixed
//! precedence:
//!
//! 1. `REGISTRY_AUTH_FILE`, verbatim (even when set to an empty string)
//! 2. `$DOCKER_CONFIG/config.json`
//! 3. nothing (empty string)
//!
//! An empty path means "no auth file configured", which is not an error.
//! The file's contents are never read here.

use crate::error::{RegCredError, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;


/// Environment variable holding an explicit auth file path.
pub const REGISTRY_AUTH_FILE_ENV: &str = "REGISTRY_AUTH_FILE";

/// Environment variable holding a Docker configuration directory.
pub const DOCKER_CONFIG_ENV: &str = "DOCKER_CONFIG";

/// File name of the auth file inside a Docker configuration directory.
pub const DOCKER_CONFIG_FILE: &str = "config.json";

/// Snapshot of the environment variables that decide the auth file path.
///
/// `Some("")` means the variable is set to an empty string, `None` means it
/// is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthEnv {
    pub registry_auth_file: Option<String>,
    pub docker_config: Option<String>,
}

impl AuthEnv {
    /// Captures the relevant variables from the process environment.
    ///
    /// A value that is not valid UTF-8 still counts as set; it is converted
    /// lossily and a warning is logged.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env_value_lossy(name, std::env::var_os(name)))
    }

    /// Builds a snapshot from an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregcred::authfile::AuthEnv;
    ///
    /// let env = AuthEnv::from_lookup(|name| match name {
    ///     "DOCKER_CONFIG" => Some("/tmp".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(env.docker_config.as_deref(), Some("/tmp"));
    /// assert!(env.registry_auth_file.is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            registry_auth_file: lookup(REGISTRY_AUTH_FILE_ENV),
            docker_config: lookup(DOCKER_CONFIG_ENV),
        }
    }

    /// Returns which setting decides the auth file path.
    pub fn auth_file_source(&self) -> AuthFileSource {
        if self.registry_auth_file.is_some() {
            AuthFileSource::RegistryAuthFile
        } else if self.docker_config.is_some() {
            AuthFileSource::DockerConfig
        } else {
            AuthFileSource::Unset
        }
    }
}

fn env_value_lossy(name: &str, value: Option<OsString>) -> Option<String> {
    let value = value?;
    match value.into_string() {
        Ok(value) => Some(value),
        Err(raw) => {
            let lossy = raw.to_string_lossy().into_owned();
            tracing::warn!(
                variable = name,
                value = %lossy,
                "environment variable is not valid UTF-8, using lossy conversion"
            );
            Some(lossy)
        }
    }
}

/// Setting that decided the default auth file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFileSource {
    /// `REGISTRY_AUTH_FILE` is set
    RegistryAuthFile,
    /// `DOCKER_CONFIG` is set
    DockerConfig,
    /// Neither variable is set
    Unset,
}

impl fmt::Display for AuthFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistryAuthFile => f.write_str(REGISTRY_AUTH_FILE_ENV),
            Self::DockerConfig => f.write_str(DOCKER_CONFIG_ENV),
            Self::Unset => f.write_str("unset"),
        }
    }
}

/// Resolves the default auth file path from an environment snapshot.
///
/// Never touches the filesystem and never fails.
///
/// # Examples
///
/// ```
/// use libregcred::authfile::{AuthEnv, resolve_default_auth_file};
///
/// let env = AuthEnv {
///     registry_auth_file: None,
///     docker_config: Some("/tmp".to_string()),
/// };
/// assert_eq!(resolve_default_auth_file(&env), "/tmp/config.json");
/// assert_eq!(resolve_default_auth_file(&AuthEnv::default()), "");
/// ```
pub fn resolve_default_auth_file(env: &AuthEnv) -> String {
    let source = env.auth_file_source();
    let path = match (source, &env.registry_auth_file, &env.docker_config) {
        (AuthFileSource::RegistryAuthFile, Some(path), _) => path.clone(),
        (AuthFileSource::DockerConfig, _, Some(dir)) => Path::new(dir)
            .join(DOCKER_CONFIG_FILE)
            .to_string_lossy()
            .into_owned(),
        _ => String::new(),
    };

    tracing::debug!(%source, path = %path, "resolved default auth file");
    path
}

/// Resolves the default auth file path from the process environment.
pub fn default_auth_file() -> String {
    resolve_default_auth_file(&AuthEnv::from_process())
}

/// Checks that a configured auth file can be used.
///
/// An empty path always passes. Any other path must exist and be accessible;
/// exactly one `metadata` call is made.
///
/// # Errors
///
/// Returns [`RegCredError::AuthFileNotFound`] carrying `path` when the file
/// does not exist or cannot be accessed.
pub fn validate_auth_file(path: &str) -> Result<()> {
    if path.is_empty() {
        return Ok(());
    }

    match std::fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::debug!(path, error = %e, "auth file is not accessible");
            Err(RegCredError::auth_file_not_found(path, e))
        }
    }
}
