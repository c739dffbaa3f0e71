//! regcred - Registry credential argument resolution
//!
//! Container tooling needs two small but easy-to-get-wrong decisions before
//! it can touch stored registry credentials: which auth file to use, and
//! which credential key a user's `login`/`logout` argument refers to. This
//! crate makes both decisions, and nothing else: it never reads the auth
//! file's contents and never talks to a registry.
//!
//! # Quick Start
//!
//! ```
//! use libregcred::{AuthEnv, parse_registry_argument, resolve_default_auth_file, validate_auth_file};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Where are credentials stored?
//!     let env = AuthEnv::from_lookup(|name| match name {
//!         "DOCKER_CONFIG" => Some("/tmp".to_string()),
//!         _ => None,
//!     });
//!     let auth_file = resolve_default_auth_file(&env);
//!     assert_eq!(auth_file, "/tmp/config.json");
//!
//!     // An empty path means no auth file is configured
//!     validate_auth_file("")?;
//!
//!     // Which key does `login quay.io/user` refer to?
//!     let parsed = parse_registry_argument("quay.io/user", true)?;
//!     assert_eq!(parsed.key, "quay.io/user");
//!     assert_eq!(parsed.registry, "quay.io");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`AuthEnv`] - Snapshot of the environment variables that pick the auth file
//! - [`ParsedRegistryKey`] - Canonical credential key for a registry argument
//! - [`ImageReference`] - Canonical, tag-free repository name
//! - [`ReferenceNormalizer`] - Seam for repository name normalization
//! - [`RegCredError`] - Error type for every operation

#![warn(clippy::all)]

/// Returns the libregcred crate version.
///
/// # Examples
///
/// ```
/// let version = libregcred::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod argument;
pub mod authfile;
pub mod config;
pub mod error;
pub mod reference;

pub use argument::{ParsedRegistryKey, parse_registry_argument, parse_registry_argument_with};
pub use authfile::{
    AuthEnv, AuthFileSource, default_auth_file, resolve_default_auth_file, validate_auth_file,
};
pub use crate::config::Config;
pub use error::{RegCredError, Result};
pub use reference::{DockerNormalizer, ImageReference, ReferenceError, ReferenceNormalizer};
