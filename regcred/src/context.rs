//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::{self, OutputFormatter};
use libregcred::config::{ColorChoice, Config, OutputFormat};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured color choice
pub const COLOR_ENV: &str = "REGCRED_COLOR";

/// Application context with resolved configuration and runtime state
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Formatter for user-facing status lines
    pub formatter: Box<dyn OutputFormatter>,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(config_path: Option<&Path>, cli_color: Option<ColorChoice>) -> Self {
        let config = resolve_config(config_path, env::var(COLOR_ENV).ok().as_deref(), cli_color);
        let formatter = format::create_formatter(config.output.color);
        Self { config, formatter }
    }

    /// Output format to use when the command line does not name one
    pub fn output_format(&self, cli_format: Option<&str>) -> OutputFormat {
        cli_format
            .map(OutputFormat::from)
            .unwrap_or(self.config.output.format)
    }
}

/// Merges the configuration layers; see the module docs for precedence.
pub fn resolve_config(
    config_path: Option<&Path>,
    env_color: Option<&str>,
    cli_color: Option<ColorChoice>,
) -> Config {
    // 1. and 2. Defaults, merged with the config file if there is one
    let path = config_path.map(Path::to_path_buf).or_else(default_config_path);
    let mut config = match path.as_deref() {
        Some(p) if config_path.is_some() || p.exists() => Config::load(Some(p))
            .unwrap_or_else(|e| {
                tracing::warn!(path = %p.display(), error = %e, "ignoring unreadable config file");
                Config::default()
            }),
        _ => Config::default(),
    };

    // 3. Environment variable overrides
    if let Some(color) = env_color {
        config.output.color = ColorChoice::from(color);
    }

    // 4. CLI flag overrides (highest priority)
    if let Some(color) = cli_color {
        config.output.color = color;
    }

    config
}

/// Default config file location, e.g. `~/.config/regcred/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("regcred").join("config.yaml"))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
