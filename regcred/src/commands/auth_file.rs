use crate::context::AppContext;
use crate::format::{self, Formattable};
use libregcred::authfile::{AuthEnv, resolve_default_auth_file, validate_auth_file};
use libregcred::config::OutputFormat;
use libregcred::error::RegCredError;
use serde::Serialize;

/// Resolved auth file, as reported by `regcred auth-file`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AuthFileReport {
    /// Resolved path; empty when no auth file is configured
    pub path: String,
    /// Setting that decided the path
    pub source: String,
    /// Whether the path was checked for accessibility
    pub checked: bool,
}

impl Formattable for AuthFileReport {
    fn format_pretty(&self) -> String {
        let path = if self.path.is_empty() {
            "(none)"
        } else {
            self.path.as_str()
        };
        format!("Auth file: {}\nSource: {}", path, self.source)
    }
}

/// Resolve the auth file, preferring an explicit path over the environment
pub(crate) fn resolve_auth_file(
    explicit: Option<&str>,
    env: &AuthEnv,
    check: bool,
) -> Result<AuthFileReport, RegCredError> {
    let (path, source) = match explicit {
        Some(path) => (path.to_string(), "--authfile".to_string()),
        None => (
            resolve_default_auth_file(env),
            env.auth_file_source().to_string(),
        ),
    };

    if check {
        validate_auth_file(&path)?;
    }

    Ok(AuthFileReport {
        path,
        source,
        checked: check,
    })
}

/// Handle the auth-file subcommand
pub fn handle_auth_file(
    ctx: &AppContext,
    explicit: Option<&str>,
    check: bool,
    fmt: OutputFormat,
) {
    let report = match resolve_auth_file(explicit, &AuthEnv::from_process(), check) {
        Ok(report) => report,
        Err(e) => {
            ctx.formatter.error(&e.to_string());
            std::process::exit(1);
        }
    };

    match format::format_output(&report, fmt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            ctx.formatter.error(&e);
            std::process::exit(1);
        }
    }

    if fmt == OutputFormat::Pretty {
        if report.path.is_empty() {
            ctx.formatter.warning("No auth file configured");
        } else if report.checked {
            ctx.formatter.success("Auth file is accessible");
        }
    }
}

#[cfg(test)]
#[path = "auth_file_tests.rs"]
mod tests;
