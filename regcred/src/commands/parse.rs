use crate::context::AppContext;
use crate::format::{self, Formattable};
use libregcred::argument::parse_registry_argument;
use libregcred::config::OutputFormat;
use serde::Serialize;

/// Outcome of parsing one registry argument
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Argument as given on the command line
    pub argument: String,
    /// Canonical credential key, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Registry host, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    /// Canonical repository, when the argument named one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Error message, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseOutcome {
    fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl Formattable for ParseOutcome {
    fn format_pretty(&self) -> String {
        if let Some(ref error) = self.error {
            return format!("{}\n  Error: {}", self.argument, error);
        }

        let mut output = format!("{}\n", self.argument);
        if let Some(ref key) = self.key {
            output.push_str(&format!("  Key: {}\n", key));
        }
        if let Some(ref registry) = self.registry {
            output.push_str(&format!("  Registry: {}\n", registry));
        }
        if let Some(ref repository) = self.repository {
            output.push_str(&format!("  Repository: {}\n", repository));
        }
        output.trim_end().to_string()
    }
}

/// Parse every argument independently; failures do not stop the others
pub(crate) fn parse_arguments(arguments: &[String], accept_repositories: bool) -> Vec<ParseOutcome> {
    arguments
        .iter()
        .map(|arg| match parse_registry_argument(arg, accept_repositories) {
            Ok(parsed) => ParseOutcome {
                argument: arg.clone(),
                key: Some(parsed.key),
                registry: Some(parsed.registry),
                repository: parsed.reference.map(|r| r.to_string()),
                error: None,
            },
            Err(e) => ParseOutcome {
                argument: arg.clone(),
                key: None,
                registry: None,
                repository: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// Handle the parse subcommand
pub fn handle_parse(
    ctx: &AppContext,
    arguments: &[String],
    registry_only: bool,
    fmt: OutputFormat,
) {
    let outcomes = parse_arguments(arguments, !registry_only);

    match format::format_output_vec(&outcomes, fmt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            ctx.formatter.error(&e);
            std::process::exit(1);
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        ctx.formatter.error(&format!(
            "{} of {} argument(s) could not be parsed",
            failed,
            outcomes.len()
        ));
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
