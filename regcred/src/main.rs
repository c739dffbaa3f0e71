use clap::{CommandFactory, Parser, Subcommand};
use libregcred::config::ColorChoice;
use std::path::PathBuf;

mod commands;
mod context;
mod format;

/// regcred - Registry credential argument resolver
///
/// Shows which auth file container tools will use and which credential key
/// a registry argument such as `quay.io/user` refers to.
#[derive(Parser, Debug)]
#[command(name = "regcred")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    /// Path to the configuration file
    #[arg(long, global = true, env = "REGCRED_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Show the auth file that will be used
    AuthFile {
        /// Use this auth file instead of the one from the environment
        #[arg(long)]
        authfile: Option<String>,
        /// Fail if the auth file does not exist
        #[arg(long)]
        check: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Parse registry arguments into credential keys
    Parse {
        /// Registry or repository arguments (e.g. quay.io, quay.io/user)
        #[arg(required = true)]
        arguments: Vec<String>,
        /// Accept only registries; URL paths after a scheme are dropped
        #[arg(long)]
        registry_only: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Initialize tracing from RUST_LOG, falling back to the -v count
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(
        cli.config.as_deref(),
        cli.color.as_deref().map(ColorChoice::from),
    );

    match cli.command {
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::AuthFile {
            authfile,
            check,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::auth_file::handle_auth_file(&ctx, authfile.as_deref(), check, fmt);
        }
        Commands::Parse {
            arguments,
            registry_only,
            format,
        } => {
            let fmt = ctx.output_format(format.as_deref());
            commands::parse::handle_parse(&ctx, &arguments, registry_only, fmt);
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_requires_arguments() {
        assert!(Cli::try_parse_from(["regcred", "parse"]).is_err());
    }

    #[test]
    fn test_parse_subcommand_flags() {
        let cli = Cli::try_parse_from([
            "regcred",
            "-vv",
            "parse",
            "--registry-only",
            "https://quay.io/user",
            "quay.io",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Parse {
                arguments,
                registry_only,
                format,
            } => {
                assert_eq!(arguments, vec!["https://quay.io/user", "quay.io"]);
                assert!(registry_only);
                assert!(format.is_none());
            }
            other => panic!("Expected Parse command, got {:?}", other),
        }
    }
}
