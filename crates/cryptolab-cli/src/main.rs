//! # hello-sha256 entry point
//!
//! Prints the SHA-256 digest of `"Hello, World!"`. Takes no arguments beyond
//! `--help`, `--version` and a verbosity counter for stderr diagnostics.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print the SHA-256 digest of "Hello, World!".
#[derive(Parser, Debug)]
#[command(name = "hello-sha256", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("hello-sha256 v{} starting", env!("CARGO_PKG_VERSION"));

    match print_digest() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn print_digest() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let digest = cryptolab_cli::run(&mut stdout.lock()).context("writing digest to stdout")?;
    tracing::info!(%digest, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parse_no_args() {
        let cli = Cli::try_parse_from(["hello-sha256"]).unwrap();
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_verbosity_count() {
        let cli = Cli::try_parse_from(["hello-sha256", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_rejects_positional_args() {
        assert!(Cli::try_parse_from(["hello-sha256", "other message"]).is_err());
    }
}
