//! runner-options - Inspect the built-in defaults of the runner's options
//!
//! Prints the default value registered for each command-line option, as
//! consumed by argument parsers that prefill unset options.

use anyhow::Result;
use clap::{Parser, Subcommand};
use runner_options::cli::{DefaultsSubcommand, display_version, handle_defaults_command, init_logging};

/// runner-options - Inspect the built-in defaults of the runner's options
#[derive(Parser, Debug)]
#[command(name = "runner-options")]
#[command(about = "Inspect the built-in defaults of the runner's options", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Option defaults
    Defaults {
        #[command(subcommand)]
        subcommand: DefaultsSubcommand,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = init_logging(args.debug)?;

    // Announce on stderr so stdout only carries command output
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
        tracing::debug!("Debug logging enabled");
    }

    match args.command {
        Command::Defaults { subcommand } => handle_defaults_command(subcommand),
        Command::Version => {
            display_version();
            Ok(())
        }
    }
}
