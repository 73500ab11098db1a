//! # sdjwt CLI entry point
//!
//! Parses arguments, initialises tracing, and dispatches to the subcommand
//! handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sdjwt_cli::inspect::{run_inspect, InspectArgs};
use sdjwt_cli::pack::{run_pack, PackArgs};
use sdjwt_cli::reveal::{run_paths, run_select, run_unpack, RevealArgs, SelectArgs};

/// Selective-disclosure claim tools.
///
/// Blinds claim trees into `_sd` digests and disclosures, reveals them
/// again, and computes which disclosures a presentation needs.
#[derive(Parser, Debug)]
#[command(name = "sdjwt", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Blind claims according to a disclosure frame.
    Pack(PackArgs),

    /// Reveal a blinded payload with the given disclosures.
    Unpack(RevealArgs),

    /// List every path a disclosure can reveal.
    Paths(RevealArgs),

    /// Select the disclosures needed to reveal a set of paths.
    Select(SelectArgs),

    /// Decode a compact SD-JWT without verifying it.
    Inspect(InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let result = match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Unpack(args) => run_unpack(args),
        Commands::Paths(args) => run_paths(args),
        Commands::Select(args) => run_select(args),
        Commands::Inspect(args) => run_inspect(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
