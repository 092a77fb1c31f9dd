//! Sarf CLI
//!
//! Command-line interface for the Arabic morphology engine

use clap::{Parser, Subcommand};

use sarf_core::logging_facility::{init, Profile};
use sarf_core_types::RequestId;

mod commands;

use commands::{DataArgs, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "sarf")]
#[command(about = "Sarf - Arabic root and scheme morphology", long_about = None)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a word from a root and a scheme name
    Generate(commands::derive::GenerateArgs),
    /// Check whether a word derives from a root
    Validate(commands::derive::ValidateArgs),
    /// Find the root a word derives from
    Decompose(commands::derive::DecomposeArgs),
    /// Generate every pattern available to a root
    Family(commands::derive::FamilyArgs),
    /// List indexed roots in order
    Roots,
    /// List loaded schemes
    Schemes,
    /// Show index and table statistics
    Stats,
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let request_id = RequestId::new();
    let span = tracing::info_span!("request", request_id = %request_id);
    let _guard = span.enter();

    let result = commands::load(&cli.data).and_then(|mut ctx| match cli.command {
        Commands::Generate(args) => commands::derive::generate(&mut ctx, args),
        Commands::Validate(args) => commands::derive::validate(&mut ctx, args),
        Commands::Decompose(args) => commands::derive::decompose(&mut ctx, args),
        Commands::Family(args) => commands::derive::family(&mut ctx, args),
        Commands::Roots => commands::inspect::roots(&ctx),
        Commands::Schemes => commands::inspect::schemes(&ctx),
        Commands::Stats => commands::inspect::stats(&ctx),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
