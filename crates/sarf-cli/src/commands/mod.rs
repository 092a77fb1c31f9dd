//! Subcommand implementations and the state they share

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use sarf_core::Lexicon;
use sarf_store::LoadReport;

pub mod derive;
pub mod inspect;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Data files and output options common to every subcommand
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Roots file, one root per line
    #[arg(long, global = true)]
    pub roots: Option<PathBuf>,

    /// Schemes file, one `name|pattern` per line
    #[arg(long, global = true)]
    pub schemes: Option<PathBuf>,

    /// Fail if any data line is skipped
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Loaded lexicon plus output settings
pub struct Context {
    pub lexicon: Lexicon,
    pub json: bool,
    pub roots_report: LoadReport,
    pub schemes_report: LoadReport,
}

impl Context {
    /// Print `value` as JSON, or `text` when JSON output is off
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> CliResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

/// Load the data files named on the command line
pub fn load(args: &DataArgs) -> Result<Context, Box<dyn std::error::Error>> {
    let (lexicon, roots_report, schemes_report) =
        sarf_store::load_lexicon(args.roots.as_deref(), args.schemes.as_deref())?;

    if args.strict {
        roots_report.ensure_clean("load_roots")?;
        schemes_report.ensure_clean("load_schemes")?;
    }

    Ok(Context {
        lexicon,
        json: args.json,
        roots_report,
        schemes_report,
    })
}
