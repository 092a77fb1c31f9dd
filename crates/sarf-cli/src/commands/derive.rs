//! Derivation subcommands
//!
//! Usage:
//!   sarf generate <ROOT> <SCHEME>
//!   sarf validate <WORD> <ROOT>
//!   sarf decompose <WORD>
//!   sarf family <ROOT>

use clap::Args;
use serde::Serialize;

use sarf_engine::{commands, Analysis};

use super::{CliResult, Context};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Root letters, e.g. كتب
    pub root: String,
    /// Scheme name from the schemes file or the root type's table
    pub scheme: String,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    pub word: String,
    pub root: String,
}

#[derive(Debug, Args)]
pub struct DecomposeArgs {
    pub word: String,
}

#[derive(Debug, Args)]
pub struct FamilyArgs {
    pub root: String,
}

#[derive(Serialize)]
struct Generated<'a> {
    root: &'a str,
    scheme: &'a str,
    word: &'a str,
}

/// JSON shape of a validate/decompose answer
#[derive(Serialize)]
struct Verdict<'a> {
    word: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a Analysis>,
}

#[derive(Serialize)]
struct FamilyLine {
    scheme: String,
    pattern: String,
    from_table: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn describe(analysis: &Analysis) -> String {
    format!(
        "VALID {} <- {} [{}: {}] via {}",
        analysis.word,
        analysis.root,
        analysis.scheme.name(),
        analysis.scheme.pattern(),
        analysis.source
    )
}

pub fn generate(ctx: &mut Context, args: GenerateArgs) -> CliResult {
    let word = commands::generate_word(&mut ctx.lexicon, &args.root, &args.scheme)?;
    let out = Generated {
        root: &args.root,
        scheme: &args.scheme,
        word: &word,
    };
    ctx.emit(&out, || word.clone())
}

pub fn validate(ctx: &mut Context, args: ValidateArgs) -> CliResult {
    let analysis = commands::validate_word(&mut ctx.lexicon, &args.word, &args.root)?;
    let verdict = Verdict {
        word: &args.word,
        valid: analysis.is_some(),
        analysis: analysis.as_ref(),
    };
    ctx.emit(&verdict, || match &analysis {
        Some(a) => describe(a),
        None => format!("INVALID {} for root {}", args.word, args.root),
    })
}

pub fn decompose(ctx: &mut Context, args: DecomposeArgs) -> CliResult {
    let analysis = commands::decompose(&mut ctx.lexicon, &args.word)?;
    let verdict = Verdict {
        word: &args.word,
        valid: analysis.is_some(),
        analysis: analysis.as_ref(),
    };
    ctx.emit(&verdict, || match &analysis {
        Some(a) => describe(a),
        None => format!("INVALID {}: no indexed root explains it", args.word),
    })
}

pub fn family(ctx: &mut Context, args: FamilyArgs) -> CliResult {
    let members = commands::root_family(&mut ctx.lexicon, &args.root)?;
    let lines: Vec<FamilyLine> = members
        .into_iter()
        .map(|m| {
            let (word, error) = match m.word {
                Ok(w) => (Some(w), None),
                Err(e) => (None, Some(e.to_string())),
            };
            FamilyLine {
                scheme: m.scheme.name().to_string(),
                pattern: m.scheme.pattern().to_string(),
                from_table: m.from_table,
                word,
                error,
            }
        })
        .collect();

    ctx.emit(&lines, || {
        lines
            .iter()
            .map(|l| {
                let result = l
                    .word
                    .as_deref()
                    .or(l.error.as_deref())
                    .unwrap_or_default();
                format!("{}\t{}\t{}", l.scheme, l.pattern, result)
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
