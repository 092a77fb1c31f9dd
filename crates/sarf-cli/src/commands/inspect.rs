//! Read-only listing subcommands: roots, schemes, stats

use serde::Serialize;

use sarf_core::ops::LexiconStats;
use sarf_core::{RootEntity, SchemeEntity};
use sarf_store::LoadReport;

use super::{CliResult, Context};

pub fn roots(ctx: &Context) -> CliResult {
    let roots: Vec<&RootEntity> = ctx.lexicon.roots().all_roots().collect();
    ctx.emit(&roots, || {
        roots
            .iter()
            .map(|r| format!("{}\t{}", r.letters(), r.root_type()))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn schemes(ctx: &Context) -> CliResult {
    let mut schemes: Vec<&SchemeEntity> = ctx.lexicon.schemes().all_schemes().collect();
    schemes.sort_by(|a, b| a.name().cmp(b.name()));
    ctx.emit(&schemes, || {
        schemes
            .iter()
            .map(|s| format!("{}\t{}", s.name(), s.pattern()))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    #[serde(flatten)]
    lexicon: LexiconStats,
    roots_file: &'a LoadReport,
    schemes_file: &'a LoadReport,
}

pub fn stats(ctx: &Context) -> CliResult {
    let out = StatsOutput {
        lexicon: ctx.lexicon.stats(),
        roots_file: &ctx.roots_report,
        schemes_file: &ctx.schemes_report,
    };
    ctx.emit(&out, || {
        let s = &out.lexicon;
        format!(
            "roots: {}\ntree height: {}\nderivatives: {}\nschemes: {}\nbuckets: {}\nload factor: {:.2}\nskipped lines: {}",
            s.root_count,
            s.tree_height,
            s.derivative_count,
            s.scheme_count,
            s.scheme_capacity,
            s.load_factor,
            out.roots_file.skipped.len() + out.schemes_file.skipped.len()
        )
    })
}
