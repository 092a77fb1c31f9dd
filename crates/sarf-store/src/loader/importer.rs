//! Loader orchestration: read, parse, insert

use std::fs;
use std::path::Path;

use serde::Serialize;

use sarf_core::{Lexicon, OrderedRootIndex, RootEntity, SchemeTable};

use super::parser::{parse_roots_str, parse_schemes_str, SkippedLine};
use crate::errors::{io_error, line_rejected, Result};

/// Outcome of loading one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Fail on the first skipped line, for callers that want strict input
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the first skipped line.
    pub fn ensure_clean(&self, operation: &str) -> Result<()> {
        match self.skipped.first() {
            Some(s) => Err(line_rejected(operation, s.line, &s.reason)),
            None => Ok(()),
        }
    }
}

fn read(operation: &str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error(operation, path, e))
}

/// Load a roots file into `index`
///
/// Roots already present are counted as duplicates and left untouched.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read.
pub fn load_roots(path: &Path, index: &mut OrderedRootIndex) -> Result<LoadReport> {
    let content = read("load_roots", path)?;
    let parsed = parse_roots_str(&content);

    let mut report = LoadReport {
        skipped: parsed.skipped,
        ..LoadReport::default()
    };
    for record in parsed.records {
        if index.insert(RootEntity::new(record.value)) {
            report.inserted += 1;
        } else {
            tracing::debug!(line = record.line, "duplicate root ignored");
            report.duplicates += 1;
        }
    }

    tracing::debug!(
        path = %path.display(),
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped.len(),
        "roots loaded"
    );
    Ok(report)
}

/// Load a schemes file into `table`
///
/// A name already present keeps its first pattern; the table logs the
/// duplicate.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read.
pub fn load_schemes(path: &Path, table: &mut SchemeTable) -> Result<LoadReport> {
    let content = read("load_schemes", path)?;
    let parsed = parse_schemes_str(&content);

    let mut report = LoadReport {
        skipped: parsed.skipped,
        ..LoadReport::default()
    };
    for record in parsed.records {
        if table.insert(record.value) {
            report.inserted += 1;
        } else {
            report.duplicates += 1;
        }
    }

    tracing::debug!(
        path = %path.display(),
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped.len(),
        capacity = table.capacity(),
        "schemes loaded"
    );
    Ok(report)
}

/// Build a lexicon from optional roots and schemes files
///
/// A missing path leaves that side empty and yields an empty report.
///
/// # Errors
///
/// Returns an `Io` error if either file cannot be read.
pub fn load_lexicon(
    roots: Option<&Path>,
    schemes: Option<&Path>,
) -> Result<(Lexicon, LoadReport, LoadReport)> {
    let mut lexicon = Lexicon::new();

    let roots_report = match roots {
        Some(path) => load_roots(path, lexicon.roots_mut())?,
        None => LoadReport::default(),
    };
    let schemes_report = match schemes {
        Some(path) => load_schemes(path, lexicon.schemes_mut())?,
        None => LoadReport::default(),
    };

    Ok((lexicon, roots_report, schemes_report))
}
