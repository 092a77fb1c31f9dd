//! Parsers for the roots and schemes files

use serde::Serialize;

use sarf_core::rules::letters::{is_valid_triliteral_root, strip_diacritics};
use sarf_core::SchemeEntity;

const COMMENT: char = '#';
const SEPARATORS: [char; 2] = ['|', ';'];
const BOM: char = '\u{FEFF}';

/// A data line the parser could not use
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// A parsed value and the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<T> {
    pub line: usize,
    pub value: T,
}

/// Output of parsing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<Record<T>>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Numbered data lines, without blanks and comments
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim_start_matches(BOM).trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT))
}

fn skip(line: usize, content: &str, reason: String) -> SkippedLine {
    tracing::warn!(line, content, reason = %reason, "skipping data line");
    SkippedLine {
        line,
        content: content.to_string(),
        reason,
    }
}

/// Parse a roots file
///
/// Diacritics are dropped; anything left that is not three Arabic letters
/// is skipped.
pub fn parse_roots_str(content: &str) -> Parsed<String> {
    let mut parsed = Parsed::default();

    for (line, text) in data_lines(content) {
        let letters = strip_diacritics(text);
        if is_valid_triliteral_root(&letters) {
            parsed.records.push(Record {
                line,
                value: letters,
            });
        } else {
            let reason = format!(
                "expected 3 Arabic letters, found {} characters",
                letters.chars().count()
            );
            parsed.skipped.push(skip(line, text, reason));
        }
    }

    parsed
}

/// Parse a schemes file
pub fn parse_schemes_str(content: &str) -> Parsed<SchemeEntity> {
    let mut parsed = Parsed::default();

    for (line, text) in data_lines(content) {
        let Some((name, pattern)) = text.split_once(SEPARATORS) else {
            parsed
                .skipped
                .push(skip(line, text, "missing '|' separator".to_string()));
            continue;
        };

        let (name, pattern) = (name.trim(), pattern.trim());
        if name.is_empty() || pattern.is_empty() {
            parsed
                .skipped
                .push(skip(line, text, "empty scheme name or pattern".to_string()));
            continue;
        }

        parsed.records.push(Record {
            line,
            value: SchemeEntity::new(name, pattern),
        });
    }

    parsed
}
