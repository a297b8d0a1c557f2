//! Name table generation.
//!
//! Turns the text of an enum body into initializer lines, one per enumerator,
//! in input order.

use crate::FlagmapError;
use crate::line::{LineKind, classify};
use std::fmt::{self, Write as FmtWrite};
use std::io::Write;
use tracing::{debug, trace};

/// Counts of each line classification seen during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub entries: usize,
    pub enum_decls: usize,
    pub comments: usize,
    pub blanks: usize,
    pub braces: usize,
}

impl TableStats {
    fn record(&mut self, kind: &LineKind<'_>) {
        match kind {
            LineKind::Entry(_) => self.entries += 1,
            LineKind::EnumDecl(_) => self.enum_decls += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Blank => self.blanks += 1,
            LineKind::OpenBrace | LineKind::CloseBrace => self.braces += 1,
        }
    }

    /// Number of lines written to the table.
    pub fn emitted(&self) -> usize {
        self.entries + self.enum_decls
    }

    /// Number of lines dropped.
    pub fn skipped(&self) -> usize {
        self.comments + self.blanks + self.braces
    }
}

/// A rendered name table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Output text, every line terminated by `\n`
    pub text: String,
    pub stats: TableStats,
}

impl Table {
    /// Output lines without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split `source` on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not produce an empty final line.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(idx) = rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut rest));
        };

        let line = &rest[..idx];
        let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + terminator..];
        Some(line)
    })
}

/// Generate the name table for `source`.
///
/// Lines may end in `\n`, `\r\n` or `\r`; all three yield the same table.
pub fn generate_table(source: &str) -> Result<Table, fmt::Error> {
    let mut table = Table::default();

    for (idx, line) in split_lines(source).enumerate() {
        let kind = classify(line);
        table.stats.record(&kind);

        match kind.render() {
            Some(rendered) => writeln!(&mut table.text, "{}", rendered)?,
            None => trace!(line = idx + 1, ?kind, "skipping line"),
        }
    }

    debug!(
        emitted = table.stats.emitted(),
        skipped = table.stats.skipped(),
        "generated name table"
    );

    Ok(table)
}

/// Write a rendered table to `writer` and flush it.
pub fn write_table<W: Write>(table: &Table, mut writer: W) -> Result<(), FlagmapError> {
    writer.write_all(table.text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
