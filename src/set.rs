//! Provides the `LineSet` structure: the set of distinct, non-blank, trimmed
//! lines accumulated across every input file.

use anyhow::Result;
use bstr::ByteSlice;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::io;

/// The line terminator used for the output file: the platform's default
/// newline convention.
#[cfg(windows)]
pub(crate) const LINE_TERMINATOR: &[u8] = b"\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_TERMINATOR: &[u8] = b"\n";

/// A `LineSet` is a set of lines, each line an owned byte string.
/// * Lines are trimmed of leading and trailing whitespace on insertion.
/// * Lines that are empty after trimming are never inserted.
/// * Duplicate insertions are no-ops.
///
/// Insertion order is irrelevant: the set is emitted sorted, so the same
/// collection of lines produces the same output no matter which file
/// contributed which line first.
pub(crate) struct LineSet {
    set: IndexSet<Vec<u8>, FxBuildHasher>,
}

impl LineSet {
    pub(crate) fn new() -> LineSet {
        LineSet { set: IndexSet::default() }
    }

    /// Trim `line` and insert it, unless the trimmed result is empty.
    pub(crate) fn insert(&mut self, line: &[u8]) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if !self.set.contains(line) {
            self.set.insert(line.to_vec());
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.set.len()
    }

    /// Write the set's members to `out`, sorted ascending by byte sequence,
    /// one per line, each terminated by the platform's line separator.
    pub(crate) fn write_sorted_to(&self, mut out: impl io::Write) -> Result<()> {
        let mut lines: Vec<&[u8]> = self.set.iter().map(Vec::as_slice).collect();
        lines.sort_unstable();
        for line in lines {
            out.write_all(line)?;
            out.write_all(LINE_TERMINATOR)?;
        }
        out.flush()?;
        Ok(())
    }
}
