//! Provides the `Operands` iterator over the input files. Each file is opened
//! only when the iterator reaches it, so at most one input file is open at a
//! time: the previous operand's handle is dropped before the next is opened.

use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// An iterator over the input files named on the command line, in command-line
/// order. Each step opens the next file and yields an [`Operand`] for it (or
/// the error from the failed open).
pub struct Operands {
    files: std::vec::IntoIter<PathBuf>,
}

impl From<Vec<PathBuf>> for Operands {
    fn from(files: Vec<PathBuf>) -> Self {
        Operands { files: files.into_iter() }
    }
}

impl Iterator for Operands {
    type Item = Result<Operand>;
    fn next(&mut self) -> Option<Self::Item> {
        self.files.next().map(Operand::open)
    }
}

/// The `Item` type of the [`Operands`] iterator. The `reader` field is a
/// buffered reader for the file at `path`; we keep `path` around for progress
/// output and error messages.
#[derive(Debug)]
pub struct Operand {
    path: PathBuf,
    reader: BufReader<File>,
}

impl Operand {
    fn open(path: PathBuf) -> Result<Operand> {
        let f = File::open(&path).with_context(|| format!("Can't open file: {}", path.display()))?;
        Ok(Operand { path, reader: BufReader::new(f) })
    }

    /// The path this operand was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A convenience wrapper around `bstr::for_byte_line`: calls
    /// `for_each_line` with each line of the file, line terminator removed.
    pub fn for_byte_line<F>(mut self, mut for_each_line: F) -> Result<()>
    where
        F: FnMut(&[u8]),
    {
        let complaint = format!("Error reading file: {}", self.path.display());
        self.reader
            .for_byte_line(|line| {
                for_each_line(line);
                Ok(true)
            })
            .context(complaint)?;
        Ok(())
    }
}
