//! Code to parse the command line using `clap`, and definitions of the parsed
//! result.
//!
//! Usage problems are our own exit-status-1 affair: clap would print to
//! standard error and exit 2, but this tool reports usage errors on standard
//! output and reserves status 2 for an already-existing output path. So we
//! use `try_parse` and render clap's error ourselves.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

/// Exit status for a usage error (too few arguments).
pub const USAGE_ERROR: u8 = 1;

/// Returns the parsed command line: the `Args` return value's `out_file`
/// field is the path to create, and `files` holds the input files to merge.
///
/// On a usage error, prints the message to standard output and exits with
/// status 1. `--help` and `--version` print their text and exit with status 0.
#[must_use]
pub fn parsed() -> Args {
    match CliArgs::try_parse() {
        Ok(cli) => Args { out_file: cli.out_file, files: cli.files },
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                exit(0)
            }
            _ => {
                print!("{err}");
                exit(i32::from(USAGE_ERROR))
            }
        },
    }
}

/// The parsed command line.
pub struct Args {
    /// `out_file` is the path of the merged output file; it must not exist yet
    pub out_file: PathBuf,
    /// `files` is the list of input files from the command line
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(name = "combine", version)]
/// Merge the distinct non-blank lines of the input files into OUTFILE, sorted
struct CliArgs {
    /// Path of the output file to create (refused if it already exists)
    #[arg(value_name = "OUTFILE")]
    out_file: PathBuf,
    /// Input files whose lines are merged (at least two)
    #[arg(value_name = "FILES", num_args = 2.., required = true)]
    files: Vec<PathBuf>,
}
