//! `combine` merges the distinct, non-blank, whitespace-trimmed lines of two
//! or more input files into a single output file, sorted in ascending byte
//! order. It refuses to overwrite an existing output path.
//!
//! The `merge` module is the kernel of the application. The `args` module
//! parses the command line, `operands` hides the details of reading the input
//! files one at a time, and `set` holds the accumulating line set and writes
//! it out sorted.
//!
//! Current limitations:
//! * Every distinct line is held in memory until the write phase, so inputs
//!   must collectively fit in memory once deduplicated.
//! * Lines are byte strings in whatever encoding the platform hands us; we
//!   don't sniff or convert encodings.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod merge;
pub mod operands;
mod set;
