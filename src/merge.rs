//! Houses the `merge` function, the kernel of the application.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use crate::operands::Operands;
use crate::set::LineSet;

/// Merges the distinct non-blank trimmed lines of `files` into a new file at
/// `out_file`, sorted ascending by byte sequence.
///
/// Progress feedback goes to `progress`: each input path as it's about to be
/// read, then a fixed status line before the output file is written. (The
/// status line's spelling, `Outputing`, is historical.)
///
/// The output file is opened with exclusive-create semantics, so a file that
/// appears at `out_file` after the caller's existence check but before the
/// write phase makes the open fail rather than being overwritten.
pub fn merge(out_file: &Path, files: Vec<PathBuf>, mut progress: impl io::Write) -> Result<()> {
    let mut set = LineSet::new();
    for operand in Operands::from(files) {
        let operand = operand?;
        writeln!(progress, "{}", operand.path().display())?;
        operand.for_byte_line(|line| set.insert(line))?;
    }

    writeln!(progress, "Outputing")?;
    let out = File::options()
        .write(true)
        .create_new(true)
        .open(out_file)
        .with_context(|| format!("Can't create output file: {}", out_file.display()))?;
    set.write_sorted_to(BufWriter::new(out))
        .with_context(|| format!("Error writing output file: {}", out_file.display()))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};
    use std::fs;

    fn merged(inputs: &[&str]) -> (String, String) {
        let temp = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for (n, contents) in inputs.iter().enumerate() {
            let input = temp.child(format!("input{n}.txt"));
            input.write_str(contents).unwrap();
            paths.push(input.path().to_owned());
        }
        let out_path = temp.child("out.txt").path().to_owned();

        let mut progress = Vec::new();
        merge(&out_path, paths, &mut progress).unwrap();
        let output = fs::read_to_string(&out_path).unwrap();
        (output, String::from_utf8(progress).unwrap())
    }

    fn lines(output: &str) -> Vec<&str> {
        output.lines().collect()
    }

    #[test]
    fn output_is_the_sorted_deduplicated_union_of_all_inputs() {
        let (output, _) = merged(&["foo\nbar\n\n", "bar\nbaz"]);
        assert_eq!(lines(&output), ["bar", "baz", "foo"]);
    }

    #[test]
    fn input_order_does_not_change_the_output() {
        let (forward, _) = merged(&["foo\nbar\n", "bar\nbaz\n", "qux\n"]);
        let (backward, _) = merged(&["qux\n", "bar\nbaz\n", "foo\nbar\n"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn whitespace_only_lines_never_reach_the_output() {
        let (output, _) = merged(&["   \n\t\n\nreal\n", "\n  \n"]);
        assert_eq!(lines(&output), ["real"]);
    }

    #[test]
    fn progress_names_each_input_in_order_then_announces_the_write() {
        let (_, progress) = merged(&["a\n", "b\n"]);
        let lines: Vec<&str> = progress.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("input0.txt"));
        assert!(lines[1].ends_with("input1.txt"));
        assert_eq!(lines[2], "Outputing");
    }

    #[test]
    fn an_unreadable_input_aborts_before_the_output_file_is_created() {
        let temp = TempDir::new().unwrap();
        let good = temp.child("good.txt");
        good.write_str("line\n").unwrap();
        let absent = temp.child("absent.txt").path().to_owned();
        let out_path = temp.child("out.txt").path().to_owned();

        let mut progress = Vec::new();
        let err = merge(&out_path, vec![good.path().to_owned(), absent], &mut progress)
            .unwrap_err();
        assert!(format!("{err}").contains("Can't open file"));
        assert!(!out_path.exists());
    }

    #[test]
    fn a_file_appearing_at_the_output_path_mid_run_fails_the_exclusive_create() {
        let temp = TempDir::new().unwrap();
        let input = temp.child("input.txt");
        input.write_str("line\n").unwrap();
        let out = temp.child("out.txt");
        out.write_str("already here\n").unwrap();

        let mut progress = Vec::new();
        let err =
            merge(out.path(), vec![input.path().to_owned()], &mut progress).unwrap_err();
        assert!(format!("{err}").contains("Can't create output file"));
        assert_eq!(fs::read_to_string(out.path()).unwrap(), "already here\n");
    }
}
