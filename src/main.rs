use combine::args;
use combine::merge::merge;
use std::io;
use std::process::ExitCode;

/// Exit status when the output path already exists.
const OUTPUT_COLLISION: u8 = 2;
/// Exit status for an I/O failure, distinct from the usage and collision
/// statuses. (BSD's EX_IOERR.)
const IO_ERROR: u8 = 74;

fn main() -> ExitCode {
    let args = args::parsed();

    if args.out_file.exists() {
        println!("Output path already exists: {}", args.out_file.display());
        return ExitCode::from(OUTPUT_COLLISION);
    }

    match merge(&args.out_file, args.files, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("combine: {err:#}");
            ExitCode::from(IO_ERROR)
        }
    }
}
