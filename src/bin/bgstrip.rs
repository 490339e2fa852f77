//! Background removal command
//!
//! One-shot invocation: two positional paths, a start notice, then either a
//! success line naming the output file or a single error line. Exit status 0
//! on success, 1 on failure.

use std::path::PathBuf;
use std::process::ExitCode;

use bgstrip::remove_background;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("Usage: bgstrip <input-image> <output-png>");
        return ExitCode::from(2);
    };
    if args.next().is_some() {
        eprintln!("Usage: bgstrip <input-image> <output-png>");
        return ExitCode::from(2);
    }

    let input = PathBuf::from(input);
    let output = PathBuf::from(output);

    println!("Removing background...");
    match remove_background(&input, &output) {
        Ok(_) => {
            println!("Success! Background removed. Saved to: {}", output.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
