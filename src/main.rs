use braimg::{Config, DEFAULT_MAX_CHARS};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

/// A CLI tool to display an image in the terminal using Braille characters
/// colored with the 256-color ANSI palette.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input image
    #[arg(value_name = "IMAGE")]
    path: PathBuf,

    /// Maximum width of the output in characters (default 160; invalid values warn and use the default)
    #[arg(value_name = "MAX_WIDTH", allow_hyphen_values = true, allow_negative_numbers = true)]
    width: Option<String>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version go to stdout and are not failures.
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let (config, width_error) = Config::from_width_arg(args.width.as_deref());
    if width_error.is_some() {
        eprintln!("Invalid width specified, defaulting to {}", DEFAULT_MAX_CHARS);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match braimg::run(&args.path, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
