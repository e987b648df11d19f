use std::fs;
use std::io;
use std::process;

use clap::{Parser, ValueEnum};

use podlint::manifest::report::{error_header, Reporter};
use podlint::manifest::types::LintError;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Pre-flight validation for Pod manifests", long_about = None)]
struct Args {
    /// Path to the manifest to validate
    #[clap(value_parser)]
    file: String,

    /// Output format for diagnostics
    #[clap(long, value_enum, default_value_t = Format::Plain)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Plain,
    Json,
}

fn run(args: &Args) -> Result<Reporter, LintError> {
    let input = fs::read_to_string(&args.file)?;
    podlint::lint(&input, &args.file)
}

fn main() {
    let args = Args::parse();

    let reporter = match run(&args) {
        Ok(reporter) => reporter,
        Err(error) => {
            eprintln!("{} {}", error_header("Error"), error);
            process::exit(1);
        }
    };

    match args.format {
        Format::Plain => {
            let _ = reporter.flush(&mut io::stderr());
        }
        Format::Json => match serde_json::to_string_pretty(reporter.diagnostics()) {
            Ok(listing) => println!("{}", listing),
            Err(error) => {
                eprintln!("{} {}", error_header("Error"), LintError::Json(error));
                process::exit(1);
            }
        },
    }

    process::exit(if reporter.has_errors() { 1 } else { 0 });
}
