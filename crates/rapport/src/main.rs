//! Command line front end: JSON report description in, DOCX out.

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use rapport::{generate_report, Error, ReportData, Result};

/// Generates a French internship report (DOCX) from a JSON description.
#[derive(Debug, Clone, Parser)]
#[clap(name = "rapport", version)]
pub struct Args {
    /// Path to the JSON report description, or `-` for stdin.
    #[clap(value_name = "INPUT")]
    pub input: String,

    /// Path of the generated document, or `-` for stdout.
    ///
    /// Defaults to the input path with a `.docx` extension, or to stdout
    /// when reading from stdin.
    #[clap(value_name = "OUTPUT", default_value = None)]
    pub output: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let json = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let data: ReportData = serde_json::from_str(&json)
        .map_err(|err| Error::from(format!("invalid report description: {err}")))?;
    let bytes = generate_report(&data)?;

    let is_stdout = match args.output.as_deref() {
        Some(output) => output == "-",
        None => args.input == "-",
    };
    if is_stdout {
        std::io::stdout().write_all(&bytes)?;
        return Ok(());
    }

    let output_path = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(&args.input).with_extension("docx"));
    std::fs::write(&output_path, &bytes)
        .map_err(|err| Error::from(format!("failed to write {output_path:?}: {err}")))?;
    Ok(())
}
