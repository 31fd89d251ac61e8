mod status;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use sqlgen_attrs::config::{self, Config};
use sqlgen_attrs::{KnownAttributes, Validation};

use crate::status::{ColoredStatus, Status};

/// Program to check the attribute names given to SQL generation
///
/// INPUT is a JSON object whose top-level keys are the attribute names to check. Its values are
/// ignored. The known attributes are the union of all `--known` names and the `known` list of the
/// config file.
///
/// Exit code:
/// - `0`: If every attribute name is recognized
/// - `1`: If some attribute name is not recognized
/// - `2`: If an unexpected I/O or parse error occurs
///
/// Standard error:
/// - Unrecognized attributes, one per line
/// - A final status message
#[derive(Parser, Debug)]
#[command(about, verbatim_doc_comment)]
pub struct Args {
    /// Path to the JSON object whose attribute names are checked.
    input: PathBuf,

    /// Attribute names to recognize. May be repeated or comma separated.
    #[arg(long, value_delimiter = ',')]
    known: Vec<String>,

    /// Path to a JSON config file of the form `{ "known": [...] }`.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let status: ColoredStatus = process(&args.input, args.known, args.config.as_deref()).into();
    eprintln!("{status}");
    status.into()
}

/// Does the actual work. This is the abstraction used both by `main` and the tests.
fn process(input: &Path, known: Vec<String>, config_path: Option<&Path>) -> Status {
    match check_attributes(input, known, config_path) {
        Ok(status) => status,
        Err(error) => error.into(),
    }
}

fn check_attributes(
    input: &Path,
    known: Vec<String>,
    config_path: Option<&Path>,
) -> anyhow::Result<Status> {
    let mut known_attributes = KnownAttributes::new(known);
    if let Some(path) = config_path {
        known_attributes.extend(Config::load(path)?.known);
    }

    let names = config::read_attribute_names(input)?;

    Ok(
        match known_attributes.validate(names.iter().map(String::as_str)) {
            Validation::Success(()) => Status::ValidatedSuccessfully,
            Validation::Failure(problems) => Status::ProblemsFound {
                problems,
                known: known_attributes,
            },
        },
    )
}
