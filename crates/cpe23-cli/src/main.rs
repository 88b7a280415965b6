use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use cpe23_core::{BatchEntry, CpeRecord};
use serde::Serialize;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "cpe23")]
#[command(version)]
#[command(
    about = "Decode CPE 2.3 formatted strings into their eleven attributes.",
    long_about = None,
    after_help = "Examples:\n  cpe23 'cpe:2.3:a:vendor:product:1.0:*:*:*:*:*:*:*'\n  cpe23 --json 'cpe:2.3:o:linux:linux_kernel:6.1:*:*:*:*:*:*:*'\n  cpe23 --file candidates.txt --strict"
)]
struct Cli {
    /// CPE 2.3 formatted string (e.g. cpe:2.3:a:vendor:product:1.0:*:*:*:*:*:*:*)
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    cpe: Option<String>,

    /// Decode each line of a text file instead of a single string
    #[arg(short = 'f', long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Emit JSON instead of a key/value listing
    #[arg(long)]
    json: bool,

    /// Exit with a non-zero code if any line of the batch fails to decode
    #[arg(long, requires = "file")]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match (cli.cpe, cli.file) {
        (Some(cpe), _) => cmd_decode(&cpe, cli.json),
        (None, Some(file)) => cmd_batch(&file, cli.json, cli.strict),
        (None, None) => Err(CliError::new(
            "missing CPE string",
            Some("pass a CPE 2.3 formatted string or use --file".to_string()),
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {err}");
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

/// JSON shape of one batch line.
#[derive(Debug, Serialize)]
struct EntryReport<'a> {
    line: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a CpeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a BatchEntry> for EntryReport<'a> {
    fn from(entry: &'a BatchEntry) -> Self {
        Self {
            line: entry.line,
            input: &entry.input,
            record: entry.result.as_ref().ok(),
            error: entry.result.as_ref().err().map(|err| err.to_string()),
        }
    }
}

fn cmd_decode(input: &str, json: bool) -> Result<(), CliError> {
    let record = cpe23_core::decode(input).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("expected cpe:2.3: followed by 11 colon-separated fields".to_string()),
        )
    })?;

    if json {
        println!("{}", to_json(&record)?);
    } else {
        println!("{record}");
    }
    Ok(())
}

fn cmd_batch(path: &Path, json: bool, strict: bool) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::new(
            format!("input file not found: {}", path.display()),
            Some("pass a text file with one CPE string per line".to_string()),
        ));
    }

    let entries = cpe23_core::decode_file(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let failed = entries.iter().filter(|entry| entry.result.is_err()).count();
    debug!(total = entries.len(), failed, "batch decoded");

    if json {
        let reports: Vec<EntryReport<'_>> = entries.iter().map(EntryReport::from).collect();
        println!("{}", to_json(&reports)?);
    } else {
        print_entries(&entries);
    }

    if strict && failed > 0 {
        return Err(CliError::new(
            format!("{failed} of {} lines failed to decode", entries.len()),
            Some("run without --strict to inspect each line".to_string()),
        ));
    }
    Ok(())
}

fn print_entries(entries: &[BatchEntry]) {
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Input: {}", entry.input);
        match &entry.result {
            Ok(record) => println!("{record}"),
            Err(err) => println!("{err}"),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .context("JSON serialization failed")
        .map_err(Into::into)
}
