//! fastint CLI
//!
//! Scans integers given on the command line, or reads integer records from a
//! file, and prints the values.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use fastint_parser::{FixedLayout, RecordReader, ScanMode};
use fastint_scanner::{scan, scan_strict};
use log::{LevelFilter, debug};
use std::process;

fn cli() -> Command {
    Command::new("fastint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scan integers from fixed-column numeric text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Read integer records from a file")
                .num_args(1),
        )
        .arg(
            Arg::new("layout")
                .short('l')
                .long("layout")
                .value_name("DESCRIPTOR")
                .help("Fixed-column layout for the file, e.g. 3I5,I8")
                .requires("file")
                .num_args(1),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject fields that are not well-formed integers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("values")
                .value_name("VALUE")
                .help("Text to scan as an integer")
                .allow_negative_numbers(true)
                .num_args(1..)
                .index(1),
        )
}

/// What a single invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    values: Vec<String>,
    file: Option<String>,
    layout: Option<String>,
    mode: ScanMode,
    json: bool,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            values: matches
                .get_many::<String>("values")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            file: matches.get_one::<String>("file").cloned(),
            layout: matches.get_one::<String>("layout").cloned(),
            mode: if matches.get_flag("strict") {
                ScanMode::Strict
            } else {
                ScanMode::Legacy
            },
            json: matches.get_flag("json"),
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("FASTINT_LOG")
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let options = Options::from_matches(&matches);
    debug!("{options:?}");

    match run(&options) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

fn run(options: &Options) -> Result<String, anyhow::Error> {
    let mut output = String::new();

    if !options.values.is_empty() {
        let values = scan_values(&options.values, options.mode)?;
        output.push_str(&render_values(&values, options.json)?);
    }

    if let Some(path) = &options.file {
        let rows = read_file(path, options.layout.as_deref(), options.mode)?;
        output.push_str(&render_rows(&rows, options.json)?);
    }

    Ok(output)
}

fn scan_values(values: &[String], mode: ScanMode) -> Result<Vec<i32>, anyhow::Error> {
    values
        .iter()
        .map(|value| match mode {
            ScanMode::Legacy => Ok(scan(value)),
            ScanMode::Strict => {
                scan_strict(value).with_context(|| format!("cannot scan {value:?}"))
            }
        })
        .collect()
}

fn read_file(
    path: &str,
    layout: Option<&str>,
    mode: ScanMode,
) -> Result<Vec<Vec<i32>>, anyhow::Error> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    let reader = RecordReader::new_with_filename(&content, path);

    let rows = match layout {
        Some(descriptor) => reader.read_fixed(&FixedLayout::parse(descriptor)?, mode)?,
        None => reader.read_rows(mode)?,
    };
    Ok(rows)
}

fn render_values(values: &[i32], json: bool) -> Result<String, anyhow::Error> {
    if json {
        return Ok(serde_json::to_string(values)? + "\n");
    }
    Ok(values.iter().map(|value| format!("{value}\n")).collect())
}

fn render_rows(rows: &[Vec<i32>], json: bool) -> Result<String, anyhow::Error> {
    if json {
        return Ok(serde_json::to_string(rows)? + "\n");
    }
    Ok(rows
        .iter()
        .map(|row| {
            let fields: Vec<String> = row.iter().map(ToString::to_string).collect();
            fields.join(" ") + "\n"
        })
        .collect())
}
