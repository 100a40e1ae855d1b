//! cohortcsv - load and inspect the cohort dataset

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use termcolor::ColorChoice;

use cohortcsv::config::{LoadConfig, OutputFormat, DEFAULT_SOURCE};
use cohortcsv::logging::{init_logging, LogConfig};
use cohortcsv::output::render_to_stdout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Json,
    Table,
    Summary,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Summary => OutputFormat::Summary,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Auto,
    Always,
    Never,
}

impl From<CliColor> for ColorChoice {
    fn from(c: CliColor) -> Self {
        match c {
            CliColor::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            CliColor::Auto | CliColor::Never => ColorChoice::Never,
            CliColor::Always => ColorChoice::Always,
        }
    }
}

/// Load the COVID-19 cohort dataset into typed records
#[derive(Parser, Debug)]
#[command(name = "cohortcsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file (.csv, .tsv, .txt or .json)
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: CliOutputFormat,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Field delimiter for delimited sources (single ASCII character)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Emit a trace event for every raw row read
    #[arg(long)]
    trace_rows: bool,

    /// When to use colours
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColor,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Row traces are only visible at trace level
    let verbosity = if cli.trace_rows {
        cli.verbose.max(3)
    } else {
        cli.verbose
    };
    let log_config =
        LogConfig::from_verbosity(verbosity).with_ansi(std::io::stderr().is_terminal());
    init_logging(&log_config).context("Failed to initialize logging")?;

    let mut config = LoadConfig::new(cli.source)
        .with_trace_rows(cli.trace_rows)
        .with_output_format(cli.format.into())
        .with_compact_json(cli.compact)
        .with_color(cli.color.into());

    if let Some(delimiter) = cli.delimiter {
        if !delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got {:?}", delimiter);
        }
        config = config.with_delimiter(delimiter as u8);
    }

    let records = cohortcsv::load(&config)
        .with_context(|| format!("Failed to load {}", config.source.display()))?;

    render_to_stdout(
        &records,
        &config.source,
        config.output_format,
        config.compact_json,
        config.color,
    )
}
