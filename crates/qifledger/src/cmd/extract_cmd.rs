//! qif-extract - Read accounts, transactions and categories from a QIF file.
//!
//! # Usage
//!
//! ```bash
//! qif-extract export.qif
//! qif-extract export.qif --date-format eu --currency EUR
//! qif-extract export.qif --format json > export.json
//! ```

use crate::cmd::completions::ShellType;
use crate::report;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use qifledger_core::{Currency, FormatConfig};
use qifledger_parser::{parse_file, DateFormat, ParserConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Output format for the report.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Register-style text listing (default)
    #[default]
    Text,
    /// JSON document for other tools
    Json,
}

/// Order of day, month and year in date fields.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum DateOrder {
    /// Month/day/year
    #[default]
    Us,
    /// Day/month/year
    Eu,
    /// Year/month/day
    Ymd,
}

impl From<DateOrder> for DateFormat {
    fn from(order: DateOrder) -> Self {
        match order {
            DateOrder::Us => Self::Us,
            DateOrder::Eu => Self::Eu,
            DateOrder::Ymd => Self::Ymd,
        }
    }
}

/// Read a QIF export and print its accounts, registers and categories.
#[derive(Parser, Debug)]
#[command(name = "qif-extract")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,

    /// The QIF file to read
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Order of day, month and year in date fields
    #[arg(short, long, value_enum, default_value_t = DateOrder::Us)]
    pub date_format: DateOrder,

    /// Currency of every amount in the file
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Payee that marks opening-balance records
    #[arg(long, default_value = qifledger_parser::DEFAULT_OPENING_BALANCE_PAYEE)]
    pub opening_balance_payee: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show debug logging from the parser
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the summary on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Main entry point for the extract command.
pub fn main() -> ExitCode {
    main_with_name("qif-extract")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    // Handle shell completion generation
    if let Some(shell) = args.generate_completions {
        crate::cmd::completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    // File is required when not generating completions
    let Some(ref file) = args.file else {
        eprintln!("error: FILE is required");
        eprintln!("For more information, try '--help'");
        return ExitCode::from(2);
    };

    let currency = match Currency::new(&args.currency) {
        Ok(currency) => currency,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if args.verbose {
        init_logging();
    }

    let config = ParserConfig::builder()
        .date_format(args.date_format.into())
        .currency(currency)
        .opening_balance_payee(args.opening_balance_payee.as_str())
        .build();

    match run(&args, file, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    }
}

fn run(args: &Args, file: &Path, config: &ParserConfig) -> Result<()> {
    let result = parse_file(file, config)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            report::write_text_report(&result, &FormatConfig::default(), &mut stdout)?;
        }
        OutputFormat::Json => {
            writeln!(stdout, "{}", report::to_json(&result)?)?;
        }
    }
    stdout.flush()?;

    if !args.quiet {
        let mut stderr = io::stderr().lock();
        report::print_summary(&result, &mut stderr)?;
    }

    Ok(())
}
