//! Fitness CLI - Command-line interface for the fitness tracker
//!
//! Commands:
//! - demo: Summarize the built-in sample packages
//! - process: Summarize sensor packages read from a file or stdin
//! - kinds: List the accepted workout codes and their fields

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fitness_tracker::pipeline::{BatchPolicy, BatchProcessor, BatchReport, RecordFailure};
use fitness_tracker::{
    default_packages, PackageReader, SensorPackage, WorkoutError, WorkoutKind, PRODUCER_NAME,
    TRACKER_VERSION,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Fitness - derive distance, speed and calories from tracker sensor packages
#[derive(Parser)]
#[command(name = "fitness")]
#[command(version = TRACKER_VERSION)]
#[command(about = "Summarize workouts from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    quiet: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in sample packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Summarize sensor packages from a file or stdin
    Process {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Skip invalid packages instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,
    },

    /// List the accepted workout codes
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One report line per workout
    Text,
    /// Newline-delimited JSON (one summary per line)
    Ndjson,
    /// JSON batch report
    Json,
    /// Pretty-printed JSON batch report
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fitness_tracker={level},fitness={level}")));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_timer(fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), FitnessCliError> {
    match cli.command {
        Commands::Demo { output_format } => {
            let packages = default_packages();
            tracing::info!(packages = packages.len(), "running demo batch");
            cmd_summarize(&packages, BatchPolicy::Abort, &output_format)
        }

        Commands::Process {
            input,
            input_format,
            output_format,
            keep_going,
        } => {
            let packages = read_packages(&input, &input_format)?;
            if packages.is_empty() {
                return Err(FitnessCliError::NoPackages);
            }

            let policy = if keep_going {
                BatchPolicy::SkipInvalid
            } else {
                BatchPolicy::Abort
            };
            tracing::info!(packages = packages.len(), ?policy, "processing sensor packages");
            cmd_summarize(&packages, policy, &output_format)
        }

        Commands::Kinds { json } => cmd_kinds(json),
    }
}

fn read_packages(
    input: &Path,
    input_format: &InputFormat,
) -> Result<Vec<SensorPackage>, FitnessCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            tracing::warn!("reading sensor packages from an interactive terminal; end input with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };

    Ok(packages)
}

fn cmd_summarize(
    packages: &[SensorPackage],
    policy: BatchPolicy,
    output_format: &OutputFormat,
) -> Result<(), FitnessCliError> {
    let report = BatchProcessor::with_policy(policy).process(packages);

    print!("{}", format_output(&report, output_format)?);

    if let Some(failure) = report.aborted {
        return Err(FitnessCliError::Aborted(failure));
    }
    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(FitnessCliError::SkippedPackages(report.failures.len()))
    }
}

fn cmd_kinds(json: bool) -> Result<(), FitnessCliError> {
    let kinds: Vec<KindInfo> = WorkoutKind::ALL
        .iter()
        .map(|kind| KindInfo {
            code: kind.code(),
            label: kind.label(),
            fields: kind.field_names().to_vec(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&kinds)?);
    } else {
        println!("{} {}", PRODUCER_NAME, TRACKER_VERSION);
        println!();
        for kind in &kinds {
            println!("  {}  {:<14} [{}]", kind.code, kind.label, kind.fields.join(", "));
        }
    }

    Ok(())
}

// Helper functions

fn format_output(report: &BatchReport, format: &OutputFormat) -> Result<String, FitnessCliError> {
    match format {
        OutputFormat::Text => {
            let lines = report.lines();
            if lines.is_empty() {
                Ok(String::new())
            } else {
                Ok(lines.join("\n") + "\n")
            }
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for record in &report.summaries {
                lines.push(serde_json::to_string(record)?);
            }
            if lines.is_empty() {
                Ok(String::new())
            } else {
                Ok(lines.join("\n") + "\n")
            }
        }
        OutputFormat::Json => Ok(serde_json::to_string(report)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

// Error types

#[derive(Debug)]
enum FitnessCliError {
    Io(io::Error),
    Workout(WorkoutError),
    Json(serde_json::Error),
    NoPackages,
    Aborted(RecordFailure),
    SkippedPackages(usize),
}

impl From<io::Error> for FitnessCliError {
    fn from(e: io::Error) -> Self {
        FitnessCliError::Io(e)
    }
}

impl From<WorkoutError> for FitnessCliError {
    fn from(e: WorkoutError) -> Self {
        FitnessCliError::Workout(e)
    }
}

impl From<serde_json::Error> for FitnessCliError {
    fn from(e: serde_json::Error) -> Self {
        FitnessCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<FitnessCliError> for CliError {
    fn from(e: FitnessCliError) -> Self {
        match e {
            FitnessCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            FitnessCliError::Workout(e) => CliError {
                code: e.kind_code().to_string(),
                message: e.to_string(),
                hint: hint_for(e.kind_code()),
            },
            FitnessCliError::Aborted(failure) => CliError {
                hint: hint_for(&failure.error_code),
                code: failure.error_code,
                message: format!("package {}: {}", failure.index, failure.message),
            },
            FitnessCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            FitnessCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No sensor packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            FitnessCliError::SkippedPackages(count) => CliError {
                code: "PACKAGES_SKIPPED".to_string(),
                message: format!("{} packages failed and were skipped", count),
                hint: Some("Review the warnings above for details".to_string()),
            },
        }
    }
}

fn hint_for(error_code: &str) -> Option<String> {
    match error_code {
        "UNKNOWN_WORKOUT_CODE" | "ARITY_MISMATCH" => {
            Some("Run 'fitness kinds' for accepted codes and fields".to_string())
        }
        "INVALID_READING" => Some("Check the sensor readings in the package".to_string()),
        "PARSE_ERROR" | "JSON_ERROR" => {
            Some("Expected {\"workout_type\": \"RUN\", \"data\": [...]}".to_string())
        }
        _ => None,
    }
}

// Report types

#[derive(serde::Serialize)]
struct KindInfo {
    code: &'static str,
    label: &'static str,
    fields: Vec<&'static str>,
}
