//! Workout CLI - Command-line interface for Synheart Workout
//!
//! Commands:
//! - demo: Ingest the sample packet and print reports for the demo sessions (default)
//! - report: Render one training record from a file or stdin
//! - packet: Run raw tracker packets through the ingestion stub

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use synheart_workout::pipeline::DEMO_PACKET;
use synheart_workout::schema::{process_packet, Packet, TrainingRecord, ValidationError};
use synheart_workout::{demo_report, ComputeError, MetricsEngine, ReportFormatter, WORKOUT_VERSION};

/// Workout - On-device training metrics
#[derive(Parser)]
#[command(name = "workout")]
#[command(author = "Synheart AI Inc")]
#[command(version = WORKOUT_VERSION)]
#[command(about = "Compute distance, speed and calories for a training session", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest the sample packet and print reports for the demo sessions
    Demo,

    /// Render one training record
    Report {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Run raw tracker packets through the ingestion stub
    Packet {
        /// Raw packet strings, e.g. "20250628 12:28:00,5000"
        #[arg(required = true)]
        raw: Vec<String>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Fixed-template text report
    Text,
    /// Derived metrics as JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

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

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), WorkoutCliError> {
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd_demo(),
        Commands::Report { input, format } => cmd_report(&input, format),
        Commands::Packet { raw } => cmd_packet(&raw),
    }
}

fn cmd_demo() -> Result<(), WorkoutCliError> {
    let packets = process_packet(DEMO_PACKET, Vec::new());
    debug!(packets = packets.len(), "demo packets ingested");

    println!("Packet processed: {}", DEMO_PACKET);
    println!("Processing packet:");
    print!("{}", demo_report());
    Ok(())
}

fn cmd_report(input: &Path, format: OutputFormat) -> Result<(), WorkoutCliError> {
    let input_data = read_input(input)?;
    let record: TrainingRecord = serde_json::from_str(&input_data)?;
    record.validate()?;

    match format {
        OutputFormat::Text => {
            print!("{}", ReportFormatter::new().format(&record));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let session = record.to_session()?;
            let metrics = MetricsEngine::new().derive(&session);
            let output = match format {
                OutputFormat::JsonPretty => serde_json::to_string_pretty(&metrics)?,
                _ => serde_json::to_string(&metrics)?,
            };
            println!("{}", output);
        }
    }

    Ok(())
}

fn cmd_packet(raw: &[String]) -> Result<(), WorkoutCliError> {
    let packets = raw
        .iter()
        .fold(Vec::new(), |packets, line| process_packet(line, packets));

    for packet in &packets {
        let output = PacketOutput {
            timestamp: packet.timestamp()?.format("%Y-%m-%dT%H:%M:%S").to_string(),
            packet,
        };
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}

// Helper functions

fn read_input(input: &Path) -> Result<String, WorkoutCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

#[derive(serde::Serialize)]
struct PacketOutput<'a> {
    #[serde(flatten)]
    packet: &'a Packet,
    timestamp: String,
}

// Error types

#[derive(Debug)]
enum WorkoutCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    Validation(ValidationError),
}

impl From<io::Error> for WorkoutCliError {
    fn from(e: io::Error) -> Self {
        WorkoutCliError::Io(e)
    }
}

impl From<ComputeError> for WorkoutCliError {
    fn from(e: ComputeError) -> Self {
        WorkoutCliError::Compute(e)
    }
}

impl From<serde_json::Error> for WorkoutCliError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutCliError::Json(e)
    }
}

impl From<ValidationError> for WorkoutCliError {
    fn from(e: ValidationError) -> Self {
        WorkoutCliError::Validation(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutCliError> for CliError {
    fn from(e: WorkoutCliError) -> Self {
        match e {
            WorkoutCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WorkoutCliError::Compute(ComputeError::UnknownTrainingType(t)) => CliError {
                code: "UNKNOWN_TRAINING_TYPE".to_string(),
                message: format!("Unknown training type: {}", t),
                hint: Some("Use Running, Walking or Swimming, or --format text".to_string()),
            },
            WorkoutCliError::Compute(e) => CliError {
                code: "COMPUTE_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax and required fields".to_string()),
            },
            WorkoutCliError::Validation(e) => CliError {
                code: "VALIDATION_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Durations, weight and height must be non-negative".to_string()),
            },
        }
    }
}
