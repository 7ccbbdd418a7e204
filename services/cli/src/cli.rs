use crate::infra::{read_drive, read_drive_batch, write_json};
use crate::report::{render_batch_line, render_summary};
use clap::{Args, Parser, Subcommand};
use drive_insights::analysis::{analyze, analyze_batch};
use drive_insights::config::AppConfig;
use drive_insights::error::AppError;
use drive_insights::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "drive-insights",
    about = "Score completed trips and explain the result from the command line",
    version
)]
struct Cli {
    /// Override the configured log filter (e.g. `debug` or `drive_insights=trace`)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single trip and print its scores
    Analyze(AnalyzeArgs),
    /// Analyze a JSON array of trips and print one line per trip
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON file holding one drive record
    pub(crate) input: PathBuf,
    /// Write the full analysis result as pretty-printed JSON to this path
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
    /// Also print statistics, insights and recommendations
    #[arg(long)]
    pub(crate) details: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Path to a JSON file holding an array of drive records
    pub(crate) input: PathBuf,
    /// Write the successful analysis results as a JSON array to this path
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }

    telemetry::init(&config.telemetry)?;
    info!(log_level = %config.telemetry.log_level, "drive analysis starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Analyze(args) => run_analyze(args, &mut out),
        Command::Batch(args) => run_batch(args, &mut out),
    }
}

pub(crate) fn run_analyze<W: Write>(args: AnalyzeArgs, out: &mut W) -> Result<(), AppError> {
    let AnalyzeArgs {
        input,
        output,
        details,
    } = args;

    let drive = read_drive(&input)?;
    let result = analyze(&drive)?;
    render_summary(out, &result, details)?;

    if let Some(path) = output {
        write_json(&path, &result)?;
        info!(path = %path.display(), "analysis written");
    }

    Ok(())
}

pub(crate) fn run_batch<W: Write>(args: BatchArgs, out: &mut W) -> Result<(), AppError> {
    let BatchArgs { input, output } = args;

    let drives = read_drive_batch(&input)?;
    let outcomes = analyze_batch(&drives);

    for (index, outcome) in outcomes.iter().enumerate() {
        render_batch_line(out, index, outcome)?;
    }

    if let Some(path) = output {
        let succeeded: Vec<_> = outcomes.iter().filter_map(|o| o.as_ref().ok()).collect();
        write_json(&path, &succeeded)?;
        info!(path = %path.display(), trips = succeeded.len(), "batch results written");
    }

    let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    if failed > 0 {
        return Err(AppError::Batch {
            failed,
            total: outcomes.len(),
        });
    }

    Ok(())
}
