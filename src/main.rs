/// search-validator: behavior validation for multimodal search APIs
///
/// Commands:
/// - run: Execute the case suite against the live index and print results
/// - report: Run the suite once per case file and write a report for each
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use tracing::{debug, info};

use search_validator::cases::load_cases;
use search_validator::cli::{
    RunReport, SuiteOutputWriter, discover_case_files, extract_progress_and_summary,
    extract_simple_failures, write_report,
};
use search_validator::config::{ENV_CASES_FILE, ValidatorConfig};
use search_validator::search::HttpSearchClient;
use search_validator::validation::{CaseValidator, SuitePlan};

#[derive(Parser)]
#[command(name = "search-validator")]
#[command(about = "Validate search API behavior against a declarative case suite", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the case suite against the configured index
    Run {
        /// Case file (overrides TL_CASES_FILE and discovery)
        #[arg(short, long)]
        cases: Option<PathBuf>,

        /// Optional log file path for debug logging
        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// Run the suite for every case file found and write reports
    Report {
        /// Case files or folders containing case files
        paths: Vec<PathBuf>,

        /// Directory that receives the reports
        #[arg(short, long, default_value = "validation_results")]
        out_dir: PathBuf,

        /// Optional log file path for debug logging
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_path = match &cli.command {
        Commands::Run { log, .. } => log.clone(),
        Commands::Report { log, .. } => log.clone(),
    };

    init_logging(log_path.as_ref())?;

    match cli.command {
        Commands::Run { cases, log: _ } => run_suite(cases),
        Commands::Report {
            paths,
            out_dir,
            log: _,
        } => run_reports(paths, out_dir),
    }
}

/// Initialize logging with optional file output
///
/// stdout carries suite output that `report` parses, so logs go to stderr.
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("search-validator.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .init();

        eprintln!("📝 Debug logging enabled: {:?}", log_file);
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn run_suite(cases_override: Option<PathBuf>) -> Result<ExitCode> {
    let config = ValidatorConfig::from_env().with_cases_path(cases_override);

    let (cases_path, cases) = load_cases(&config).context("Failed to load test cases")?;
    info!("📂 Loaded {} case(s) from {}", cases.len(), cases_path.display());

    let index_id = config.require_index_id()?.to_string();
    let client = HttpSearchClient::new(&config.api).context("Failed to build search client")?;
    debug!("🌐 Searching {} on index {}", client.search_url(), index_id);

    let plan = SuitePlan::from_cases(&cases);
    let validator = CaseValidator::new(client, index_id, config);

    let stdout = io::stdout();
    let mut output = SuiteOutputWriter::new(stdout.lock(), plan.len());
    let outcome = validator.run_suite(&plan, |report| output.case_finished(report))?;
    output.finish(&outcome)?;

    Ok(if outcome.failed() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_reports(paths: Vec<PathBuf>, out_dir: PathBuf) -> Result<ExitCode> {
    let case_files = discover_case_files(&paths);
    if case_files.is_empty() {
        println!(
            "No JSON files found. Provide a file or folder:\n  \
             search-validator report /path/to/cases.json\n  \
             search-validator report /path/to/folder_with_json"
        );
        return Ok(ExitCode::FAILURE);
    }

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let include_full_output = ValidatorConfig::from_env().include_full_output;
    let exe = std::env::current_exe().context("Failed to locate the search-validator binary")?;

    let mut generated = Vec::with_capacity(case_files.len());
    for cases_path in case_files {
        info!("🚀 Running suite for {}", cases_path.display());
        let start = Local::now();
        let child = Command::new(&exe)
            .arg("run")
            .env(ENV_CASES_FILE, &cases_path)
            .output()
            .with_context(|| format!("Failed to run suite for {}", cases_path.display()))?;

        let stdout = String::from_utf8_lossy(&child.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&child.stderr).into_owned();
        let failures = extract_simple_failures(&format!("{}\n{}", stdout, stderr));
        let (progress, summary) = extract_progress_and_summary(&stdout);
        let end = Local::now();

        // Echo compact lines to terminal
        if !progress.is_empty() {
            println!("{}", progress);
        }
        if !summary.is_empty() {
            println!("{}", summary);
        }

        let report = RunReport {
            cases_path,
            start,
            end,
            progress,
            summary,
            failures,
            stdout,
            stderr,
        };
        let report_path = write_report(&out_dir, &report, include_full_output)?;
        println!("Saved results to {}", report_path.display());
        generated.push(report_path);
    }

    println!("\nGenerated reports:");
    for path in &generated {
        println!("- {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
