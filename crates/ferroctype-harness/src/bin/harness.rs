//! CLI entrypoint for ferroctype conformance tooling.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ferroctype_harness::capture::capture_host_fixture_set;
use ferroctype_harness::domain;
use ferroctype_harness::report::{build_report, render_markdown};
use ferroctype_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, now_utc, validate_log_file,
};
use ferroctype_harness::verify::verify_fixture_set;
use ferroctype_harness::{FixtureSet, HarnessError};

/// CLI for ferroctype conformance capture/verify tooling.
#[derive(Debug, Parser)]
#[command(name = "ferroctype-harness")]
#[command(about = "Differential conformance tooling for ferroctype")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Supported CLI subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host libc classification behavior into a fixture file.
    Capture {
        /// Output fixture path.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the ferroctype implementation against a captured fixture file.
    Verify {
        /// Input fixture path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output markdown report path.
        #[arg(long)]
        report_md: PathBuf,
        /// Output json report path.
        #[arg(long)]
        report_json: PathBuf,
        /// Optional JSONL log output path; an artifact index is written
        /// alongside it.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Campaign label stamped on the report.
        #[arg(long, default_value = "conformance")]
        campaign: String,
    },
    /// Print one symbol's results over an integer range.
    Sweep {
        /// Symbol name (e.g. isalnum).
        #[arg(long)]
        symbol: String,
        /// Inclusive lower bound.
        #[arg(long, default_value_t = domain::SWEEP_MIN)]
        min: i32,
        /// Inclusive upper bound.
        #[arg(long, default_value_t = domain::SWEEP_MAX)]
        max: i32,
    },
    /// Validate a JSONL log file against the structured log schema.
    ValidateLog {
        /// Log file path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("harness: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` for a run that completed but found failures.
fn run(command: Command) -> Result<bool, HarnessError> {
    match command {
        Command::Capture { output } => {
            let fixture = capture_host_fixture_set()?;
            fixture.write_file(&output)?;
            println!(
                "captured {} cases across {} symbols to {}",
                fixture.cases.len(),
                domain::SYMBOLS.len(),
                output.display()
            );
            Ok(true)
        }
        Command::Verify {
            fixture,
            report_md,
            report_json,
            log,
            campaign,
        } => {
            let set = FixtureSet::from_file(&fixture)?;
            let results = verify_fixture_set(&set)?;
            let report = build_report(&campaign, &set.family, &now_utc(), &results);
            std::fs::write(&report_md, render_markdown(&report))?;
            std::fs::write(&report_json, report.to_json()?)?;

            if let Some(log_path) = log {
                write_run_log(&log_path, &campaign, &report, &[&report_md, &report_json])?;
            }

            println!(
                "{}/{} cases passed ({:.2}%)",
                report.summary.passed,
                report.summary.total_cases,
                report.summary.pass_rate_percent
            );
            for failure in &report.failures {
                eprintln!(
                    "FAIL {}: expected {}, got {}",
                    failure.case_name, failure.expected, failure.actual
                );
            }
            Ok(report.all_passed())
        }
        Command::Sweep { symbol, min, max } => {
            let sym = domain::lookup(&symbol)?;
            for c in min..=max {
                println!("{c}\t{}", sym.eval(c));
            }
            Ok(true)
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            if errors.is_empty() {
                println!("{lines} log lines valid");
                return Ok(true);
            }
            for error in &errors {
                eprintln!("{error}");
            }
            Err(HarnessError::InvalidLog(errors.len()))
        }
    }
}

fn write_run_log(
    log_path: &PathBuf,
    campaign: &str,
    report: &ferroctype_harness::ConformanceReport,
    artifacts: &[&PathBuf],
) -> Result<(), HarnessError> {
    let run_id = format!("run-{}", std::process::id());
    let mut emitter = LogEmitter::to_file(log_path, campaign, &run_id)?;
    emitter.emit(LogLevel::Info, "verify_start")?;
    for failure in &report.failures {
        emitter.emit_entry(
            LogEntry::new("", LogLevel::Error, "case_failed")
                .with_symbol(&failure.symbol)
                .with_case(failure.input, failure.expected, failure.actual)
                .with_outcome(Outcome::Fail),
        )?;
    }
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "verify_done")
            .with_outcome(if report.all_passed() {
                Outcome::Pass
            } else {
                Outcome::Fail
            })
            .with_artifacts(
                artifacts
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            ),
    )?;
    emitter.flush()?;

    let mut index = ArtifactIndex::new(campaign, &run_id);
    index.add_file(log_path, "log")?;
    for artifact in artifacts {
        index.add_file(artifact, "report")?;
    }
    let index_path = log_path.with_extension("index.json");
    std::fs::write(index_path, index.to_json()?)?;
    Ok(())
}
