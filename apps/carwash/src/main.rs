//! carwash — single-bay car wash queue simulator.
//!
//! Runs the engine over the doubling duration sweep (30, 60, 120, … up to
//! `-m MINUTES`) and prints one report row per run.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`);
//! stdout carries only the report.

mod args;


use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cw_output::{CsvReportWriter, JsonReportWriter, TableWriter, write_report};
use cw_sim::{SimulationResult, WashObserver, WashSimBuilder};

use args::{Args, ReportFormat};

// ── Observer: per-run progress log ────────────────────────────────────────────

struct ProgressLogger {
    runs:     usize,
    last_end: Instant,
}

impl ProgressLogger {
    fn new() -> Self {
        Self { runs: 0, last_end: Instant::now() }
    }
}

impl WashObserver for ProgressLogger {
    fn on_run_end(&mut self, result: &SimulationResult) {
        self.runs += 1;
        info!(
            run        = self.runs,
            duration   = result.duration,
            cars       = result.total_cars,
            elapsed_ms = self.last_end.elapsed().as_millis() as u64,
            "run finished"
        );
        self.last_end = Instant::now();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_lenient(std::env::args_os());
    if args.help {
        args.print_usage()?;
        return Ok(());
    }

    // 1. Resolve configuration.
    let config = args.sweep_config();
    info!(max_minutes = config.max_minutes, seed = ?config.seed, "starting sweep");

    // 2. Build the engine.
    let mut sim = WashSimBuilder::new().maybe_seed(config.seed).build();

    // 3. Run the sweep.
    let t0 = Instant::now();
    let mut progress = ProgressLogger::new();
    let results = sim.run_all_observed(config.max_minutes, &mut progress);
    info!(
        runs       = results.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "sweep complete"
    );

    // 4. Report.
    let stdout = std::io::stdout().lock();
    render(args.format, stdout, &results)?;

    Ok(())
}

fn render<W: Write>(format: ReportFormat, out: W, results: &[SimulationResult]) -> Result<()> {
    match format {
        ReportFormat::Table => write_report(&mut TableWriter::new(out), results)?,
        ReportFormat::Csv   => write_report(&mut CsvReportWriter::new(out), results)?,
        ReportFormat::Json  => write_report(&mut JsonReportWriter::new(out), results)?,
    }
    Ok(())
}
