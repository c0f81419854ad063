//! gas-station — run the queue simulation over a station list and a request
//! log and print the report.
//!
//! ```text
//! gas-station --stations data/stations.txt --requests data/requests.txt --seed 7
//! RUST_LOG=debug gas-station --lang en --csv-dir output/run1
//! ```
//!
//! Report lines go to stdout; diagnostics go to stderr.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gs_core::{FixedJitter, Jitter, MalformedPolicy, SalesAttribution, SeededJitter, SimConfig};
use gs_output::{CsvWriter, Reporter, SimOutputObserver, Vocabulary};
use gs_sim::SimBuilder;
use gs_station::{load_stations_path, read_requests_path};


// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "gas-station", about = "Gas-station queue simulator")]
struct Cli {
    /// Station records: `id capacity fuel [fuel ...]`.
    #[arg(long, default_value = "data/stations.txt")]
    stations: PathBuf,

    /// Request records: `HH:MM liters fuel [display-id ...]`.
    #[arg(long, default_value = "data/requests.txt")]
    requests: PathBuf,

    /// Built-in report language.
    #[arg(long, default_value = "ru", value_parser = ["ru", "en"])]
    lang: String,

    /// JSON vocabulary file; overrides `--lang`.
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Jitter seed.  Omit for a nondeterministic run.
    #[arg(long)]
    seed: Option<u64>,

    /// Use this fixed jitter instead of a random one.  Excludes `--seed`.
    #[arg(long, conflicts_with = "seed", allow_hyphen_values = true, value_parser = clap::value_parser!(i32).range(-1..=1))]
    jitter: Option<i32>,

    /// Date the `HH:MM` arrivals belong to (YYYY-MM-DD).  Default: today.
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, default_value_t = 10)]
    liters_per_minute: u32,

    #[arg(long, value_enum, default_value_t = Attribution::TriggeringRequest)]
    sales_attribution: Attribution,

    /// Stop at the first malformed request instead of skipping it.
    #[arg(long)]
    abort_on_malformed: bool,

    /// Also write `events.csv` and `sales.csv` into this directory.
    #[arg(long)]
    csv_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Attribution {
    TriggeringRequest,
    ServedClient,
}

impl From<Attribution> for SalesAttribution {
    fn from(a: Attribution) -> Self {
        match a {
            Attribution::TriggeringRequest => SalesAttribution::TriggeringRequest,
            Attribution::ServedClient => SalesAttribution::ServedClient,
        }
    }
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            date:              self.date.unwrap_or_else(|| Local::now().date_naive()),
            seed:              self.seed,
            liters_per_minute: self.liters_per_minute,
            sales_attribution: self.sales_attribution.into(),
            on_malformed:      if self.abort_on_malformed {
                MalformedPolicy::Abort
            } else {
                MalformedPolicy::Skip
            },
        }
    }

    fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocab {
            Some(path) => Vocabulary::from_json_path(path)
                .with_context(|| format!("loading vocabulary {}", path.display())),
            None => Ok(Vocabulary::for_lang(&self.lang).unwrap_or_default()),
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let vocab = cli.vocabulary()?;

    // 1. Stations (all-or-nothing) and the lazy request stream.
    let registry = load_stations_path(&cli.stations)
        .with_context(|| format!("loading stations from {}", cli.stations.display()))?;
    let requests = read_requests_path(&cli.requests)
        .with_context(|| format!("opening requests {}", cli.requests.display()))?;
    tracing::info!(stations = registry.len(), date = %config.date, "loaded stations");

    // 2. Sim.
    let jitter: Box<dyn Jitter> = match cli.jitter {
        Some(j) => Box::new(FixedJitter(j)),
        None => Box::new(SeededJitter::from_seed(config.seed)),
    };
    let mut sim = SimBuilder::new(config, registry).jitter(jitter).build()?;

    // 3. Observers and run.
    let mut reporter = Reporter::new(vocab);
    match cli.csv_dir.as_deref() {
        Some(dir) => run_with_csv(&mut sim, requests, &mut reporter, dir)?,
        None => sim.run(requests, &mut reporter)?,
    }

    // 4. Report.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in reporter.lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    let state = sim.state();
    tracing::info!(
        rejected = state.rejected(),
        skipped = state.skipped(),
        total_liters = state.ledger().total(),
        "done"
    );
    Ok(())
}

fn run_with_csv<I, J>(
    sim:      &mut gs_sim::Sim<J>,
    requests: I,
    reporter: &mut Reporter,
    dir:      &Path,
) -> Result<()>
where
    I: IntoIterator<Item = gs_station::StationResult<gs_station::FuelRequest>>,
    J: Jitter,
{
    let writer = CsvWriter::new(dir)
        .with_context(|| format!("creating CSV output in {}", dir.display()))?;
    let mut csv_obs = SimOutputObserver::new(writer);
    sim.run(requests, &mut (reporter, &mut csv_obs))?;

    if let Some(e) = csv_obs.take_error() {
        return Err(e).context("writing CSV output");
    }
    Ok(())
}
