//! mts — run a train manifest across a single shared crossing.
//!
//! ```text
//! mts run trains.txt                     # writes output.txt and echoes it
//! mts run trains.txt --csv out/ --unit-ms 10 -v
//! mts generate --count 12 --seed 7 > trains.txt
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use mts_core::{Direction, ManifestRng, TimeScale};
use mts_dispatch::{DispatchBuilder, DispatchPolicy, RunSummary};
use mts_output::{CsvEventWriter, EventLogObserver, EventWriter, TeeWriter, TextLogWriter};
use mts_schedule::{load_manifest, MalformedPolicy};

/// Command-line arguments.
#[derive(Parser)]
#[command(about = "Dispatch trains across a single shared crossing")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a manifest and write the event log.
    Run(RunArgs),
    /// Print a random manifest to stdout.
    Generate(GenerateArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Manifest file: one `DIRECTION LOADING CROSSING` row per train.
    manifest: PathBuf,

    /// Text event log.
    #[arg(long, default_value = "output.txt")]
    out: PathBuf,

    /// Also write `events.csv` into this directory.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write `events.db` into this directory.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: Option<PathBuf>,

    /// Milliseconds per manifest time unit.
    #[arg(long, default_value_t = 100)]
    unit_ms: u64,

    /// Consecutive same-direction crossings before the other side is forced.
    #[arg(long, default_value_t = 2)]
    starvation_limit: u32,

    /// Direction served on the very first equal-priority tie.
    #[arg(long, default_value = "west")]
    tie_default: Direction,

    /// Drop malformed manifest rows instead of failing.
    #[arg(long)]
    skip_malformed: bool,

    /// Do not echo event lines to stdout.
    #[arg(long, short)]
    quiet: bool,
}

#[derive(clap::Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 10)]
    count: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 10)]
    max_loading: u32,

    #[arg(long, default_value_t = 10)]
    max_crossing: u32,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Run(args) => run(args),
        Command::Generate(args) => generate(args),
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_thread_level(LevelFilter::Debug).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to initialise logging")
}

fn run(args: RunArgs) -> Result<()> {
    let policy = if args.skip_malformed { MalformedPolicy::Skip } else { MalformedPolicy::Fail };
    let trains = load_manifest(&args.manifest, policy)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;
    info!("loaded {} trains from {}", trains.len(), args.manifest.display());

    let dispatch = DispatchBuilder::new(trains)
        .time_scale(TimeScale::from_millis(args.unit_ms))
        .policy(DispatchPolicy { starvation_limit: args.starvation_limit, tie_default: args.tie_default })
        .build()?;

    let text = TextLogWriter::create(&args.out, !args.quiet)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let mut writer: Box<dyn EventWriter + Send> = Box::new(text);
    if let Some(dir) = &args.csv {
        let csv = CsvEventWriter::new(dir).with_context(|| format!("failed to create CSV in {}", dir.display()))?;
        writer = Box::new(TeeWriter::new(writer, csv));
    }
    #[cfg(feature = "sqlite")]
    if let Some(dir) = &args.sqlite {
        let db = mts_output::SqliteEventWriter::new(dir)
            .with_context(|| format!("failed to create SQLite db in {}", dir.display()))?;
        writer = Box::new(TeeWriter::new(writer, db));
    }

    let mut observer = EventLogObserver::new(writer);
    let summary = dispatch.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("failed to write event log");
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    eprintln!();
    eprintln!("=== {} of {} trains crossed in {} ===", summary.finished, summary.total, summary.elapsed);
    eprintln!("East: {}  |  West: {}", summary.east_crossings, summary.west_crossings);
    eprintln!(
        "Longest same-direction run: {}  |  Starvation overrides: {}",
        summary.longest_run, summary.starvation_overrides
    );
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut rng = ManifestRng::new(args.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for spec in rng.manifest(args.count, args.max_loading, args.max_crossing) {
        writeln!(out, "{} {} {}", spec.code(), spec.loading_units, spec.crossing_units)?;
    }
    Ok(())
}
