//! board-driver: runs the boarding experiments and writes their result files.
//!
//! ```text
//! board-driver [--config exp.json] [--out DIR] [--rows 16 --left 3 --right 3] <COMMAND>
//!
//!   orders            zone score of every seat, one file per policy
//!   history [-n N]    N full histories per policy (replay input)
//!   timing  [-n N]    N total boarding times per policy and load factor
//!   all               orders, one history, and five timings per policy
//! ```
//!
//! Logging goes through `env_logger`; the default filter is `info`.  Set
//! `RUST_LOG=board_sim=trace` together with `--trace` to dump the cabin
//! every tick.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use board_core::{PassengerLoad, SimRng};
use board_output::{
    HistoryFileObserver, TimingFile, boarding_order_file_name, timing_file_name,
    write_boarding_order, write_timing,
};
use board_sim::{BatchSummary, LogObserver, SimBuilder, SimConfig, SimObserver, Simulation, run_batch};
use board_zones::BoardingPolicy;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "board-driver")]
#[command(about = "Compare airplane boarding policies by simulation")]
struct Args {
    /// JSON experiment file holding a `SimConfig`; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for all result files (created if missing)
    #[arg(short, long, default_value = "plane_boarding")]
    out: PathBuf,

    /// Number of seated rows
    #[arg(long)]
    rows: Option<usize>,

    /// Seats left of the aisle
    #[arg(long)]
    left: Option<usize>,

    /// Seats right of the aisle
    #[arg(long)]
    right: Option<usize>,

    /// Seatless buffer rows in front of the cabin
    #[arg(long)]
    dummy_rows: Option<usize>,

    /// Probability that a passenger carries a bag
    #[arg(long)]
    baggage_share: Option<f64>,

    /// Master seed; drawn from OS entropy and logged when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only these policies (comma separated); default is all of them
    #[arg(short, long, value_delimiter = ',')]
    policy: Vec<BoardingPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the boarding-order grid of every policy
    Orders,
    /// Run every policy and write the full history of each run
    History {
        #[arg(short = 'n', long, default_value_t = 1)]
        runs: usize,

        /// Load factor in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        proportion: f64,

        /// Dump the cabin every tick at trace level
        #[arg(long)]
        trace: bool,
    },
    /// Measure total boarding times of every policy
    Timing {
        #[arg(short = 'n', long, default_value_t = 5)]
        runs: usize,

        /// Load factors to measure (comma separated)
        #[arg(long, value_delimiter = ',', default_values_t = [0.8, 1.0])]
        proportions: Vec<f64>,
    },
    /// Orders, one history, and five timings at 0.8 and 1.0
    All,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let policies = if args.policy.is_empty() { BoardingPolicy::ALL.to_vec() } else { args.policy.clone() };
    fs::create_dir_all(&args.out)
        .with_context(|| format!("create output directory {}", args.out.display()))?;

    let a = config.aircraft;
    log::info!(
        "cabin {} rows x {}+{} seats ({} buffer rows), seed {}",
        a.rows,
        a.seats_left,
        a.seats_right,
        a.dummy_rows,
        config.seed.unwrap_or_default()
    );

    let start = Instant::now();
    match args.command {
        Command::Orders => save_boarding_orders(&config, &policies, &args.out)?,
        Command::History { runs, proportion, trace } => {
            save_history(&config, &policies, &args.out, runs, proportion, trace)?
        }
        Command::Timing { runs, proportions } => {
            measure_boarding_time(&config, &policies, &args.out, runs, &proportions)?
        }
        Command::All => {
            save_boarding_orders(&config, &policies, &args.out)?;
            save_history(&config, &policies, &args.out, 1, 1.0, false)?;
            measure_boarding_time(&config, &policies, &args.out, 5, &[0.8, 1.0])?;
        }
    }
    log::info!("done in {:.2?}; results in {}", start.elapsed(), args.out.display());
    Ok(())
}

/// Defaults, then the JSON file, then command-line overrides.  Always
/// returns a config with a concrete seed.
fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read experiment file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse experiment file {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    let a = &mut config.aircraft;
    if let Some(rows) = args.rows {
        a.rows = rows;
    }
    if let Some(left) = args.left {
        a.seats_left = left;
    }
    if let Some(right) = args.right {
        a.seats_right = right;
    }
    if let Some(dummy) = args.dummy_rows {
        a.dummy_rows = dummy;
    }
    if let Some(share) = args.baggage_share {
        config.baggage_share = share;
    }
    config.seed = Some(args.seed.or(config.seed).unwrap_or_else(SimRng::entropy_seed));

    config.validate().context("invalid experiment configuration")?;
    Ok(config)
}

fn build(config: &SimConfig, policy: BoardingPolicy, load: PassengerLoad) -> Result<Simulation> {
    SimBuilder::from_config(SimConfig { policy, load, ..config.clone() })
        .build()
        .with_context(|| format!("build simulation for {policy}"))
}

// ── Experiments ───────────────────────────────────────────────────────────────

fn save_boarding_orders(config: &SimConfig, policies: &[BoardingPolicy], out: &Path) -> Result<()> {
    for &policy in policies {
        let sim = build(config, policy, config.load)?;
        log::info!("{policy}\n{}", sim.boarding_order());

        let path = out.join(boarding_order_file_name(policy, &config.aircraft));
        write_boarding_order(&path, sim.boarding_order())
            .with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

fn save_history(
    config:     &SimConfig,
    policies:   &[BoardingPolicy],
    out:        &Path,
    runs:       usize,
    proportion: f64,
    trace:      bool,
) -> Result<()> {
    for &policy in policies {
        let mut sim = build(config, policy, PassengerLoad::Proportion(proportion))?;
        let mut files = HistoryFileObserver::new(out, policy, proportion);
        for _ in 0..runs {
            let total = if trace {
                sim.run_with(&mut Tee(&mut files, LogObserver))?
            } else {
                sim.run_with(&mut files)?
            };
            log::info!("{policy}: boarded in {} ticks", total.0);
        }
        if let Some(e) = files.take_error() {
            bail!("writing {policy} history failed: {e}");
        }
    }
    Ok(())
}

fn measure_boarding_time(
    config:      &SimConfig,
    policies:    &[BoardingPolicy],
    out:         &Path,
    runs:        usize,
    proportions: &[f64],
) -> Result<()> {
    let seed = config.seed.unwrap_or_default();
    for &proportion in proportions {
        for &policy in policies {
            let run_config = SimConfig {
                policy,
                load: PassengerLoad::Proportion(proportion),
                ..config.clone()
            };
            let times = run_batch(&run_config, runs, seed)
                .with_context(|| format!("run {policy} at load {proportion}"))?;
            if let Some(summary) = BatchSummary::from_times(&times) {
                log::info!(
                    "{policy} {proportion}: mean {:.1} (min {}, max {}) over {} runs",
                    summary.mean,
                    summary.min,
                    summary.max,
                    summary.runs
                );
            }

            let path = out.join(timing_file_name(policy, proportion, &config.aircraft));
            let timing = TimingFile { policy: policy.name().to_owned(), proportion, times };
            write_timing(&path, &timing).with_context(|| format!("write {}", path.display()))?;
        }
    }
    Ok(())
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every callback to two observers.
struct Tee<'a, A, B>(&'a mut A, B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<'_, A, B> {
    fn on_reset(&mut self, sim: &Simulation) {
        self.0.on_reset(sim);
        self.1.on_reset(sim);
    }

    fn on_tick_end(&mut self, tick: board_core::Tick, sim: &Simulation) {
        self.0.on_tick_end(tick, sim);
        self.1.on_tick_end(tick, sim);
    }

    fn on_run_end(&mut self, total: board_core::Tick, sim: &Simulation) {
        self.0.on_run_end(total, sim);
        self.1.on_run_end(total, sim);
    }
}
