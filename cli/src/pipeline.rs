//! Pipelines -- one experiment from the parameters to the report.
//!
//! An experiment is described by [PipelineConfig](PipelineConfig), either built from the
//! command line or read from a TOML profile such as
//! ```toml
//! grid_size = 200
//! trials = 100
//! seed = 42
//! threads = 4
//! verbose = 1
//! output = "json"
//! ```
use definitions::Summary;
use log::*;
use percolation::stats::{Config, PercolationStats};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The three-line report.
    #[default]
    Text,
    /// A JSON object.
    Json,
}

fn default_seed() -> u64 {
    Config::default().seed()
}

fn default_threads() -> usize {
    1
}

/// The configuration of the experiment.
/// Only `grid_size` and `trials` are mandatory in a profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    grid_size: usize,
    trials: usize,
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default = "default_threads")]
    threads: usize,
    #[serde(default)]
    verbose: usize,
    #[serde(default)]
    output: OutputFormat,
}

impl PipelineConfig {
    pub fn new(
        grid_size: usize,
        trials: usize,
        seed: u64,
        threads: usize,
        verbose: usize,
        output: OutputFormat,
    ) -> Self {
        Self {
            grid_size,
            trials,
            seed,
            threads,
            verbose,
            output,
        }
    }
    pub fn from_toml(profile: &str) -> std::io::Result<Self> {
        toml::from_str(profile)
            .map_err(|why| std::io::Error::new(std::io::ErrorKind::InvalidData, why))
    }
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let profile = std::fs::read_to_string(path)?;
        Self::from_toml(&profile)
    }
    /// Raise the verbosity to `verbose` if it is lower.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = self.verbose.max(verbose);
        self
    }
    pub fn verbose(&self) -> usize {
        self.verbose
    }
    pub fn stats_config(&self) -> Config {
        Config::new(self.grid_size, self.trials, self.seed)
    }
}

pub fn init_logger(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

pub fn set_threads(threads: usize) {
    debug!("Set Threads\t{}", threads);
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        debug!("{:?} The global pool is already running.", why);
    }
}

fn to_io_error(why: percolation::PercolationError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, why)
}

pub fn write_summary<W: Write>(
    wtr: &mut W,
    summary: &Summary,
    output: OutputFormat,
) -> std::io::Result<()> {
    match output {
        OutputFormat::Text => writeln!(wtr, "{}", summary),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *wtr, summary)?;
            writeln!(wtr)
        }
    }
}

/// Run the trials and write the report into `wtr`.
pub fn report<W: Write>(config: &PipelineConfig, wtr: &mut W) -> std::io::Result<()> {
    let stats_config = config.stats_config();
    info!(
        "START\tStats\t{}\t{}",
        stats_config.grid_size(),
        stats_config.trials()
    );
    let stats = PercolationStats::with_config(&stats_config).map_err(to_io_error)?;
    let summary = stats.summary();
    info!("END\tStats\t{:.4}\t{:.4}", summary.mean, summary.stddev);
    write_summary(wtr, &summary, config.output)
}

pub fn run_pipeline(config: &PipelineConfig) -> std::io::Result<()> {
    init_logger(config.verbose);
    set_threads(config.threads);
    let stdout = std::io::stdout();
    let mut wtr = BufWriter::new(stdout.lock());
    report(config, &mut wtr)?;
    wtr.flush()
}

/// Open random sites of a single grid until it percolates, then dump the grid into `wtr`.
/// With `list_sites`, every open site follows as a JSON line.
pub fn show<W: Write>(
    grid_size: usize,
    seed: u64,
    list_sites: bool,
    wtr: &mut W,
) -> std::io::Result<()> {
    let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
    let grid = percolation::stats::percolate(grid_size, &mut rng).map_err(to_io_error)?;
    let opened = grid.number_of_open_sites();
    let fraction = opened as f64 / (grid_size * grid_size) as f64;
    writeln!(wtr, "{}", grid)?;
    writeln!(wtr, "Opened:{}\tFraction:{:.4}", opened, fraction)?;
    if list_sites {
        for site in grid.open_sites() {
            serde_json::to_writer(&mut *wtr, &site)?;
            writeln!(wtr)?;
        }
    }
    Ok(())
}
