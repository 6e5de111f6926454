use crate::pipeline::{OutputFormat, PipelineConfig};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "percolation")]
#[command(version = "0.1")]
#[command(about = "Estimate the percolation threshold by Monte Carlo simulation.", long_about = None)]
pub struct Cli {
    /// Debug mode. Repeat to be more verbose.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run independent trials on an N-by-N grid and report the statistics of the threshold.
    Stats(StatsArgs),
    /// Run the experiment written in a TOML profile.
    Pipeline {
        /// Path to the profile.
        #[arg(value_name = "PROFILE")]
        profile: PathBuf,
    },
    /// Open random sites of one grid until it percolates, then print the grid.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Length of a side of the grid.
    #[arg(short = 'n', long, default_value_t = 200)]
    pub grid_size: usize,
    /// Number of the trials.
    #[arg(short = 'T', long, default_value_t = 100)]
    pub trials: usize,
    /// Seed of the pseudorandom number generator.
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,
    /// Number of threads.
    #[arg(short = 't', long, default_value_t = 1)]
    pub threads: usize,
    /// Format of the report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl StatsArgs {
    pub fn to_config(&self, verbose: u8) -> PipelineConfig {
        PipelineConfig::new(
            self.grid_size,
            self.trials,
            self.seed,
            self.threads,
            verbose as usize,
            self.output,
        )
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Length of a side of the grid.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub grid_size: usize,
    /// Seed of the pseudorandom number generator.
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,
    /// Also list the open sites, one JSON object per line.
    #[arg(long)]
    pub sites: bool,
}
