use clap::Parser;
use percolation_cli::commands::{Cli, Commands};
use percolation_cli::pipeline::{self, PipelineConfig};
use std::io::Write;
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let args = Cli::parse();
    match args.command {
        Commands::Stats(stats) => pipeline::run_pipeline(&stats.to_config(args.verbose)),
        Commands::Pipeline { profile } => {
            let config = PipelineConfig::from_path(&profile)?.with_verbose(args.verbose as usize);
            pipeline::run_pipeline(&config)
        }
        Commands::Show(show) => {
            pipeline::init_logger(args.verbose as usize);
            debug!("START\tShow\t{}\t{}", show.grid_size, show.seed);
            let stdout = std::io::stdout();
            let mut wtr = std::io::BufWriter::new(stdout.lock());
            pipeline::show(show.grid_size, show.seed, show.sites, &mut wtr)?;
            wtr.flush()
        }
    }
}
