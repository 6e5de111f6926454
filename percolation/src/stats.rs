//! Estimate the percolation threshold by Monte Carlo simulation.
//! # Example
//! ```rust
//! use percolation::stats::*;
//! let config = Config::new(20, 30, 4_324);
//! let stats = PercolationStats::with_config(&config).unwrap();
//! assert!(0f64 < stats.mean() && stats.mean() < 1f64);
//! let summary = stats.summary();
//! assert!(summary.confidence_lo <= summary.confidence_hi);
//! ```
use crate::error::{PercolationError, Result};
use crate::grid::Percolation;
use definitions::{Site, Summary, CONFIDENCE_95};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    grid_size: usize,
    trials: usize,
    seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: 42,
        }
    }
}

impl Config {
    pub fn new(grid_size: usize, trials: usize, seed: u64) -> Self {
        Self {
            grid_size,
            trials,
            seed,
        }
    }
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    // The fraction of the open sites at the moment each trial percolated.
    results: Vec<f64>,
}

fn validate(grid_size: usize, trials: usize) -> Result<()> {
    if grid_size == 0 {
        Err(PercolationError::InvalidArgument(
            "grid size should be positive",
        ))
    } else if trials == 0 {
        Err(PercolationError::InvalidArgument(
            "number of trials should be positive",
        ))
    } else {
        Ok(())
    }
}

impl PercolationStats {
    /// Perform `trials` independent experiments on a `grid_size`-by-`grid_size` grid,
    /// with a randomly chosen seed.
    pub fn new(grid_size: usize, trials: usize) -> Result<Self> {
        let seed: u64 = rand::random();
        Self::with_config(&Config::new(grid_size, trials, seed))
    }
    /// Perform the experiments in parallel. The i-th trial draws from its own
    /// generator seeded by `seed + i`, so the result does not depend on the number of threads.
    pub fn with_config(config: &Config) -> Result<Self> {
        validate(config.grid_size, config.trials)?;
        let grid_size = config.grid_size;
        debug!(
            "STATS\tStart\t{}\t{}\t{}",
            grid_size, config.trials, config.seed
        );
        let results = (0..config.trials)
            .into_par_iter()
            .map(|i| -> Result<f64> {
                let seed = config.seed.wrapping_add(i as u64);
                let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
                let opened = run_trial(grid_size, &mut rng)?;
                let fraction = opened as f64 / (grid_size * grid_size) as f64;
                debug!("TRIAL\t{}\t{}\t{:.4}", i, opened, fraction);
                Ok(fraction)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { grid_size, results })
    }
    /// Perform the experiments one by one, drawing every site from `rng`.
    pub fn with_rng<R: Rng>(grid_size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        validate(grid_size, trials)?;
        let mut results = Vec::with_capacity(trials);
        for i in 0..trials {
            let opened = run_trial(grid_size, rng)?;
            let fraction = opened as f64 / (grid_size * grid_size) as f64;
            debug!("TRIAL\t{}\t{}\t{:.4}", i, opened, fraction);
            results.push(fraction);
        }
        Ok(Self { grid_size, results })
    }
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
    pub fn trials(&self) -> usize {
        self.results.len()
    }
    pub fn results(&self) -> &[f64] {
        &self.results
    }
    /// Sample mean of percolation threshold.
    pub fn mean(&self) -> f64 {
        self.results.iter().sum::<f64>() / self.results.len() as f64
    }
    /// Sample standard deviation of percolation threshold. NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        if self.results.len() == 1 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sq_sum = self
            .results
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>();
        (sq_sum / (self.results.len() - 1) as f64).sqrt()
    }
    fn margin(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.results.len() as f64).sqrt()
    }
    /// Low endpoint of 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.margin()
    }
    /// High endpoint of 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.margin()
    }
    pub fn summary(&self) -> Summary {
        Summary::new(self.grid_size, self.trials(), self.mean(), self.stddev())
    }
}

/// Open uniformly random sites of a fresh grid until it percolates, and return the grid.
pub fn percolate<R: Rng>(grid_size: usize, rng: &mut R) -> Result<Percolation> {
    let mut grid = Percolation::new(grid_size)?;
    while !grid.percolates() {
        let site = random_site(grid_size, rng);
        if !grid.is_open(site.row, site.col)? {
            grid.open(site.row, site.col)?;
        } else {
            trace!("REDRAW\t{}", site);
        }
    }
    Ok(grid)
}

/// Draw a site uniformly from a `grid_size`-by-`grid_size` grid.
pub fn random_site<R: Rng>(grid_size: usize, rng: &mut R) -> Site {
    let row = rng.gen_range(1..=grid_size);
    let col = rng.gen_range(1..=grid_size);
    Site::new(row, col)
}

/// Return the number of the sites opened until a fresh grid percolates.
pub fn run_trial<R: Rng>(grid_size: usize, rng: &mut R) -> Result<usize> {
    percolate(grid_size, rng).map(|grid| grid.number_of_open_sites())
}
