//! Percolation -- estimate the percolation threshold of an N-by-N grid.
//!
//! - [find_union](find_union): weighted quick-union with full path compression.
//! - [grid](grid): the N-by-N grid of blocked/open sites.
//! - [stats](stats): Monte Carlo driver collecting the open-site fraction of independent trials.
pub mod error;
pub mod find_union;
pub mod grid;
pub mod stats;
#[macro_use]
extern crate log;

pub use error::{PercolationError, Result};
pub use grid::Percolation;
pub use stats::PercolationStats;
