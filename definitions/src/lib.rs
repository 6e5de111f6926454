//! Definitions -- A tiny interface for the percolation experiments.
//! The library and the command line tool exchange the outcome of an experiment through one structure named [Summary](Summary), which can be dumped as a JSON object.
//! Sites of a grid are passed around as [Site](Site), a 1-indexed coordinate.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// 1-indexed row. The first row is the top of the grid.
    pub row: usize,
    /// 1-indexed column.
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The quantile of the standard normal distribution for a 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// The length of a side of the grid.
    pub grid_size: usize,
    /// The number of the trials.
    pub trials: usize,
    /// Sample mean of the percolation threshold.
    pub mean: f64,
    /// Sample standard deviation of the percolation threshold. NaN if there is only one trial.
    #[serde(deserialize_with = "nan_or_value")]
    pub stddev: f64,
    #[serde(deserialize_with = "nan_or_value")]
    pub confidence_lo: f64,
    #[serde(deserialize_with = "nan_or_value")]
    pub confidence_hi: f64,
}

// JSON has no NaN; serde_json writes it as null.
fn nan_or_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Summary {
    pub fn new(grid_size: usize, trials: usize, mean: f64, stddev: f64) -> Self {
        let margin = CONFIDENCE_95 * stddev / (trials as f64).sqrt();
        Self {
            grid_size,
            trials,
            mean,
            stddev,
            confidence_lo: mean - margin,
            confidence_hi: mean + margin,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "mean                    = {}", self.mean)?;
        writeln!(f, "stddev                  = {}", self.stddev)?;
        write!(
            f,
            "95% confidence interval = {}, {}",
            self.confidence_lo, self.confidence_hi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn confidence_interval() {
        let summary = Summary::new(200, 4, 0.5, 0.1);
        assert!((summary.confidence_lo - 0.402).abs() < 1e-12);
        assert!((summary.confidence_hi - 0.598).abs() < 1e-12);
    }

    #[test]
    fn single_trial_is_nan() {
        let summary = Summary::new(10, 1, 0.6, f64::NAN);
        assert!(summary.stddev.is_nan());
        assert!(summary.confidence_lo.is_nan());
        assert!(summary.confidence_hi.is_nan());
    }

    #[test]
    fn display() {
        let summary = Summary::new(2, 4, 0.5, 0.0);
        let expected = "mean                    = 0.5\n\
                        stddev                  = 0\n\
                        95% confidence interval = 0.5, 0.5";
        assert_eq!(format!("{}", summary), expected);
    }

    #[test]
    fn to_json() {
        let summary = Summary::new(2, 4, 0.5, 0.0);
        let json = serde_json::to_string(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn single_trial_to_json() {
        let summary = Summary::new(10, 1, 0.6, f64::NAN);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"stddev\":null"));
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!((back.grid_size, back.trials, back.mean), (10, 1, 0.6));
        assert!(back.stddev.is_nan());
        assert!(back.confidence_lo.is_nan());
        assert!(back.confidence_hi.is_nan());
    }

    #[test]
    fn site() {
        let site = Site::new(3, 7);
        assert_eq!(format!("{}", site), "(3, 7)");
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        assert_eq!(serde_json::from_str::<Site>(&json).unwrap(), site);
    }
}
