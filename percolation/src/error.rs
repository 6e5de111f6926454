use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("site ({row}, {col}) is outside of the {size}x{size} grid")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("index {index} is outside of the union-find with {len} elements")]
    InvalidIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;
