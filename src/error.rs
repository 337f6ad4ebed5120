use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid scale context: {0}")]
    InvalidScale(String),

    #[error("series `{series}` has {actual} points, expected {expected}")]
    MismatchedSeriesLength {
        series: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
