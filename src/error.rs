use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid scale domain: start={start}, end={end}")]
    InvalidDomain { start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
