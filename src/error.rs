use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis range: start={start}, end={end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("unknown axis `{0}`")]
    UnknownAxis(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
