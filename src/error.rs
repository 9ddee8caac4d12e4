use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{0} cannot be built from empty data")]
    EmptyData(&'static str),

    #[error("failed to decode payload: {0}")]
    Decode(String),

    #[error("fetch failed: {0}")]
    Fetch(String),
}
