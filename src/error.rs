use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("statistic requested on empty input")]
    EmptyInput,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("malformed series: time has {time_len} samples, flux has {flux_len}")]
    MalformedSeries { time_len: usize, flux_len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
