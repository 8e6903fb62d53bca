use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Error taxonomy shared by every fallible engine API.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Plot geometry collapsed to zero pixels in at least one dimension.
    #[error("invalid plot viewport: {width}x{height} px")]
    InvalidViewport { width: u32, height: u32 },

    /// Samples, scale domains, or configuration failed validation.
    #[error("invalid chart data: {0}")]
    InvalidData(String),
}
