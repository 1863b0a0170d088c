use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised by the rendering layer.
///
/// Chart builders never fail; everything here comes from layout resolution,
/// frame validation or serialization.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
