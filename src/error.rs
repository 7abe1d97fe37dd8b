use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid baseline {baseline}{}", baseline_location(.index))]
    InvalidBaseline { index: Option<usize>, baseline: f64 },

    #[error("length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown chart: {0}")]
    UnknownChart(String),

    #[error("invalid config: {0}")]
    Config(String),
}

fn baseline_location(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}
