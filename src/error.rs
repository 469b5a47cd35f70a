use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Failures that abort a whole simulation run
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid grid dimensions {width}x{height}: both must be non-negative")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("malformed grid dimension line: {0:?}")]
    MalformedDimensionLine(String),
    #[error("malformed position line: {0:?}")]
    MalformedPositionLine(String),
    #[error("unknown orientation {0:?}, expected one of N, E, S, W")]
    UnknownOrientation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
