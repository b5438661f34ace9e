// error.rs - Error types for the cell engine and its configuration

use thiserror::Error;

use crate::grid::CellState;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cell ({x}, {y}) is a bridge and cannot be toggled")]
    BridgeToggle { x: i32, y: i32 },

    #[error("cell ({x}, {y}) cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        x: i32,
        y: i32,
        from: CellState,
        to: CellState,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
