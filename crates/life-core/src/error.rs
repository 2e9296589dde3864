//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid dimension: grid must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("cell ({row}, {column}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        column: u32,
        width: u32,
        height: u32,
    },
}
