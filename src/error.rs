//! Error types for maze configuration and generation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Unknown topology: {0}")]
    UnknownTopology(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}
