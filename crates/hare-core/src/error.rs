//! Error types for the puzzle core.

use crate::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
