//! Core types and utilities for the hare hunt puzzle.

pub mod types;
pub mod population;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use types::*;
pub use population::PopulationSet;
pub use config::*;
