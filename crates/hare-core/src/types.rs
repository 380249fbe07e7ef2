//! Core type definitions for the puzzle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a grid node
///
/// For a grid of width `n`, the node in column `i` and row `j` has id `n * j + i`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layout position of a node, only meaningful to views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Spacing between neighbouring nodes in the default layout
    pub const SPACING: i32 = 50;

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Default layout position for the node in column `i`, row `j`
    pub fn for_cell(i: i32, j: i32) -> Self {
        Self::new(
            i.saturating_mul(Self::SPACING),
            j.saturating_mul(Self::SPACING),
        )
    }
}
