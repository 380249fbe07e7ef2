//! Scenario configuration.
//!
//! A scenario is the only input the game takes from its environment: grid
//! size and where the hares start.

use crate::{Error, NodeId, PopulationSet, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Name of the scenario used when none is requested
pub const DEFAULT_SCENARIO: &str = "checker-5x5";

/// Grid size and seeded hare population
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Number of columns (the `n` in `n * j + i`)
    pub width: i32,
    /// Number of rows
    pub height: i32,
    /// Node ids holding a hare before the first move
    pub initial_hares: Vec<NodeId>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::checker(5, 5)
    }
}

impl ScenarioConfig {
    /// Grid with every node seeded
    ///
    /// Grids too large to address seed nothing; `validate` rejects them.
    pub fn full(width: i32, height: i32) -> Self {
        let count = checked_node_count(width, height).unwrap_or(0);
        Self {
            width,
            height,
            initial_hares: (0..count).map(NodeId).collect(),
        }
    }

    /// Grid with every even node id seeded
    pub fn checker(width: i32, height: i32) -> Self {
        let count = checked_node_count(width, height).unwrap_or(0);
        Self {
            width,
            height,
            initial_hares: (0..count).filter(|id| id % 2 == 0).map(NodeId).collect(),
        }
    }

    /// Look up a built-in scenario by name
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "full-3x3" => Ok(Self::full(3, 3)),
            "checker-5x5" => Ok(Self::checker(5, 5)),
            "sparse-10x10" => Ok(Self {
                width: 10,
                height: 10,
                initial_hares: vec![NodeId(0), NodeId(11), NodeId(27)],
            }),
            other => Err(Error::UnknownScenario(other.to_string())),
        }
    }

    /// Names accepted by [`ScenarioConfig::builtin`]
    pub fn builtin_names() -> &'static [&'static str] {
        &["full-3x3", "checker-5x5", "sparse-10x10"]
    }

    /// Parse and validate a scenario from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScenarioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading scenario");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Number of nodes in the scenario's grid
    pub fn node_count(&self) -> usize {
        (self.width.max(0) as usize).saturating_mul(self.height.max(0) as usize)
    }

    /// Seeded hares as a set
    pub fn hare_population(&self) -> PopulationSet {
        self.initial_hares.iter().copied().collect()
    }

    /// Check dimensions and that every seed names a node of the grid
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let count = checked_node_count(self.width, self.height).ok_or_else(|| {
            Error::Validation(format!("grid {}x{} is too large", self.width, self.height))
        })?;
        if let Some(&id) = self.initial_hares.iter().find(|id| id.index() >= count) {
            return Err(Error::UnknownNode(id));
        }

        Ok(())
    }
}

/// Node count of a grid, or `None` if ids would not fit in an `i32` grid
fn checked_node_count(width: i32, height: i32) -> Option<usize> {
    width
        .max(0)
        .checked_mul(height.max(0))
        .map(|count| count as usize)
}
