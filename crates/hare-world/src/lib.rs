//! Game engine for the hare hunt.
//!
//! This crate holds the grid graph the hares live on, the rule that spreads
//! them between turns, the branchable move history, and the engine that
//! ties a turn together.

pub mod grid;
pub mod spread;
pub mod history;
pub mod engine;

pub use grid::{Edge, GridGraph, Node};
pub use spread::spread;
pub use history::{Move, MoveHistory, Redo};
pub use engine::{GameEngine, GameSnapshot, NodeMark, Observer, StateChange};
