//! Turn orchestration for a single game session.

use crate::grid::GridGraph;
use crate::history::{MoveHistory, Redo};
use crate::spread::spread;
use hare_core::{Error, NodeId, PopulationSet, Result, ScenarioConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

/// How a view should style a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeMark {
    Empty,
    Hare,
    /// Selected for shooting; shown over a hare if both apply
    Selected,
}

/// What a mutating call changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChange {
    SelectionToggled { node: NodeId, selected: bool },
    MoveFinished { move_number: usize, killed: usize },
    Undone { move_number: usize },
    Redone { move_number: usize },
    SelectionRecalled { move_number: usize },
}

/// Receives a notification after every state change of the engine
pub trait Observer {
    fn state_changed(&mut self, engine: &GameEngine, change: &StateChange);
}

impl<F> Observer for F
where
    F: FnMut(&GameEngine, &StateChange),
{
    fn state_changed(&mut self, engine: &GameEngine, change: &StateChange) {
        self(engine, change)
    }
}

/// Observable state, detached from the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub hares: PopulationSet,
    pub selection: PopulationSet,
    pub move_number: usize,
    pub history_len: usize,
}

/// A game in progress: the grid, the live hare population and shot
/// selection, and the history of played moves.
pub struct GameEngine {
    graph: GridGraph,
    hares: PopulationSet,
    selection: PopulationSet,
    history: MoveHistory,
    observers: Vec<Box<dyn Observer>>,
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("graph", &self.graph)
            .field("hares", &self.hares)
            .field("selection", &self.selection)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameEngine {
    /// Start a game from a scenario
    #[instrument(skip(config), fields(width = config.width, height = config.height))]
    pub fn new(config: &ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let graph = GridGraph::new(config.width, config.height)?;
        Self::with_graph(graph, config.hare_population())
    }

    /// Start a game on an existing graph
    pub fn with_graph(graph: GridGraph, hares: PopulationSet) -> Result<Self> {
        if let Some(unknown) = hares.iter().find(|&id| !graph.contains(id)) {
            return Err(Error::UnknownNode(unknown));
        }

        info!(
            nodes = graph.len(),
            edges = graph.edges().len(),
            hares = hares.len(),
            "Game started"
        );

        Ok(Self {
            graph,
            hares,
            selection: PopulationSet::new(),
            history: MoveHistory::new(),
            observers: Vec::new(),
        })
    }

    /// Register an observer for change notifications
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn hares(&self) -> &PopulationSet {
        &self.hares
    }

    pub fn selection(&self) -> &PopulationSet {
        &self.selection
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn move_number(&self) -> usize {
        self.history.move_number()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn node_mark(&self, id: NodeId) -> Result<NodeMark> {
        if !self.graph.contains(id) {
            return Err(Error::UnknownNode(id));
        }

        Ok(if self.selection.contains(id) {
            NodeMark::Selected
        } else if self.hares.contains(id) {
            NodeMark::Hare
        } else {
            NodeMark::Empty
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            hares: self.hares.clone(),
            selection: self.selection.clone(),
            move_number: self.move_number(),
            history_len: self.history_len(),
        }
    }

    /// Add a node to the shot selection, or remove it if already selected.
    ///
    /// Returns whether the node is selected afterwards.
    pub fn toggle_selection(&mut self, node: NodeId) -> Result<bool> {
        if !self.graph.contains(node) {
            return Err(Error::UnknownNode(node));
        }

        let selected = self.selection.toggle(node);
        debug!(%node, selected, "Selection toggled");
        self.notify(StateChange::SelectionToggled { node, selected });
        Ok(selected)
    }

    /// Shoot the selected nodes, spread the surviving hares and record the
    /// move. Returns the new move number.
    pub fn finish_move(&mut self) -> usize {
        let next = spread(&self.hares, &self.selection, &self.graph);
        let killed = self.hares.intersection(&self.selection).len();
        let move_number = self.history.commit(&self.hares, &self.selection);

        info!(
            move_number,
            hares_before = self.hares.len(),
            hares_after = next.len(),
            shots = self.selection.len(),
            killed,
            "Move finished"
        );

        self.hares = next;
        self.selection.clear();
        self.notify(StateChange::MoveFinished { move_number, killed });
        move_number
    }

    /// Go back one move. The selection is cleared, not restored.
    ///
    /// Returns `false` without notifying when already at the first move.
    pub fn undo(&mut self) -> bool {
        let Some(restored) = self.history.undo() else {
            debug!("Undo at start of history ignored");
            return false;
        };

        self.hares = restored.hares().clone();
        self.selection.clear();

        let move_number = self.history.move_number();
        debug!(move_number, "Undone");
        self.notify(StateChange::Undone { move_number });
        true
    }

    /// Go forward one move, showing the shots that were fired from the
    /// restored position.
    ///
    /// Returns `false` without notifying when already at the latest move.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(Redo::Recorded(restored)) => {
                self.hares = restored.hares().clone();
                self.selection = restored.shots().clone();
            }
            Some(Redo::Tip(last)) => {
                self.hares = spread(last.hares(), last.shots(), &self.graph);
                self.selection.clear();
            }
            None => {
                debug!("Redo at tip of history ignored");
                return false;
            }
        }

        let move_number = self.history.move_number();
        debug!(move_number, "Redone");
        self.notify(StateChange::Redone { move_number });
        true
    }

    /// Replace the selection with the shots recorded for the current move.
    ///
    /// Returns `false` without notifying when no move has been played.
    pub fn recall_selection(&mut self) -> bool {
        let Some(recalled) = self.history.recall() else {
            debug!("Nothing to recall");
            return false;
        };

        self.selection = recalled.shots().clone();

        let move_number = self.history.move_number();
        debug!(move_number, shots = self.selection.len(), "Selection recalled");
        self.notify(StateChange::SelectionRecalled { move_number });
        true
    }

    fn notify(&mut self, change: StateChange) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.state_changed(self, &change);
        }
        self.observers = observers;
    }
}
