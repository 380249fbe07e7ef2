//! Branchable record of played turns.
//!
//! The history is a list of immutable [`Move`] snapshots plus a 1-based
//! cursor, `move_number`. Cursor `k` (for `k <= len`) is the position
//! before move `k` was played, so `moves[k - 1]` holds its hare population
//! and the shots fired from it. Cursor `len + 1` is the tip: the position
//! after the latest move, which has no record of its own yet.

use hare_core::{Error, PopulationSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One played turn: the hare population before the shots, and the shots.
///
/// Both sets are copied in at construction, so later changes to the live
/// working sets cannot reach the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    hares: PopulationSet,
    shots: PopulationSet,
}

impl Move {
    pub fn new(hares: &PopulationSet, shots: &PopulationSet) -> Self {
        Self {
            hares: hares.clone(),
            shots: shots.clone(),
        }
    }

    pub fn hares(&self) -> &PopulationSet {
        &self.hares
    }

    pub fn shots(&self) -> &PopulationSet {
        &self.shots
    }

    /// Hares that stood on a shot node
    pub fn kills(&self) -> PopulationSet {
        self.hares.intersection(&self.shots)
    }
}

/// Where a successful [`MoveHistory::redo`] landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redo<'a> {
    /// A recorded position; the move is the one played from it.
    Recorded(&'a Move),
    /// The tip; the move is the latest one, whose outcome is the tip position.
    Tip(&'a Move),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct MoveHistory {
    moves: Vec<Move>,
    move_number: usize,
}

/// Unchecked wire form of [`MoveHistory`]
#[derive(Deserialize)]
struct RawHistory {
    moves: Vec<Move>,
    move_number: usize,
}

impl TryFrom<RawHistory> for MoveHistory {
    type Error = Error;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let tip = raw.moves.len() + 1;
        if !(1..=tip).contains(&raw.move_number) {
            return Err(Error::Validation(format!(
                "move number {} outside 1..={}",
                raw.move_number, tip
            )));
        }
        Ok(Self {
            moves: raw.moves,
            move_number: raw.move_number,
        })
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            move_number: 1,
        }
    }

    /// Number of recorded moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The 1-based cursor, always in `1..=len + 1`
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn is_at_start(&self) -> bool {
        self.move_number == 1
    }

    pub fn is_at_tip(&self) -> bool {
        self.move_number == self.moves.len() + 1
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Move recorded at the cursor, if the cursor is not at the tip
    pub fn current(&self) -> Option<&Move> {
        self.moves.get(self.move_number - 1)
    }

    /// Record a move played from the cursor position.
    ///
    /// Any moves at or after the cursor are dropped first, so committing from
    /// an earlier position starts a new branch. Returns the new move number.
    pub fn commit(&mut self, hares: &PopulationSet, shots: &PopulationSet) -> usize {
        if self.move_number <= self.moves.len() {
            trace!(
                move_number = self.move_number,
                dropped = self.moves.len() + 1 - self.move_number,
                "Truncating history for new branch"
            );
            self.moves.truncate(self.move_number - 1);
        }

        self.moves.push(Move::new(hares, shots));
        self.move_number += 1;
        self.debug_check();
        self.move_number
    }

    /// Step the cursor back one move.
    ///
    /// Returns the move recorded at the new cursor, whose hares are the
    /// position to restore, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Move> {
        if self.is_at_start() {
            return None;
        }

        self.move_number -= 1;
        self.debug_check();
        self.moves.get(self.move_number - 1)
    }

    /// Step the cursor forward one move, or return `None` at the tip.
    pub fn redo(&mut self) -> Option<Redo<'_>> {
        if self.is_at_tip() {
            return None;
        }

        self.move_number += 1;
        self.debug_check();
        match self.moves.get(self.move_number - 1) {
            Some(next) => Some(Redo::Recorded(next)),
            None => self.moves.last().map(Redo::Tip),
        }
    }

    /// Move whose shots should be shown again.
    ///
    /// This is the move played from the cursor position; at the tip it is the
    /// latest move. `None` only while nothing has been played.
    pub fn recall(&self) -> Option<&Move> {
        self.current().or_else(|| self.moves.last())
    }

    fn debug_check(&self) {
        debug_assert!(
            (1..=self.moves.len() + 1).contains(&self.move_number),
            "move number {} outside 1..={}",
            self.move_number,
            self.moves.len() + 1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hare_core::NodeId;

    fn set(ids: &[usize]) -> PopulationSet {
        ids.iter().map(|&id| NodeId(id)).collect()
    }

    fn history_with(count: usize) -> MoveHistory {
        let mut history = MoveHistory::new();
        for i in 0..count {
            history.commit(&set(&[i]), &set(&[100 + i]));
        }
        history
    }

    #[test]
    fn test_initial_state() {
        let history = MoveHistory::new();
        assert_eq!(history.move_number(), 1);
        assert!(history.is_empty());
        assert!(history.is_at_start());
        assert!(history.is_at_tip());
        assert!(history.current().is_none());
    }

    #[test]
    fn test_commit_appends_at_tip() {
        let mut history = MoveHistory::new();
        assert_eq!(history.commit(&set(&[0]), &set(&[1])), 2);
        assert_eq!(history.commit(&set(&[2]), &PopulationSet::new()), 3);
        assert_eq!(history.len(), 2);
        assert!(history.is_at_tip());
        assert_eq!(history.moves()[1].hares(), &set(&[2]));
    }

    #[test]
    fn test_move_is_a_copy() {
        let mut hares = set(&[1, 2]);
        let mut shots = set(&[2]);
        let mut history = MoveHistory::new();
        history.commit(&hares, &shots);

        hares.insert(NodeId(5));
        shots.clear();

        let recorded = &history.moves()[0];
        assert_eq!(recorded.hares(), &set(&[1, 2]));
        assert_eq!(recorded.shots(), &set(&[2]));
        assert_eq!(recorded.kills(), set(&[2]));
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = MoveHistory::new();
        assert!(history.undo().is_none());
        assert_eq!(history.move_number(), 1);
    }

    #[test]
    fn test_undo_returns_position_before_move() {
        let mut history = history_with(2);
        let restored = history.undo().unwrap().clone();
        assert_eq!(history.move_number(), 2);
        assert_eq!(restored.hares(), &set(&[1]));

        let restored = history.undo().unwrap().clone();
        assert_eq!(history.move_number(), 1);
        assert_eq!(restored.hares(), &set(&[0]));
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_redo_at_tip_is_noop() {
        let mut history = history_with(3);
        assert!(history.redo().is_none());
        assert_eq!(history.move_number(), 4);
    }

    #[test]
    fn test_redo_recorded_and_tip() {
        let mut history = history_with(2);
        history.undo();
        history.undo();

        match history.redo() {
            Some(Redo::Recorded(m)) => {
                assert_eq!(m.hares(), &set(&[1]));
                assert_eq!(m.shots(), &set(&[101]));
            }
            other => panic!("expected recorded position, got {other:?}"),
        }
        assert_eq!(history.move_number(), 2);

        match history.redo() {
            Some(Redo::Tip(last)) => assert_eq!(last.hares(), &set(&[1])),
            other => panic!("expected tip, got {other:?}"),
        }
        assert_eq!(history.move_number(), 3);
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_branching_truncates_future() {
        let mut history = history_with(5);
        history.undo();
        history.undo();
        history.undo();
        assert_eq!(history.move_number(), 3);

        assert_eq!(history.commit(&set(&[42]), &set(&[43])), 4);
        assert_eq!(history.len(), 3);
        assert_eq!(history.moves()[2].hares(), &set(&[42]));
        assert!(history.is_at_tip());
    }

    #[test]
    fn test_branching_from_start() {
        let mut history = history_with(2);
        history.undo();
        history.undo();

        history.commit(&set(&[7]), &PopulationSet::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history.move_number(), 2);
    }

    #[test]
    fn test_deserialize_checks_cursor() {
        let history = history_with(2);
        let json = serde_json::to_string(&history).unwrap();
        let restored: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.move_number(), 3);
        assert_eq!(restored.moves(), history.moves());

        for bad in [
            r#"{"moves":[],"move_number":0}"#,
            r#"{"moves":[],"move_number":5}"#,
        ] {
            assert!(serde_json::from_str::<MoveHistory>(bad).is_err(), "{bad}");
        }

        let at_start: MoveHistory =
            serde_json::from_str(r#"{"moves":[],"move_number":1}"#).unwrap();
        assert!(at_start.current().is_none());
        assert!(at_start.is_at_tip());
    }

    #[test]
    fn test_recall() {
        let mut history = MoveHistory::new();
        assert!(history.recall().is_none());

        history.commit(&set(&[0]), &set(&[3]));
        history.commit(&set(&[1]), &set(&[4]));
        assert_eq!(history.recall().unwrap().shots(), &set(&[4]));

        history.undo();
        history.undo();
        assert_eq!(history.move_number(), 1);
        assert_eq!(history.recall().unwrap().shots(), &set(&[3]));
        assert_eq!(history.move_number(), 1);
    }
}
