//! Hare spread between turns.

use crate::grid::GridGraph;
use hare_core::PopulationSet;

/// Compute the hare population after one turn.
///
/// A hare standing on a shot node dies and leaves no successors. Every other
/// hare moves to each of its neighbours, except neighbours that were shot
/// this turn. The result replaces the previous population: a hare must move,
/// so nodes reached by no surviving hare end up empty.
pub fn spread(hares: &PopulationSet, shots: &PopulationSet, graph: &GridGraph) -> PopulationSet {
    let mut next = PopulationSet::new();

    for hare in hares.iter().filter(|&hare| !shots.contains(hare)) {
        // Off-graph hares have nowhere to go.
        let Ok(neighbors) = graph.neighbors(hare) else {
            continue;
        };
        next.extend(neighbors.iter().copied().filter(|&n| !shots.contains(n)));
    }

    next
}
