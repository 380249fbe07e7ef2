//! Text and JSON renderings of the game state.

use hare_world::{GameEngine, NodeMark};

fn mark_char(mark: NodeMark) -> char {
    match mark {
        NodeMark::Empty => '.',
        NodeMark::Hare => 'H',
        NodeMark::Selected => 'X',
    }
}

/// Draw the grid one row per line, followed by a status line
pub fn render_board(engine: &GameEngine) -> String {
    let graph = engine.graph();
    let mut out = String::new();

    for j in 0..graph.height() {
        let row: Vec<String> = (0..graph.width())
            .filter_map(|i| graph.node_at(i, j))
            .map(|id| {
                engine
                    .node_mark(id)
                    .map(mark_char)
                    .unwrap_or('?')
                    .to_string()
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    out.push_str(&format!(
        "move {}/{}  hares {}",
        engine.move_number(),
        engine.history_len() + 1,
        engine.hares().len()
    ));
    if !engine.selection().is_empty() {
        let shots: Vec<String> = engine.selection().iter().map(|id| id.to_string()).collect();
        out.push_str(&format!("  shots {}", shots.join(",")));
    }
    out
}

/// One JSON line describing the observable state
pub fn render_json(engine: &GameEngine) -> serde_json::Result<String> {
    serde_json::to_string(&engine.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hare_core::{NodeId, ScenarioConfig};

    #[test]
    fn test_render_board() {
        let mut engine = GameEngine::new(&ScenarioConfig {
            width: 3,
            height: 2,
            initial_hares: vec![NodeId(0), NodeId(4)],
        })
        .unwrap();
        engine.toggle_selection(NodeId(4)).unwrap();
        engine.toggle_selection(NodeId(5)).unwrap();

        assert_eq!(
            render_board(&engine),
            "H . .\n. X X\nmove 1/1  hares 2  shots 4,5"
        );
    }

    #[test]
    fn test_render_board_after_move() {
        let mut engine = GameEngine::new(&ScenarioConfig::full(2, 2)).unwrap();
        engine.toggle_selection(NodeId(0)).unwrap();
        engine.finish_move();

        assert_eq!(render_board(&engine), ". H\nH H\nmove 2/2  hares 3");
    }

    #[test]
    fn test_status_line_lists_shots_in_id_order() {
        let mut engine = GameEngine::new(&ScenarioConfig::full(4, 3)).unwrap();
        for id in [11, 2, 7] {
            engine.toggle_selection(NodeId(id)).unwrap();
        }
        engine.finish_move();
        engine.undo();
        engine.recall_selection();

        let board = render_board(&engine);
        assert_eq!(
            board.lines().last(),
            Some("move 1/2  hares 12  shots 2,7,11")
        );
    }

    #[test]
    fn test_render_json() {
        let engine = GameEngine::new(&ScenarioConfig::full(1, 2)).unwrap();
        assert_eq!(
            render_json(&engine).unwrap(),
            r#"{"hares":[0,1],"selection":[],"move_number":1,"history_len":0}"#
        );
    }
}
