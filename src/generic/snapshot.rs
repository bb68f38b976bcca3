use serde::{Deserialize, Serialize};

use crate::{ActiveBoard, Board, Field, GameState, Player};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    X,
    O,
    #[serde(rename = "tie")]
    Tie,
}

/// Flat, read-only view of a `Board` for consumers outside the crate.
///
/// `cells` is indexed by sub board first and cell second, `outcomes` holds
/// one entry per sub board. `winner` stays `None` until the game is over.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub cells: Vec<Vec<Field>>,
    pub outcomes: Vec<Field>,
    pub active_board: ActiveBoard,
    pub turn: Player,
    pub terminal: bool,
    pub winner: Option<Winner>,
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        let winner = match board.get_state() {
            GameState::Won { winner: Player::X } => Some(Winner::X),
            GameState::Won { winner: Player::O } => Some(Winner::O),
            GameState::Draw => Some(Winner::Tie),
            GameState::InProgress { .. } => None,
        };
        Self {
            cells: board.fields(),
            outcomes: board.outcomes(),
            active_board: board.get_active_board(),
            turn: board.get_next_player(),
            terminal: board.is_terminal(),
            winner,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{generic::fixtures::get_diagonal_game, Move};
    use serde_json::{json, Value};

    #[test]
    fn start_snapshot() {
        let snapshot = Snapshot::from(&Board::new());
        assert_eq!(snapshot.cells, vec![vec![Field::Vacant; 9]; 9]);
        assert_eq!(snapshot.outcomes, vec![Field::Vacant; 9]);
        assert_eq!(snapshot.active_board, ActiveBoard::Board { index: 4 });
        assert_eq!(snapshot.turn, Player::X);
        assert!(!snapshot.terminal);
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn json_shape() {
        let mut board = Board::new();
        board.insert_move(Move::new(4, 0)).unwrap();
        let value = serde_json::to_value(Snapshot::from(&board)).unwrap();

        assert_eq!(value["cells"][4][0], json!({ "occupied": { "player": "X" } }));
        assert_eq!(value["cells"][4][1], json!("vacant"));
        assert_eq!(value["outcomes"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["active_board"], json!({ "board": { "index": 0 } }));
        assert_eq!(value["turn"], json!("O"));
        assert_eq!(value["terminal"], json!(false));
        assert_eq!(value["winner"], Value::Null);
    }

    #[test]
    fn finished_game_names_winner() {
        let mut board = Board::new();
        for (b, c) in get_diagonal_game() {
            board.insert_move(Move::new(b, c)).unwrap();
        }
        let snapshot = Snapshot::from(&board);
        assert!(snapshot.terminal);
        assert_eq!(snapshot.winner, Some(Winner::X));
        assert_eq!(
            serde_json::to_value(Winner::Tie).unwrap(),
            json!("tie")
        );
    }
}
