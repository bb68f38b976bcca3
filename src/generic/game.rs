use log::{debug, info};

use crate::{Board, GameState, InvalidMove, Move};

/// What an accepted move did to the game as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    /// This move ended the game. Reported exactly once per game.
    Finished { state: GameState },
}

/// Owns the state of a single game. Not synchronised, callers that share a
/// game have to serialise their calls.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    pub fn snapshot(&self) -> &Board {
        &self.board
    }

    pub fn attempt_move(&mut self, board: usize, cell: usize) -> Result<MoveOutcome, InvalidMove> {
        let new_move = Move::new(board, cell);
        let was_terminal = self.board.is_terminal();
        if let Err(err) = self.board.insert_move(new_move) {
            debug!("rejected {:?}: {}", new_move, err);
            return Err(err);
        }

        let state = self.board.get_state();
        if !was_terminal && state.is_terminal() {
            info!("game over: {}", state);
            Ok(MoveOutcome::Finished { state })
        } else {
            Ok(MoveOutcome::Continued)
        }
    }

    pub fn reset(&mut self) -> &Board {
        debug!("resetting game");
        self.board = Board::new();
        &self.board
    }
}
