use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{generic::boards::check_matrix, Coordinates, Field, GameState, Move, Player, SubBoard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidMove {
    OutOfBounds,
    GameEnded,
    SubBoardDecided,
    SubBoardNotActive,
    FieldOccupied,
}

impl Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InvalidMove::OutOfBounds => "board and cell must be between 0 and 8",
            InvalidMove::GameEnded => "the game has already ended",
            InvalidMove::SubBoardDecided => "the sub board is already won or tied",
            InvalidMove::SubBoardNotActive => "the move has to be made in the active sub board",
            InvalidMove::FieldOccupied => "the field is already occupied",
        })
    }
}

/// Which sub board the next move has to be made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveBoard {
    Board { index: usize },
    Any,
}

impl ActiveBoard {
    pub fn allows(&self, board: usize) -> bool {
        match self {
            ActiveBoard::Board { index } => *index == board,
            ActiveBoard::Any => true,
        }
    }
}

/// Complete state of one game. Fields only change through `insert_move`,
/// every accepted move applies all of its effects at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Board {
    data: Array2<SubBoard>,
    active_board: ActiveBoard,
    next_player: Player,
    state: GameState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    /// The opening move has to be made in the centre sub board.
    pub const STARTING_BOARD: usize = 4;
    pub const STARTING_PLAYER: Player = Player::X;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), SubBoard::new()),
            active_board: ActiveBoard::Board {
                index: Self::STARTING_BOARD,
            },
            next_player: Self::STARTING_PLAYER,
            state: GameState::InProgress {
                next_player: Self::STARTING_PLAYER,
            },
        }
    }

    pub fn get_next_player(&self) -> Player {
        self.next_player
    }

    pub fn get_active_board(&self) -> ActiveBoard {
        self.active_board
    }

    pub fn get_state(&self) -> GameState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn get_sub_board(&self, board: usize) -> Option<&SubBoard> {
        let coordinates = Move::new(board, 0).subboard_coordinates()?;
        Some(&self.data[coordinates])
    }

    pub fn get_field(&self, m: Move) -> Option<Field> {
        self.get_sub_board(m.board)?.get(m.cell)
    }

    /// All marks, indexed by sub board first and cell second.
    pub fn fields(&self) -> Vec<Vec<Field>> {
        self.data.iter().map(SubBoard::fields).collect()
    }

    /// The outcome of every sub board, in sub board order.
    pub fn outcomes(&self) -> Vec<Field> {
        self.data.iter().map(SubBoard::state).collect()
    }

    /// The meta board: each sub board reduced to its outcome.
    pub fn get_abstracted_board(&self) -> Array2<Field> {
        self.data.map(SubBoard::state)
    }

    pub fn get_allowed_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }

        let boards = 0..Self::SIZE.0 * Self::SIZE.1;
        let cells = 0..SubBoard::SIZE.0 * SubBoard::SIZE.1;
        let allowed_moves: Vec<Move> = boards
            .filter(|board| self.active_board.allows(*board))
            .cartesian_product(cells)
            .map(|(board, cell)| Move::new(board, cell))
            .filter(|m| {
                self.get_sub_board(m.board)
                    .is_some_and(|sub_board| !sub_board.is_decided())
                    && self.get_field(*m) == Some(Field::Vacant)
            })
            .collect();

        debug!("allowed moves: {}", allowed_moves.len());
        allowed_moves
    }

    pub fn validate_move(&self, new_move: Move) -> Result<(), InvalidMove> {
        // OutOfBounds
        let sub_board = self
            .get_sub_board(new_move.board)
            .ok_or(InvalidMove::OutOfBounds)?;
        let field = sub_board.get(new_move.cell).ok_or(InvalidMove::OutOfBounds)?;
        // GameEnded
        if self.is_terminal() {
            return Err(InvalidMove::GameEnded);
        }
        // SubBoardDecided
        if sub_board.is_decided() {
            return Err(InvalidMove::SubBoardDecided);
        }
        // SubBoardNotActive
        if !self.active_board.allows(new_move.board) {
            return Err(InvalidMove::SubBoardNotActive);
        }
        // FieldOccupied
        if field != Field::Vacant {
            return Err(InvalidMove::FieldOccupied);
        }
        Ok(())
    }

    /// Plays a move for the player whose turn it is. A rejected move
    /// leaves the board untouched.
    pub fn insert_move(&mut self, new_move: Move) -> Result<(), InvalidMove> {
        self.validate_move(new_move)?;
        let subboard_index = new_move
            .subboard_coordinates()
            .ok_or(InvalidMove::OutOfBounds)?;
        let field_index = new_move
            .field_coordinates()
            .ok_or(InvalidMove::OutOfBounds)?;

        let player = self.next_player;
        let sub_board_state = self.data[subboard_index].place(field_index, player);
        if sub_board_state != Field::Vacant {
            debug!(
                "sub board {} decided: {:?}",
                new_move.board, sub_board_state
            );
        }

        self.next_player = player.other();
        self.state = check_matrix(&self.get_abstracted_board(), self.next_player);

        // the index of the field in the subboard is the index of the subboard where the next
        // move must be made. If that subboard is already decided, the next move can be made
        // anywhere
        self.active_board = match self.data[field_index].state() {
            Field::Vacant => ActiveBoard::Board {
                index: new_move.cell,
            },
            _ => ActiveBoard::Any,
        };
        debug!(
            "{} played {:?}, next: {:?} in {:?}",
            player, new_move, self.next_player, self.active_board
        );
        Ok(())
    }

    /// Same as `insert_move` but leaves `self` alone and returns the
    /// resulting board.
    pub fn with_move(&self, new_move: Move) -> Result<Board, InvalidMove> {
        let mut board = self.clone();
        board.insert_move(new_move)?;
        Ok(board)
    }
}
