mod boards;
mod field;
#[cfg(test)]
pub(crate) mod fixtures;
mod game;
mod gamestate;
mod r#move;
mod player;
mod snapshot;

pub use boards::{check_matrix, find_winner, ActiveBoard, Board, InvalidMove, SubBoard};
pub use field::Field;
pub use game::{Game, MoveOutcome};
pub use gamestate::GameState;
pub use player::Player;
pub use r#move::{Coordinates, Move};
pub use snapshot::{Snapshot, Winner};
