mod board;
mod matrix_checker;
mod sub_board;

pub use board::{ActiveBoard, Board, InvalidMove};
pub use matrix_checker::{check_matrix, find_winner};
pub use sub_board::SubBoard;
