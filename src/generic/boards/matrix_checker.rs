use crate::{Field, GameState, Player};
use ndarray::{s, Array2, ArrayView1};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct WinnerRegisterer {
    winner: Option<Player>,
}
impl WinnerRegisterer {
    pub fn register(&mut self, player: Option<Player>) {
        if self.winner.is_none() && player.is_some() {
            self.winner = player;
        }
    }
    pub fn get_winner(&self) -> Option<Player> {
        self.winner
    }
}

/// Looks for a player owning a whole row, column or diagonal.
///
/// Only `Field::Occupied` values can complete a line, so on the meta board
/// tied (`Disabled`) and undecided (`Vacant`) sub boards never take part in
/// a win. If several lines are complete the first one found is returned.
pub fn find_winner(matrix: &Array2<Field>) -> Option<Player> {
    let mut winner_registerer = WinnerRegisterer::default();

    // check diagonal
    winner_registerer.register(get_winner_in_row(matrix.diag()));

    // check anti-diagonal
    winner_registerer.register(get_winner_in_row(matrix.slice(s![..;-1, ..]).diag()));

    // check rows
    for row in matrix.rows() {
        winner_registerer.register(get_winner_in_row(row));
    }

    // check columns
    for column in matrix.columns() {
        winner_registerer.register(get_winner_in_row(column));
    }

    winner_registerer.get_winner()
}

/// Checks if a matrix of fields contains a winner
///
/// if one player has all fields in a row, column or diagonal, they win.
/// Without a winner the matrix is a draw once no field is vacant.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use ultimate_tictactoe::{Field, Player, GameState, check_matrix};
///
/// // O X X
/// // O O O <-- O wins
/// // X O X
/// let matrix = array![
///    [Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::X}, Field::Occupied{ player: Player::X}],
///    [Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::O}],
///    [Field::Occupied{ player: Player::X}, Field::Occupied{ player: Player::O}, Field::Occupied{ player: Player::X}],
/// ];
///
/// assert_eq!(check_matrix(&matrix, Player::X), GameState::Won{ winner: Player::O});
///
/// ```
///
pub fn check_matrix(matrix: &Array2<Field>, next_player: Player) -> GameState {
    if let Some(winner) = find_winner(matrix) {
        GameState::Won { winner }
    } else if matrix.iter().all(|field| !field.is_vacant()) {
        GameState::Draw
    } else {
        GameState::InProgress { next_player }
    }
}

/// Checks if a list of fields contains a winner
///
/// This function is used by find_winner to check rows, columns and diagonals.
fn get_winner_in_row(list: ArrayView1<'_, Field>) -> Option<Player> {
    let potential_winner = list.get(0)?;

    if list.iter().all(|field| field == potential_winner) {
        potential_winner.player()
    } else {
        None
    }
}
