//! Move sequences shared by the tests. Each pair is `(board, cell)`.

// X wins sub board 0 on its top row.
pub(crate) fn get_top_row_game() -> Vec<(usize, usize)> {
    vec![
        (4, 3),
        (3, 0),
        (0, 0),
        (0, 3),
        (3, 4),
        (4, 0),
        (0, 1),
        (1, 0),
        (0, 2),
    ]
}

//       |       |
// X X X |       |
//       |       |
// ------+-------+------+
// O     |       | O
//       |       |
//     O | X X X |     O
// ------+-------+------+
//       |       | X
//   O   |   O   | X O
//     O |       | X
//
// X wins sub boards 4 (bottom row), 0 (middle row) and 8 (left column).
pub(crate) fn get_diagonal_game() -> Vec<(usize, usize)> {
    vec![
        (4, 6),
        (6, 4),
        (4, 7),
        (7, 4),
        (4, 8),
        (8, 4),
        (0, 3),
        (3, 0),
        (0, 4),
        (5, 0),
        (0, 5),
        (5, 8),
        (8, 0),
        (6, 8),
        (8, 3),
        (3, 8),
        (8, 6),
    ]
}

// Fills sub board 4 with
// X O X
// X O O
// O X X
// which ties it on the last move, played by O.
pub(crate) fn get_tied_centre_game() -> Vec<(usize, usize)> {
    vec![
        (4, 0),
        (0, 1),
        (1, 4),
        (4, 1),
        (1, 0),
        (0, 4),
        (4, 2),
        (2, 4),
        (4, 3),
        (3, 4),
        (4, 7),
        (7, 4),
        (4, 8),
        (8, 8),
        (8, 4),
        (4, 5),
        (5, 4),
        (4, 6),
        (6, 4),
        (4, 4),
    ]
}
