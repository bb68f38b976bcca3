use crate::{Board, SubBoard};
use serde::{Deserialize, Serialize};

pub type Coordinates = (usize, usize);

/// A move names the sub board to play in and the cell inside it, both as
/// row-major indices from 0 to 8.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: usize,
    pub cell: usize,
}

impl Move {
    pub fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }

    pub fn is_in_bounds(&self) -> bool {
        self.board < Board::SIZE.0 * Board::SIZE.1 && self.cell < SubBoard::SIZE.0 * SubBoard::SIZE.1
    }

    /// Builds a move from coordinates on the full 9x9 grid.
    /// Example: (5,1) -> sub board (1,0) = 3, field (2,1) = 7
    pub fn from_coordinates(coordinates: Coordinates) -> Option<Self> {
        let (row, column) = coordinates;
        if row >= Board::SIZE.0 * SubBoard::SIZE.0 || column >= Board::SIZE.1 * SubBoard::SIZE.1 {
            return None;
        }

        let subboard_row = row / SubBoard::SIZE.0;
        let subboard_column = column / SubBoard::SIZE.1;

        let field_row = row - (subboard_row * SubBoard::SIZE.0);
        let field_column = column - (subboard_column * SubBoard::SIZE.1);

        Some(Self::new(
            subboard_row * Board::SIZE.1 + subboard_column,
            field_row * SubBoard::SIZE.1 + field_column,
        ))
    }

    /// The position of this move on the full 9x9 grid.
    pub fn coordinates(&self) -> Option<Coordinates> {
        if !self.is_in_bounds() {
            return None;
        }
        let (subboard_row, subboard_column) = self.subboard_coordinates()?;
        let (field_row, field_column) = self.field_coordinates()?;
        Some((
            subboard_row * SubBoard::SIZE.0 + field_row,
            subboard_column * SubBoard::SIZE.1 + field_column,
        ))
    }

    /// Position of the sub board inside the meta board.
    pub(crate) fn subboard_coordinates(&self) -> Option<Coordinates> {
        index_to_coordinates(self.board, Board::SIZE)
    }

    /// Position of the field inside its sub board.
    pub(crate) fn field_coordinates(&self) -> Option<Coordinates> {
        index_to_coordinates(self.cell, SubBoard::SIZE)
    }
}

pub(crate) fn index_to_coordinates(index: usize, size: Coordinates) -> Option<Coordinates> {
    if index >= size.0 * size.1 {
        return None;
    }
    Some((index / size.1, index % size.1))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_coordinates() {
        assert_eq!(Move::from_coordinates((0, 0)), Some(Move::new(0, 0)));
        assert_eq!(Move::from_coordinates((1, 1)), Some(Move::new(0, 4)));
        assert_eq!(Move::from_coordinates((2, 2)), Some(Move::new(0, 8)));
        assert_eq!(Move::from_coordinates((3, 3)), Some(Move::new(4, 0)));
        assert_eq!(Move::from_coordinates((4, 4)), Some(Move::new(4, 4)));
        assert_eq!(Move::from_coordinates((5, 1)), Some(Move::new(3, 7)));
        assert_eq!(Move::from_coordinates((6, 6)), Some(Move::new(8, 0)));
        assert_eq!(Move::from_coordinates((8, 8)), Some(Move::new(8, 8)));
        assert_eq!(Move::from_coordinates((0, 9)), None);
        assert_eq!(Move::from_coordinates((9, 0)), None);
    }

    #[test]
    fn coordinates_match_from_coordinates() {
        for row in 0..9 {
            for column in 0..9 {
                let m = Move::from_coordinates((row, column))
                    .unwrap_or_else(|| panic!("({}, {}) should be on the board", row, column));
                assert_eq!(m.coordinates(), Some((row, column)), "move {:?}", m);
            }
        }
        assert_eq!(Move::new(9, 0).coordinates(), None);
        assert_eq!(Move::new(0, 9).coordinates(), None);
    }

    #[test]
    fn index_to_coordinates_is_row_major() {
        assert_eq!(index_to_coordinates(0, (3, 3)), Some((0, 0)));
        assert_eq!(index_to_coordinates(2, (3, 3)), Some((0, 2)));
        assert_eq!(index_to_coordinates(3, (3, 3)), Some((1, 0)));
        assert_eq!(index_to_coordinates(7, (3, 3)), Some((2, 1)));
        assert_eq!(index_to_coordinates(9, (3, 3)), None);
    }
}
