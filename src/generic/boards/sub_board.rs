use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    generic::{boards::check_matrix, r#move::index_to_coordinates},
    Coordinates, Field, GameState, Player,
};

/// One of the nine local boards.
///
/// `state` is the outcome seen from the meta board: `Vacant` while
/// undecided, `Occupied` once a player completed a line, `Disabled` when
/// full without a line. A decided sub board never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    data: Array2<Field>,
    state: Field,
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubBoard {
    pub const SIZE: Coordinates = (3, 3);

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Field::Vacant),
            state: Field::Vacant,
        }
    }

    pub fn data(&self) -> &Array2<Field> {
        &self.data
    }

    pub fn state(&self) -> Field {
        self.state
    }

    pub fn is_decided(&self) -> bool {
        !self.state.is_vacant()
    }

    /// The field at a row-major cell index.
    pub fn get(&self, cell: usize) -> Option<Field> {
        index_to_coordinates(cell, Self::SIZE).map(|coordinates| self.data[coordinates])
    }

    pub fn fields(&self) -> Vec<Field> {
        self.data.iter().copied().collect()
    }

    pub fn get_state(&self, next_player: Player) -> GameState {
        check_matrix(&self.data, next_player)
    }

    /// Marks a field and re-evaluates the outcome. The caller has already
    /// checked that the sub board is undecided and the field vacant.
    pub(crate) fn place(&mut self, field: Coordinates, player: Player) -> Field {
        self.data[field] = Field::Occupied { player };
        self.state = match self.get_state(player.other()) {
            GameState::Won { winner } => Field::Occupied { player: winner },
            GameState::Draw => Field::Disabled,
            GameState::InProgress { .. } => Field::Vacant,
        };
        self.state
    }
}
