use crate::Player;
use serde::{Deserialize, Serialize};

/// A single cell of a sub board, or the outcome of a whole sub board when
/// the sub boards are abstracted into the meta board.
///
/// On the meta board `Vacant` means undecided, `Occupied` means won and
/// `Disabled` means tied. Cells themselves are never `Disabled`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[default]
    Vacant,
    Occupied { player: Player },
    Disabled,
}

impl Field {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Field::Occupied { player } => Some(*player),
            _ => None,
        }
    }
}
