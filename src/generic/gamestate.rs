use std::fmt::Display;

use crate::Player;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    Won { winner: Player },
    Draw,
    InProgress { next_player: Player },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }

    /// The winning player, `None` while in progress or after a draw.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Won { winner } => write!(f, "player {} won", winner),
            GameState::Draw => write!(f, "draw"),
            GameState::InProgress { next_player } => {
                write!(f, "in progress, {} to move", next_player)
            }
        }
    }
}
