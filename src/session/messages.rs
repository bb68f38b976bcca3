use crate::{GameState, InvalidMove, Move, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutgoingMessage {
    Error { error_message: Error },
    GameState { game_state: Snapshot },
    Rejected { reason: InvalidMove, game_state: Snapshot },
    GameOver { state: GameState },
    AllowedMoves { moves: Vec<Move> },
    Pong {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncomingMessage {
    Move { board: usize, cell: usize },
    Reset {},
    Snapshot {},
    AllowedMoves {},
    Ping {},
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    CouldNotParse(String),
    CouldNotSerialize(String),
    CouldNotSend(String),
    CouldNotRead(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CouldNotParse(message) => write!(f, "could not parse message: {}", message),
            Error::CouldNotSerialize(message) => {
                write!(f, "could not serialize message: {}", message)
            }
            Error::CouldNotSend(message) => write!(f, "could not send message: {}", message),
            Error::CouldNotRead(message) => write!(f, "could not read input: {}", message),
        }
    }
}
