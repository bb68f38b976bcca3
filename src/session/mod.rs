mod messages;

pub use messages::{Error, IncomingMessage, OutgoingMessage};

use crate::{Game, MoveOutcome, Snapshot};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Settings of a line protocol session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionArgs {
    /// Send the start position as soon as the session opens.
    pub snapshot_on_start: bool,
    /// Follow every game state with the moves allowed next.
    pub send_allowed_moves: bool,
}

impl Default for SessionArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionArgs {
    const DEFAULT_SNAPSHOT_ON_START: bool = true;
    const DEFAULT_SEND_ALLOWED_MOVES: bool = false;

    pub fn new() -> Self {
        Self {
            snapshot_on_start: Self::DEFAULT_SNAPSHOT_ON_START,
            send_allowed_moves: Self::DEFAULT_SEND_ALLOWED_MOVES,
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        let snapshot_on_start = std::env::var("UTTT_SNAPSHOT_ON_START")
            .ok()
            .and_then(|x| x.parse().ok())
            .unwrap_or(Self::DEFAULT_SNAPSHOT_ON_START);
        let send_allowed_moves = std::env::var("UTTT_SEND_ALLOWED_MOVES")
            .ok()
            .and_then(|x| x.parse().ok())
            .unwrap_or(Self::DEFAULT_SEND_ALLOWED_MOVES);

        Self {
            snapshot_on_start,
            send_allowed_moves,
        }
    }
}

/// Drives one game over a JSON-lines stream: one `IncomingMessage` per input
/// line, one `OutgoingMessage` per output line.
pub struct Session<R: BufRead, W: Write> {
    pub args: SessionArgs,
    game: Game,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, args: SessionArgs) -> Self {
        Self {
            args,
            game: Game::new(),
            reader,
            writer,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until the input ends. Malformed lines are answered with an
    /// error message, only I/O failures stop the session.
    pub fn run(&mut self) -> Result<(), Error> {
        info!("session started with {:?}", self.args);
        if self.args.snapshot_on_start {
            let start = self.game_state_messages();
            self.send_all(&start)?;
        }

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| Error::CouldNotRead(e.to_string()))?;
            if read == 0 {
                debug!("input closed. Exiting...");
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let responses = match serde_json::from_str::<IncomingMessage>(trimmed) {
                Ok(message) => self.handle_message(message),
                Err(e) => {
                    debug!("could not parse {:?}: {}", trimmed, e);
                    vec![OutgoingMessage::Error {
                        error_message: Error::CouldNotParse(e.to_string()),
                    }]
                }
            };
            self.send_all(&responses)?;
        }
        info!("session ended");
        Ok(())
    }

    pub fn handle_message(&mut self, message: IncomingMessage) -> Vec<OutgoingMessage> {
        debug!("received {:?}", message);
        match message {
            IncomingMessage::Move { board, cell } => match self.game.attempt_move(board, cell) {
                Ok(outcome) => {
                    let mut responses = self.game_state_messages();
                    if let MoveOutcome::Finished { state } = outcome {
                        responses.push(OutgoingMessage::GameOver { state });
                    }
                    responses
                }
                Err(reason) => vec![OutgoingMessage::Rejected {
                    reason,
                    game_state: Snapshot::from(self.game.snapshot()),
                }],
            },
            IncomingMessage::Reset {} => {
                self.game.reset();
                self.game_state_messages()
            }
            IncomingMessage::Snapshot {} => self.game_state_messages(),
            IncomingMessage::AllowedMoves {} => vec![OutgoingMessage::AllowedMoves {
                moves: self.game.snapshot().get_allowed_moves(),
            }],
            IncomingMessage::Ping {} => vec![OutgoingMessage::Pong {}],
        }
    }

    fn game_state_messages(&self) -> Vec<OutgoingMessage> {
        let board = self.game.snapshot();
        let mut messages = vec![OutgoingMessage::GameState {
            game_state: Snapshot::from(board),
        }];
        if self.args.send_allowed_moves {
            messages.push(OutgoingMessage::AllowedMoves {
                moves: board.get_allowed_moves(),
            });
        }
        messages
    }

    fn send_all(&mut self, messages: &[OutgoingMessage]) -> Result<(), Error> {
        for message in messages {
            let serialized =
                serde_json::to_string(message).map_err(|e| Error::CouldNotSerialize(e.to_string()))?;
            writeln!(self.writer, "{}", serialized).map_err(|e| Error::CouldNotSend(e.to_string()))?;
        }
        self.writer
            .flush()
            .map_err(|e| Error::CouldNotSend(e.to_string()))
    }
}
