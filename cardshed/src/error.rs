use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least 2 players")]
    TooFewPlayers,
    #[error("a game takes at most 10 players")]
    TooManyPlayers,
    #[error("no round has been started")]
    RoundNotStarted,
    #[error("the round is over; seat {winner} has already emptied their hand")]
    RoundOver { winner: usize },
    #[error("seat {seat} acted out of turn (seat {current} holds the turn)")]
    NotYourTurn { seat: usize, current: usize },
    #[error("card index {index} is out of range for a hand of {hand_size}")]
    CardIndexOutOfRange { index: usize, hand_size: usize },
    #[error("that card cannot be played on the current discard")]
    IllegalCard,
    #[error("the round has no winner yet")]
    NoWinnerYet,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
