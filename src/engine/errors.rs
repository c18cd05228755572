use crate::domain::PlayerId;
use crate::eval::EvalError;

use thiserror::Error;

/// Ошибки движка. Всё локально к одному вызову: повторять раздачу
/// или нет — решает вызывающий, не движок.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Requested {requested} cards but only {remaining} remain in the deck")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("Arrangement has slot sizes {front}/{middle}/{back}, expected 3/5/5")]
    MalformedArrangement {
        front: usize,
        middle: usize,
        back: usize,
    },

    #[error("Arrangement of player {0} does not use exactly the 13 dealt cards")]
    ForeignCards(PlayerId),

    #[error("Player {0} is not seated in this round")]
    PlayerNotInRound(PlayerId),

    #[error("Player {0} has not submitted an arrangement")]
    ArrangementMissing(PlayerId),

    #[error("Need at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("A 52-card deck seats at most 4 players of 13, got {0}")]
    TooManyPlayers(usize),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Internal error: {0}")]
    Internal(&'static str),
}
