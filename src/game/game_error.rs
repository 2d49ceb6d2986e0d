use thiserror::Error;

use super::{Label, PlayerId};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid game: {0}")]
    InvalidGame(String),

    #[error("Initial label {label} is not in 1..={labels}")]
    InvalidLabel { label: usize, labels: usize },

    #[error("Maximum pivots must be a positive integer")]
    InvalidPivotLimit,

    #[error("Ray termination while entering label {0}")]
    RayTermination(Label),

    #[error("Maximum pivot steps ({0}) reached")]
    MaxPivotsExceeded(usize),

    #[error("Degenerate extraction for the {0} player")]
    DegenerateExtraction(PlayerId),
}
