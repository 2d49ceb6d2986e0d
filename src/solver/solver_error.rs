use thiserror::Error;

use crate::GameError;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Cannot read {1}")]
    InvalidPath(#[source] std::io::Error, String),

    #[error("Cannot read game from input")]
    ReadInput(#[source] std::io::Error),

    #[error("Invalid game description: {0}")]
    ParseGame(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot parse configuration file.")]
    ParseConfigJsonError(#[source] serde_json::Error),

    #[error("Cannot write report.")]
    WriteError(#[source] std::io::Error),

    #[error("Cannot write report.")]
    WriteJsonError(#[source] serde_json::Error),

    #[error("Cannot write report.")]
    WriteCsvError(#[from] csv::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}
