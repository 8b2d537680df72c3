use thiserror::Error;

use ballot_common::BallotError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Ballot(#[from] BallotError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input line that is not a known command.
    #[error("{0}")]
    Input(String),
}

impl From<String> for CliError {
    fn from(message: String) -> Self {
        CliError::Input(message)
    }
}

impl From<&str> for CliError {
    fn from(message: &str) -> Self {
        CliError::Input(message.to_string())
    }
}
