use thiserror::Error;

/// Errors returned by the candidate ledger and the voting cycle engine.
///
/// None of these are transient: each one points at a misconfigured session or
/// a caller driving the engine in the wrong state.
#[derive(Debug, Error)]
pub enum BallotError {
    /// The candidate list or the cycle configuration is unusable
    /// (empty list, duplicated or blank names, zero cap).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A session must have at least one voter.
    #[error("Invalid voter count: {0} (expected a positive number of voters)")]
    InvalidVoterCount(usize),

    /// A vote was cast while no voter occupies the current-voter slot.
    #[error("No active voter: admit a voter before casting a vote")]
    NoActiveVoter,

    /// `advance_cycle` was called while the cycle cap has not been reached,
    /// or with nobody left in the queue.
    #[error("Cycle is not at a boundary")]
    CycleNotAtBoundary,

    /// The candidate index does not identify a candidate.
    #[error("Candidate index {index} out of range (ledger has {len} candidates)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Results were requested before every voter voted.
    #[error("Voting incomplete: {voted}/{total} voters have voted")]
    VotingIncomplete { voted: usize, total: usize },

    /// Winner requested from a ledger without candidates.
    #[error("Ledger has no candidates")]
    EmptyLedger,

    /// `start` was called on an engine that already runs a session.
    #[error("Session already started")]
    SessionAlreadyStarted,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BallotError {
    fn from(err: serde_json::Error) -> Self {
        BallotError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BallotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BallotError::IndexOutOfRange { index: 99, len: 3 };
        assert_eq!(err.to_string(), "Candidate index 99 out of range (ledger has 3 candidates)");

        let err = BallotError::VotingIncomplete { voted: 2, total: 5 };
        assert_eq!(err.to_string(), "Voting incomplete: 2/5 voters have voted");
    }

    #[test]
    fn test_json_error_maps_to_config() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: BallotError = parse.into();
        assert!(matches!(err, BallotError::Config(_)));
    }
}
