use std::fmt;

use serde::{Deserialize, Serialize};

use ballot_common::VoterId;

/// Where the engine is in the admit / vote / cycle sequence.
///
/// The current voter lives inside `AwaitingVoteForCurrentVoter`, so a vote
/// can only be recorded when somebody is actually holding the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "voter")]
pub enum EngineState {
    /// `start` has not been called yet.
    AwaitingInit,
    /// A voter was admitted and may cast a vote.
    AwaitingVoteForCurrentVoter(VoterId),
    /// Nobody is admitted. Reached when the cycle cap was hit by a vote.
    AwaitingNextVoterOrCycle,
    /// `admit_next` was attempted at the cap; only `advance_cycle` moves on.
    CycleBoundary,
    /// Every configured voter has voted.
    AllVotersComplete,
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self {
            EngineState::AwaitingInit => "AwaitingInit",
            EngineState::AwaitingVoteForCurrentVoter(_) => "AwaitingVoteForCurrentVoter",
            EngineState::AwaitingNextVoterOrCycle => "AwaitingNextVoterOrCycle",
            EngineState::CycleBoundary => "CycleBoundary",
            EngineState::AllVotersComplete => "AllVotersComplete",
        }
    }

    pub fn current_voter(&self) -> Option<&VoterId> {
        match self {
            EngineState::AwaitingVoteForCurrentVoter(voter) => Some(voter),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, EngineState::AllVotersComplete)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::AwaitingInit
    }
}

/// Status line a presentation layer shows next to the ballot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineStatus {
    Idle,
    Voting(VoterId),
    CycleEnded { cap: usize },
    ResultsReady,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineStatus::Idle => write!(f, "No voters in queue."),
            EngineStatus::Voting(voter) => write!(f, "{} is voting...", voter),
            EngineStatus::CycleEnded { cap } => {
                write!(f, "Cycle ended: {} voters have voted.", cap)
            }
            EngineStatus::ResultsReady => write!(f, "All voters have voted. Results are ready."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_voter_only_when_voting() {
        let voting = EngineState::AwaitingVoteForCurrentVoter(VoterId::from("Voter 4"));
        assert_eq!(voting.current_voter(), Some(&VoterId::from("Voter 4")));
        assert_eq!(EngineState::CycleBoundary.current_voter(), None);
        assert_eq!(EngineState::default(), EngineState::AwaitingInit);
        assert!(EngineState::AllVotersComplete.is_complete());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            EngineStatus::Voting(VoterId::from("Voter 1")).to_string(),
            "Voter 1 is voting..."
        );
        assert_eq!(
            EngineStatus::CycleEnded { cap: 10 }.to_string(),
            "Cycle ended: 10 voters have voted."
        );
        assert_eq!(EngineStatus::Idle.to_string(), "No voters in queue.");
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let json = serde_json::to_string(&EngineState::AwaitingVoteForCurrentVoter(
            VoterId::from("Voter 2"),
        ))
        .unwrap();
        assert_eq!(json, r#"{"state":"AwaitingVoteForCurrentVoter","voter":"Voter 2"}"#);

        let json = serde_json::to_string(&EngineState::CycleBoundary).unwrap();
        assert_eq!(json, r#"{"state":"CycleBoundary"}"#);
    }
}
