use std::fmt;

use serde::{Deserialize, Serialize};

use ballot_common::CandidateTally;

/// A candidate and the number of votes recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    name: String,
    votes: u64,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), votes: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    /// Incrementa a contagem em exatamente um voto.
    pub(crate) fn add_vote(&mut self) {
        self.votes += 1;
    }

    pub(crate) fn add_votes(&mut self, count: u64) {
        self.votes += count;
    }

    pub fn to_tally(&self) -> CandidateTally {
        CandidateTally::new(self.name.clone(), self.votes)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} votes)", self.name, self.votes)
    }
}
