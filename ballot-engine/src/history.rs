use std::fmt;

use serde::{Deserialize, Serialize};

use ballot_common::VoterId;

/// One cast vote, as kept in the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// 1-based position in the history.
    pub sequence: usize,
    pub voter: VoterId,
    pub candidate_index: usize,
    pub candidate: String,
}

impl fmt::Display for VoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} voted for {}", self.voter, self.candidate)
    }
}

/// Append-only vote history. Insertion order is the audit order; displays
/// usually want `recent_first`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VotingHistory {
    records: Vec<VoteRecord>,
}

impl VotingHistory {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub(crate) fn append(
        &mut self,
        voter: VoterId,
        candidate_index: usize,
        candidate: String,
    ) -> &VoteRecord {
        let sequence = self.records.len() + 1;
        self.records.push(VoteRecord {
            sequence,
            voter,
            candidate_index,
            candidate,
        });
        &self.records[sequence - 1]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &VoteRecord> + '_ {
        self.records.iter()
    }

    pub fn recent_first(&self) -> impl Iterator<Item = &VoteRecord> + '_ {
        self.records.iter().rev()
    }

    pub fn last(&self) -> Option<&VoteRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One line per vote, most recent first.
    pub fn render(&self) -> String {
        self.recent_first().fold(String::new(), |mut out, record| {
            out.push_str(&record.to_string());
            out.push('\n');
            out
        })
    }
}
