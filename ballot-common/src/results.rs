use std::fmt;

use serde::{Deserialize, Serialize};

/// Accumulated vote count of one candidate, as handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTally {
    pub name: String,
    pub votes: u64,
}

impl CandidateTally {
    pub fn new(name: impl Into<String>, votes: u64) -> Self {
        Self { name: name.into(), votes }
    }
}

impl fmt::Display for CandidateTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} votes)", self.name, self.votes)
    }
}

/// Final outcome of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResults {
    /// Tallies in original candidate order.
    pub tallies: Vec<CandidateTally>,
    pub winner: CandidateTally,
}

impl FinalResults {
    /// Sum of every candidate's votes.
    pub fn total_votes(&self) -> u64 {
        self.tallies.iter().map(|t| t.votes).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FinalResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Voting Results:")?;
        for tally in &self.tallies {
            writeln!(f, "{}", tally)?;
        }
        writeln!(f)?;
        write!(
            f,
            "The winner is: {} with {} votes!",
            self.winner.name, self.winner.votes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinalResults {
        FinalResults {
            tallies: vec![
                CandidateTally::new("Alice", 2),
                CandidateTally::new("Bob", 1),
            ],
            winner: CandidateTally::new("Alice", 2),
        }
    }

    #[test]
    fn test_report_format() {
        let report = sample().to_string();
        assert_eq!(
            report,
            "Final Voting Results:\nAlice (2 votes)\nBob (1 votes)\n\nThe winner is: Alice with 2 votes!"
        );
    }

    #[test]
    fn test_json_output() {
        let results = sample();
        assert_eq!(results.total_votes(), 3);

        let json = results.to_json().unwrap();
        let parsed: FinalResults = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.winner.name, "Alice");
    }
}
