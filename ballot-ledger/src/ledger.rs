use std::collections::HashSet;

use tracing::{debug, warn};

use ballot_common::{BallotError, CandidateTally, Result};

use crate::candidate::Candidate;

/// Armazena os candidatos, na ordem original, e suas contagens de votos.
#[derive(Debug, Clone)]
pub struct CandidateLedger {
    candidates: Vec<Candidate>,
}

impl CandidateLedger {
    /// Creates one candidate per name, each with zero votes.
    ///
    /// Fails with `InvalidConfiguration` when the list is empty, has a blank
    /// name, or repeats a name.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for name in names {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(BallotError::InvalidConfiguration(
                    "candidate names must not be blank".to_string(),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(BallotError::InvalidConfiguration(format!(
                    "duplicate candidate '{}'",
                    name
                )));
            }
            candidates.push(Candidate::new(name));
        }

        if candidates.is_empty() {
            return Err(BallotError::InvalidConfiguration(
                "at least one candidate is required".to_string(),
            ));
        }

        debug!("📋 Ledger inicializado com {} candidatos", candidates.len());
        Ok(Self { candidates })
    }

    /// Records one vote for the candidate at `index`.
    pub fn record_vote(&mut self, index: usize) -> Result<&Candidate> {
        let len = self.candidates.len();
        let candidate = self.candidates.get_mut(index).ok_or_else(|| {
            warn!("⚠️ Voto para candidato inexistente: índice {} (total {})", index, len);
            BallotError::IndexOutOfRange { index, len }
        })?;
        candidate.add_vote();
        Ok(candidate)
    }

    /// Adds `count` votes at once. Used by tooling that seeds a ledger.
    pub fn add_votes(&mut self, index: usize, count: u64) -> Result<&Candidate> {
        let len = self.candidates.len();
        let candidate = self
            .candidates
            .get_mut(index)
            .ok_or(BallotError::IndexOutOfRange { index, len })?;
        candidate.add_votes(count);
        Ok(candidate)
    }

    /// (name, votes) pairs in original order. Calling it has no side effects,
    /// so it can be iterated as many times as needed.
    pub fn tallies(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.candidates.iter().map(|c| (c.name(), c.votes()))
    }

    pub fn tally_snapshot(&self) -> Vec<CandidateTally> {
        self.candidates.iter().map(Candidate::to_tally).collect()
    }

    /// Candidate with the greatest vote count. Ties go to whoever is listed first.
    pub fn winner(&self) -> Result<&Candidate> {
        let mut iter = self.candidates.iter();
        let mut best = iter.next().ok_or(BallotError::EmptyLedger)?;
        for candidate in iter {
            if candidate.votes() > best.votes() {
                best = candidate;
            }
        }
        Ok(best)
    }

    pub fn candidate(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.candidates.iter().position(|c| c.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.candidates.iter().map(Candidate::name)
    }

    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(Candidate::votes).sum()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> CandidateLedger {
        CandidateLedger::new(["Alice", "Bob", "Charlie"]).unwrap()
    }

    #[test]
    fn test_initialize_rejects_bad_lists() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            CandidateLedger::new(empty),
            Err(BallotError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CandidateLedger::new(["Alice", "Bob", "Alice"]),
            Err(BallotError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            CandidateLedger::new(["Alice", "  "]),
            Err(BallotError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_record_vote() {
        let mut ledger = ledger();
        let c = ledger.record_vote(1).unwrap();
        assert_eq!(c.name(), "Bob");
        assert_eq!(c.votes(), 1);
        assert_eq!(ledger.total_votes(), 1);
    }

    #[test]
    fn test_out_of_range_leaves_tallies_unchanged() {
        let mut ledger = ledger();
        ledger.record_vote(0).unwrap();
        let before = ledger.tally_snapshot();

        let err = ledger.record_vote(99).unwrap_err();
        assert!(matches!(err, BallotError::IndexOutOfRange { index: 99, len: 3 }));
        assert_eq!(ledger.tally_snapshot(), before);
    }

    #[test]
    fn test_tallies_are_restartable() {
        let mut ledger = ledger();
        ledger.record_vote(2).unwrap();

        let first: Vec<_> = ledger.tallies().collect();
        let second: Vec<_> = ledger.tallies().collect();
        assert_eq!(first, vec![("Alice", 0), ("Bob", 0), ("Charlie", 1)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_winner_tie_goes_to_first_listed() {
        let mut ledger = ledger();
        ledger.add_votes(0, 5).unwrap();
        ledger.add_votes(1, 5).unwrap();
        ledger.add_votes(2, 3).unwrap();
        assert_eq!(ledger.winner().unwrap().name(), "Alice");

        ledger.record_vote(1).unwrap();
        assert_eq!(ledger.winner().unwrap().name(), "Bob");
    }

    #[test]
    fn test_winner_with_no_votes_is_first() {
        let ledger = ledger();
        let winner = ledger.winner().unwrap();
        assert_eq!(winner.name(), "Alice");
        assert_eq!(winner.votes(), 0);
    }

    #[test]
    fn test_lookup_helpers() {
        let ledger = ledger();
        assert_eq!(ledger.len(), 3);
        assert!(!ledger.is_empty());
        assert_eq!(ledger.index_of("Charlie"), Some(2));
        assert_eq!(ledger.index_of("Dave"), None);
        assert_eq!(ledger.candidate(1).map(Candidate::name), Some("Bob"));
        assert_eq!(ledger.names().collect::<Vec<_>>(), vec!["Alice", "Bob", "Charlie"]);
    }
}
