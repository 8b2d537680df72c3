use std::collections::VecDeque;

use ballot_common::VoterId;

/// FIFO of voters waiting to be admitted. Filled once, never refilled.
#[derive(Debug, Default, Clone)]
pub(crate) struct VoterQueue {
    voters: VecDeque<VoterId>,
}

impl VoterQueue {
    /// Queue holding `"<prefix> 1"` .. `"<prefix> <total>"`.
    pub fn populate(prefix: &str, total: usize) -> Self {
        Self {
            voters: (1..=total).map(|seq| VoterId::numbered(prefix, seq)).collect(),
        }
    }

    pub fn pop(&mut self) -> Option<VoterId> {
        self.voters.pop_front()
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_in_order() {
        let mut queue = VoterQueue::populate("Voter", 3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(VoterId::from("Voter 1")));
        assert_eq!(queue.pop(), Some(VoterId::from("Voter 2")));
        assert_eq!(queue.pop(), Some(VoterId::from("Voter 3")));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
