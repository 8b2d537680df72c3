use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque voter identifier, e.g. `"Voter 7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterId(pub String);

impl VoterId {
    /// Builds the identifier of the `seq`-th voter (1-based) under `prefix`.
    pub fn numbered(prefix: &str, seq: usize) -> Self {
        VoterId(format!("{} {}", prefix, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        VoterId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_ids() {
        assert_eq!(VoterId::numbered("Voter", 1).as_str(), "Voter 1");
        assert_eq!(VoterId::numbered("Eleitor", 12).to_string(), "Eleitor 12");
        assert_eq!(VoterId::from("Voter 3"), VoterId::numbered("Voter", 3));
    }
}
